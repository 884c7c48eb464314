//! Name-based UUIDs hashed from a namespace and a name

use crate::{uuid::fixup, Error, Uuid};
use md5::{Digest, Md5};
use sha1::Sha1;
use sha2::Sha256;
use std::str;

/// Digest algorithms accepted for name-based generation.
///
/// The digests themselves are consumed as opaque `bytes -> bytes` functions;
/// this crate does not implement any of them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum HashAlgorithm {
    /// MD5, producing version 3 UUIDs.
    Md5,
    /// SHA-1, producing version 5 UUIDs.
    Sha1,
    /// SHA-256, fixed up with the version 8 convention.
    Sha256,
}

impl str::FromStr for HashAlgorithm {
    type Err = Error;

    /// Resolves a digest name, case-insensitively and with or without the
    /// customary hyphen.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        match src.to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            _ => Err(Error::UnsupportedAlgorithm(src.to_owned())),
        }
    }
}

impl Uuid {
    /// Generates a version 3 UUID from the MD5 hash of a namespace and a
    /// name.
    pub fn v3(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        Self::hashed::<Md5>(3, None, namespace, name.as_ref())
    }

    /// Generates a version 5 UUID from the SHA-1 hash of a namespace and a
    /// name.
    pub fn v5(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        Self::hashed::<Sha1>(5, None, namespace, name.as_ref())
    }

    /// Generates a UUID from the SHA-256 hash of a namespace and a name.
    ///
    /// RFC 4122 assigns no version number to this hash, so the result is
    /// fixed up with the version 8 convention and, per rfc4122bis, the
    /// [`ns::SHA2_256`](crate::ns::SHA2_256) hash-space ID is hashed in
    /// ahead of the namespace.
    pub fn sha256(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        Self::hashed::<Sha256>(8, Some(&crate::ns::SHA2_256), namespace, name.as_ref())
    }

    /// Generates a name-based UUID with the digest selected by `algorithm`.
    pub fn new_name_based(
        algorithm: HashAlgorithm,
        namespace: &Uuid,
        name: impl AsRef<[u8]>,
    ) -> Self {
        match algorithm {
            HashAlgorithm::Md5 => Self::v3(namespace, name),
            HashAlgorithm::Sha1 => Self::v5(namespace, name),
            HashAlgorithm::Sha256 => Self::sha256(namespace, name),
        }
    }

    /// Hashes `[hash_space ++] namespace.bytes ++ name` and keeps the first
    /// 16 digest bytes.
    fn hashed<D: Digest>(
        version: u8,
        hash_space: Option<&Uuid>,
        namespace: &Uuid,
        name: &[u8],
    ) -> Self {
        let mut hasher = D::new();
        if let Some(space) = hash_space {
            hasher.update(space.as_bytes());
        }
        hasher.update(namespace.as_bytes());
        hasher.update(name);
        let digest = hasher.finalize();

        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        Self::from_bytes(fixup(bytes, version))
    }
}
