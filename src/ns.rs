//! Well-known namespace UUIDs for name-based generation
//!
//! The generation core treats every entry here as an opaque 16-byte
//! namespace value; any other valid [`Uuid`] works just as well.

use crate::Uuid;

/// Nil UUID.
pub const NIL: Uuid = Uuid::NIL;

/// Max UUID.
pub const MAX: Uuid = Uuid::MAX;

/// Name space for fully-qualified domain names (RFC 4122).
pub const DNS: Uuid = Uuid::from_u128(0x6ba7b810_9dad_11d1_80b4_00c04fd430c8);

/// Name space for URLs (RFC 4122).
pub const URL: Uuid = Uuid::from_u128(0x6ba7b811_9dad_11d1_80b4_00c04fd430c8);

/// Name space for ISO object identifiers (RFC 4122).
pub const OID: Uuid = Uuid::from_u128(0x6ba7b812_9dad_11d1_80b4_00c04fd430c8);

/// Name space for X.500 distinguished names (RFC 4122).
pub const X500: Uuid = Uuid::from_u128(0x6ba7b814_9dad_11d1_80b4_00c04fd430c8);

/// Hash-space ID for SHA-224 (rfc4122bis).
pub const SHA2_224: Uuid = Uuid::from_u128(0x59031ca3_fbdb_47fb_9f6c_0f33e2eb7f33);

/// Hash-space ID for SHA-256 (rfc4122bis).
pub const SHA2_256: Uuid = Uuid::from_u128(0x3fb32780_953c_4464_9cfd_e85dbbe9843d);

/// Hash-space ID for SHA-384 (rfc4122bis).
pub const SHA2_384: Uuid = Uuid::from_u128(0xe6800581_f333_484b_8778_601ff2b58da8);

/// Hash-space ID for SHA-512 (rfc4122bis).
pub const SHA2_512: Uuid = Uuid::from_u128(0x0fde22f2_e7ba_4fd1_9753_9c2ea88fa3f9);

/// Hash-space ID for SHA-512/224 (rfc4122bis).
pub const SHA2_512_224: Uuid = Uuid::from_u128(0x003c2038_c4fe_4b95_a672_0c26c1b79542);

/// Hash-space ID for SHA-512/256 (rfc4122bis).
pub const SHA2_512_256: Uuid = Uuid::from_u128(0x9475ad00_3769_4c07_9642_5e7383732306);

/// Hash-space ID for SHA3-224 (rfc4122bis).
pub const SHA3_224: Uuid = Uuid::from_u128(0x9768761f_ac5a_419e_a180_7ca239e8025a);

/// Hash-space ID for SHA3-256 (rfc4122bis).
pub const SHA3_256: Uuid = Uuid::from_u128(0x2034d66b_4047_4553_8f80_70e593176877);

/// Hash-space ID for SHA3-384 (rfc4122bis).
pub const SHA3_384: Uuid = Uuid::from_u128(0x872fb339_2636_4bdd_bda6_b6dc2a82b1b3);

/// Hash-space ID for SHA3-512 (rfc4122bis).
pub const SHA3_512: Uuid = Uuid::from_u128(0xa4920a5d_a8a6_426c_8d14_a6cafbe64c7b);

/// Hash-space ID for SHAKE-128 (rfc4122bis).
pub const SHAKE_128: Uuid = Uuid::from_u128(0x7ea218f6_629a_425f_9f88_7439d63296bb);

/// Hash-space ID for SHAKE-256 (rfc4122bis).
pub const SHAKE_256: Uuid = Uuid::from_u128(0x2e7fc6a4_2919_4edc_b0ba_7d7062ce4f0a);

/// Resolves one of the well-known namespaces by its lowercase name.
pub fn lookup(name: &str) -> Option<Uuid> {
    match name {
        "nil" => Some(NIL),
        "max" => Some(MAX),
        "dns" => Some(DNS),
        "url" => Some(URL),
        "oid" => Some(OID),
        "x500" => Some(X500),
        "sha2-224" => Some(SHA2_224),
        "sha2-256" => Some(SHA2_256),
        "sha2-384" => Some(SHA2_384),
        "sha2-512" => Some(SHA2_512),
        "sha2-512/224" => Some(SHA2_512_224),
        "sha2-512/256" => Some(SHA2_512_256),
        "sha3-224" => Some(SHA3_224),
        "sha3-256" => Some(SHA3_256),
        "sha3-384" => Some(SHA3_384),
        "sha3-512" => Some(SHA3_512),
        "shake-128" => Some(SHAKE_128),
        "shake-256" => Some(SHAKE_256),
        _ => None,
    }
}
