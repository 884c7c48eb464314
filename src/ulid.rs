//! ULID generation and rendering

use crate::{crockford, random, timestamp, Error};
use std::fmt;

/// Represents a Universally Unique Lexicographically Sortable Identifier.
///
/// A ULID is a 48-bit millisecond timestamp followed by 80 random bits,
/// rendered as 26 Crockford Base32 characters. This is the random-mode
/// flavor: two values minted in the same millisecond share their timestamp
/// prefix but are otherwise unordered relative to each other.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Ulid {
    timestamp: u64,
    random: [u8; 10],
}

impl Ulid {
    /// Generates a ULID from the current time and fresh randomness.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            timestamp: timestamp::unix_millis(),
            random: random::bytes()?,
        })
    }

    /// Returns the millisecond timestamp part.
    pub const fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Returns the 26-character lowercase string form.
    ///
    /// The timestamp part is Crockford-encoded and left-padded with `'0'`
    /// (the zero symbol) to exactly 10 characters; the random part is
    /// standard-base32-encoded without padding and transliterated to the
    /// Crockford alphabet, yielding 16 characters.
    pub fn format_as_string(&self) -> String {
        let time_part = format!("{:0>10}", crockford::encode_integer_lower(self.timestamp));
        let rand_part =
            crockford::from_standard_base32(&crockford::encode_standard_base32_nopad(&self.random));
        format!(
            "{}{}",
            &time_part[time_part.len() - 10..],
            rand_part.to_ascii_lowercase()
        )
    }
}

impl fmt::Display for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_as_string())
    }
}

impl From<Ulid> for String {
    fn from(src: Ulid) -> Self {
        src.to_string()
    }
}

/// Generates a ULID; shorthand for [`Ulid::new`].
pub fn ulid() -> Result<Ulid, Error> {
    Ulid::new()
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::Ulid;
    use serde::Serializer;

    impl serde::Serialize for Ulid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.format_as_string())
        }
    }
}
