//! EUI-48/MAC address parsing, generation, and formatting

use crate::{random, Error};
use std::{fmt, str};

/// Represents a 48-bit EUI-48 (MAC) address.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Mac([u8; 6]);

impl Mac {
    /// Generates a random address flagged as unicast and locally
    /// administered, so it can never collide with an IEEE-assigned
    /// universal address.
    pub fn random() -> Result<Self, Error> {
        let mut bytes: [u8; 6] = random::bytes()?;
        bytes[0] = (bytes[0] & 0xfc) | 0x02;
        Ok(Self(bytes))
    }

    /// Creates an address from raw or textual input.
    ///
    /// Exactly six input bytes are used verbatim. Any other input must be
    /// UTF-8 text, trimmed of surrounding whitespace, in one of the accepted
    /// shapes: `08:00:2b:01:02:03`, `08-00-2b-01-02-03`, `08002b:010203`,
    /// `08002b-010203`, `0800.2b01.0203`, `0800-2b01-0203`, or
    /// `08002b010203`. Separators must be uniform within one string.
    pub fn parse(input: &[u8]) -> Result<Self, Error> {
        let trimmed = trim_ascii(input);
        if trimmed.is_empty() {
            return Err(Error::Parse);
        }
        if trimmed.len() == 6 {
            let mut bytes = [0u8; 6];
            bytes.copy_from_slice(trimmed);
            return Ok(Self(bytes));
        }

        str::from_utf8(trimmed)
            .map_err(|_| Error::Parse)
            .and_then(Self::parse_text)
    }

    /// Parses one of the accepted textual shapes.
    fn parse_text(value: &str) -> Result<Self, Error> {
        let accepted = matches_groups(value, ':', 2, 6)
            || matches_groups(value, '-', 2, 6)
            || matches_groups(value, ':', 6, 2)
            || matches_groups(value, '-', 6, 2)
            || matches_groups(value, '.', 4, 3)
            || matches_groups(value, '-', 4, 3)
            || (value.len() == 12 && value.bytes().all(|b| b.is_ascii_hexdigit()));
        if !accepted {
            return Err(Error::Parse);
        }

        let mut bytes = [0u8; 6];
        let mut digits = value.chars().filter(char::is_ascii_hexdigit);
        for byte in &mut bytes {
            let hi = digits.next().and_then(|c| c.to_digit(16)).ok_or(Error::Parse)?;
            let lo = digits.next().and_then(|c| c.to_digit(16)).ok_or(Error::Parse)?;
            *byte = ((hi << 4) | lo) as u8;
        }
        Ok(Self(bytes))
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Returns `true` if byte 0 bit 0 is clear (individual address).
    pub const fn is_unicast(&self) -> bool {
        self.0[0] & 0x01 == 0
    }

    /// Returns `true` if byte 0 bit 0 is set (group address).
    pub const fn is_multicast(&self) -> bool {
        !self.is_unicast()
    }

    /// Returns `true` if byte 0 bit 1 is clear (IEEE-assigned address).
    pub const fn is_universal(&self) -> bool {
        self.0[0] & 0x02 == 0
    }

    /// Returns `true` if byte 0 bit 1 is set (locally administered).
    pub const fn is_local(&self) -> bool {
        !self.is_universal()
    }

    /// Returns the 12 hex digits with no separator (`08002b010203`).
    pub fn format_plain(&self) -> String {
        self.format_impl("")
    }

    /// Returns the colon-separated canonical EUI-48 form (`08:00:2b:01:02:03`).
    pub fn format_eui(&self) -> String {
        self.format_impl(":")
    }

    /// Returns the hyphen-separated form (`08-00-2b-01-02-03`).
    pub fn format_hyphen(&self) -> String {
        self.format_impl("-")
    }

    fn format_impl(&self, sep: &str) -> String {
        self.0
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(sep)
    }
}

/// Checks that `value` is `count` groups of `width` hex digits joined by
/// `sep`. Mixed separators fail because every group must be pure hex.
fn matches_groups(value: &str, sep: char, width: usize, count: usize) -> bool {
    let mut groups = 0;
    for group in value.split(sep) {
        if group.len() != width || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return false;
        }
        groups += 1;
    }
    groups == count
}

fn trim_ascii(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |e| e + 1);
    &bytes[start..end]
}

impl fmt::Display for Mac {
    /// Returns the colon-separated canonical EUI-48 form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_eui())
    }
}

impl str::FromStr for Mac {
    type Err = Error;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let trimmed = src.trim();
        if trimmed.is_empty() {
            return Err(Error::Parse);
        }
        Self::parse_text(trimmed)
    }
}

impl From<[u8; 6]> for Mac {
    fn from(src: [u8; 6]) -> Self {
        Self(src)
    }
}

impl From<Mac> for [u8; 6] {
    fn from(src: Mac) -> Self {
        src.0
    }
}

impl TryFrom<&[u8]> for Mac {
    type Error = Error;

    /// Creates an address from exactly six raw bytes.
    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 6]>::try_from(src)
            .map(Self)
            .map_err(|_| Error::Length {
                expected: 6,
                actual: src.len(),
            })
    }
}

impl AsRef<[u8]> for Mac {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
