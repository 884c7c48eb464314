//! The UUID value type, its bit-level invariants, and the text codec

use crate::Error;
use std::{fmt, ops, str};

/// Represents a Universally Unique IDentifier.
///
/// The value is exactly 16 bytes, immutable after construction, and compares
/// by byte-for-byte binary equality. The version nibble lives in bits 4-7 of
/// byte 6; the RFC 4122 variant bits are the top two bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// The layout family encoded in the top bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// Reserved NCS backward compatibility (`0xx`).
    Var0,
    /// RFC 4122 layout (`10x`); every generated version uses this.
    Var10,
    /// Reserved Microsoft backward compatibility (`110`).
    Var110,
    /// Reserved for future definition (`111`).
    Var111,
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000), version 0.
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff), version 15.
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates a UUID from a 16-byte big-endian array as-is.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a UUID from a `u128` in big-endian byte order.
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a version 8 UUID from a caller-supplied payload.
    ///
    /// The payload is used verbatim except for the version and variant bits.
    /// Fails with [`Error::Length`] unless exactly 16 bytes are given.
    pub fn v8(payload: &[u8]) -> Result<Self, Error> {
        let bytes = <[u8; 16]>::try_from(payload).map_err(|_| Error::Length {
            expected: 16,
            actual: payload.len(),
        })?;
        Ok(Self(fixup(bytes, 8)))
    }

    /// Returns the version nibble (bits 4-7 of byte 6).
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the layout family encoded in byte 8.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 5 {
            0b000 | 0b001 | 0b010 | 0b011 => Variant::Var0,
            0b100 | 0b101 => Variant::Var10,
            0b110 => Variant::Var110,
            _ => Variant::Var111,
        }
    }

    /// Checks the structural invariant: version 0 requires all-zero bytes,
    /// version 15 requires all-0xFF bytes, versions 1 through 8 are valid as
    /// such, and every other version nibble is invalid.
    pub fn is_valid(&self) -> bool {
        match self.version() {
            0 => self.is_nil(),
            1..=8 => true,
            15 => self.is_max(),
            _ => false,
        }
    }

    /// Returns `true` for the nil UUID.
    pub fn is_nil(&self) -> bool {
        self.0 == [0x00; 16]
    }

    /// Returns `true` for the max UUID.
    pub fn is_max(&self) -> bool {
        self.0 == [0xff; 16]
    }

    /// Creates a UUID from raw or textual input.
    ///
    /// Surrounding ASCII whitespace is trimmed first. Exactly 16 remaining
    /// bytes are taken as the binary value; any other input must be UTF-8
    /// text holding 32 hex digits after an optional `urn:uuid:`/`uuid:`
    /// prefix and any `{`, `}`, `-` characters are removed. The decoded value
    /// must satisfy [`Uuid::is_valid`]; empty input is always an error.
    pub fn parse(input: &[u8]) -> Result<Self, Error> {
        let trimmed = trim_ascii(input);
        if trimmed.is_empty() {
            return Err(Error::Parse);
        }
        if trimmed.len() == 16 {
            let mut bytes = [0u8; 16];
            bytes.copy_from_slice(trimmed);
            return Self(bytes).validated();
        }

        str::from_utf8(trimmed)
            .map_err(|_| Error::Parse)
            .and_then(Self::parse_text)
    }

    /// Parses the textual forms: canonical `8-4-4-4-12`, brace-wrapped,
    /// `urn:uuid:`/`uuid:`-prefixed, and bare 32-digit hex.
    fn parse_text(value: &str) -> Result<Self, Error> {
        let value = value
            .strip_prefix("urn:uuid:")
            .or_else(|| value.strip_prefix("uuid:"))
            .unwrap_or(value);

        let mut bytes = [0u8; 16];
        let mut digits = value.chars().filter(|c| !matches!(*c, '{' | '}' | '-'));
        for byte in &mut bytes {
            let hi = digits.next().and_then(|c| c.to_digit(16)).ok_or(Error::Parse)?;
            let lo = digits.next().and_then(|c| c.to_digit(16)).ok_or(Error::Parse)?;
            *byte = ((hi << 4) | lo) as u8;
        }
        if digits.next().is_some() {
            return Err(Error::Parse);
        }
        Self(bytes).validated()
    }

    fn validated(self) -> Result<Self, Error> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::Validation)
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a
    /// stack-allocated structure that can be dereferenced as `str` and
    /// [`Display`](fmt::Display)ed.
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for i in 0..16 {
            let e = self.0[i] as usize;
            *buf_iter.next().unwrap() = DIGITS[e >> 4];
            *buf_iter.next().unwrap() = DIGITS[e & 15];
            if i == 3 || i == 5 || i == 7 || i == 9 {
                *buf_iter.next().unwrap() = b'-';
            }
        }
        debug_assert!(buffer.is_ascii());
        UuidStr(buffer)
    }

    /// Returns the lowercase 8-4-4-4-12 canonical hexadecimal form.
    pub fn format_as_string(&self) -> String {
        self.encode().to_string()
    }

    /// Returns the URI form, `urn:uuid:` followed by the canonical form.
    pub fn format_as_uri(&self) -> String {
        format!("urn:uuid:{}", self.encode())
    }
}

/// Overwrites the version nibble of byte 6 and forces the RFC 4122 variant
/// bits of byte 8.
///
/// Applied to every generated version except the literal nil and max
/// patterns, which never pass through here.
pub(crate) const fn fixup(mut bytes: [u8; 16], version: u8) -> [u8; 16] {
    bytes[6] = (bytes[6] & 0x0f) | ((version & 0x0f) << 4);
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    bytes
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

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from a textual representation; see [`Uuid::parse`].
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let trimmed = src.trim();
        if trimmed.is_empty() {
            return Err(Error::Parse);
        }
        Self::parse_text(trimmed)
    }
}

impl TryFrom<String> for Uuid {
    type Error = Error;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated
/// 8-4-4-4-12 string representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::parse(value).map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{fixup, Uuid, Variant};
    use crate::Error;

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(Uuid::NIL.version(), 0);
        assert!(Uuid::NIL.is_valid());
        assert!(Uuid::NIL.is_nil());

        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
        assert_eq!(Uuid::MAX.version(), 15);
        assert!(Uuid::MAX.is_valid());
        assert!(Uuid::MAX.is_max());
    }

    /// Applies the version fixup to version 8 payloads
    #[test]
    fn applies_the_version_fixup_to_version_8_payloads() {
        assert_eq!(
            Uuid::v8(&[0x00; 16]).unwrap().format_as_string(),
            "00000000-0000-8000-8000-000000000000"
        );
        assert_eq!(
            Uuid::v8(&[0xff; 16]).unwrap().format_as_string(),
            "ffffffff-ffff-8fff-bfff-ffffffffffff"
        );
        assert_eq!(Uuid::v8(&[0x00; 16]).unwrap().variant(), Variant::Var10);
    }

    /// Reports a length error for wrong-size version 8 payloads
    #[test]
    fn reports_a_length_error_for_wrong_size_version_8_payloads() {
        for n in [0usize, 15, 17, 32] {
            assert_eq!(
                Uuid::v8(&vec![0u8; n]),
                Err(Error::Length {
                    expected: 16,
                    actual: n
                })
            );
        }
    }

    /// Parses every accepted textual shape to the same value
    #[test]
    fn parses_every_accepted_textual_shape_to_the_same_value() {
        let expected: Uuid = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse().unwrap();
        let shapes = [
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6BA7B810-9DAD-11D1-80B4-00C04FD430C8",
            "{6ba7b810-9dad-11d1-80b4-00c04fd430c8}",
            "urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b8109dad11d180b400c04fd430c8",
            "  6ba7b810-9dad-11d1-80b4-00c04fd430c8  ",
        ];
        for shape in shapes {
            assert_eq!(shape.parse::<Uuid>(), Ok(expected), "shape {shape:?}");
        }
    }

    /// Parses exactly sixteen raw bytes verbatim
    #[test]
    fn parses_exactly_sixteen_raw_bytes_verbatim() {
        let bytes = [
            0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4,
            0x30, 0xc8,
        ];
        assert_eq!(
            Uuid::parse(&bytes).unwrap().format_as_string(),
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8"
        );
    }

    /// Rejects malformed textual input as a parse error
    #[test]
    fn rejects_malformed_textual_input_as_a_parse_error() {
        let cases = [
            "",
            "   ",
            "hoge",
            "6ba7b810-9dad-11d1-80b4-00c04fd430",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8ff",
            "6ba7b810-9dad-11d1-80b4-00c04fd430cg",
            "urn:uuid:",
        ];
        for case in cases {
            assert_eq!(case.parse::<Uuid>(), Err(Error::Parse), "input {case:?}");
        }
    }

    /// Rejects disallowed version patterns as a validation error
    #[test]
    fn rejects_disallowed_version_patterns_as_a_validation_error() {
        // version nibble 0xe
        assert_eq!(
            "74738ff5-5367-e958-9aee-98fffdcd1876".parse::<Uuid>(),
            Err(Error::Validation)
        );
        // version nibble 0 with a non-zero tail
        assert_eq!(
            "00000000-0000-0000-0000-0000000000ff".parse::<Uuid>(),
            Err(Error::Validation)
        );
        // version nibble 15 without the all-0xff pattern
        assert_eq!(
            "ffffffff-ffff-ffff-ffff-fffffffffff0".parse::<Uuid>(),
            Err(Error::Validation)
        );
        // same checks apply to raw binary input
        let mut bytes = [0u8; 16];
        bytes[15] = 0xff;
        assert_eq!(Uuid::parse(&bytes), Err(Error::Validation));
    }

    /// Round-trips formatting and parsing
    #[test]
    fn round_trips_formatting_and_parsing() {
        let e: Uuid = "74738ff5-5367-5958-9aee-98fffdcd1876".parse().unwrap();
        assert_eq!(e.format_as_string().parse::<Uuid>(), Ok(e));
        assert_eq!(e.format_as_uri().parse::<Uuid>(), Ok(e));
        assert_eq!(format!("{{{e}}}").parse::<Uuid>(), Ok(e));
        assert_eq!(Uuid::parse(e.as_bytes()), Ok(e));
        assert_eq!(
            e.format_as_uri(),
            "urn:uuid:74738ff5-5367-5958-9aee-98fffdcd1876"
        );
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        let e: Uuid = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse().unwrap();
        assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
        assert_eq!(Uuid::from(u128::from(e)), e);
        assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
        assert_eq!(Uuid::from_u128(0x6ba7b810_9dad_11d1_80b4_00c04fd430c8), e);
    }

    /// Decodes the variant field
    #[test]
    fn decodes_the_variant_field() {
        let cases = [
            (0x00u8, Variant::Var0),
            (0x7f, Variant::Var0),
            (0x80, Variant::Var10),
            (0xbf, Variant::Var10),
            (0xc0, Variant::Var110),
            (0xdf, Variant::Var110),
            (0xe0, Variant::Var111),
            (0xff, Variant::Var111),
        ];
        for (byte8, variant) in cases {
            let mut bytes = [0u8; 16];
            bytes[6] = 0x40;
            bytes[8] = byte8;
            assert_eq!(Uuid::from_bytes(bytes).variant(), variant);
        }
    }

    /// Keeps low nibble of byte 6 and low six bits of byte 8 in fixup
    #[test]
    fn keeps_low_bits_in_fixup() {
        let fixed = fixup([0xff; 16], 4);
        assert_eq!(fixed[6], 0x4f);
        assert_eq!(fixed[8], 0xbf);
        let fixed = fixup([0x00; 16], 7);
        assert_eq!(fixed[6], 0x70);
        assert_eq!(fixed[8], 0x80);
    }
}
