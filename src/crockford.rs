//! Crockford Base32 codec shared by the ULID text form

/// The 32 Crockford symbols; `I`, `L`, `O`, and `U` are omitted to avoid
/// visual ambiguity.
const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Encodes a non-negative integer in big-endian Crockford Base32, uppercase.
///
/// Zero encodes to `"0"`.
pub(crate) fn encode_integer_upper(mut value: u64) -> String {
    if value == 0 {
        return String::from("0");
    }

    let mut digits = [0u8; 13]; // ceil(64 / 5)
    let mut pos = digits.len();
    while value > 0 {
        pos -= 1;
        digits[pos] = ALPHABET[(value % 32) as usize];
        value /= 32;
    }

    digits[pos..].iter().map(|&b| b as char).collect()
}

/// Encodes a non-negative integer in big-endian Crockford Base32, lowercase.
pub(crate) fn encode_integer_lower(value: u64) -> String {
    encode_integer_upper(value).to_ascii_lowercase()
}

/// Transliterates an RFC 4648 standard Base32 string to the Crockford
/// alphabet, dropping any trailing `=` padding and preserving length.
///
/// Each source character maps 1:1 to the Crockford symbol with the same
/// five-bit value (`A` -> `0`, ..., `Z` -> `S`, `2` -> `T`, ..., `7` -> `Z`).
/// The input must come from a trusted standard encoder; anything outside the
/// source alphabet is a logic error.
pub(crate) fn from_standard_base32(base32: &str) -> String {
    base32
        .trim_end_matches('=')
        .chars()
        .map(|c| {
            let value = match c.to_ascii_uppercase() {
                c @ 'A'..='Z' => c as u8 - b'A',
                c @ '2'..='7' => c as u8 - b'2' + 26,
                _ => unreachable!("unexpected character in base32 string"),
            };
            ALPHABET[value as usize] as char
        })
        .collect()
}

/// Encodes bytes as unpadded RFC 4648 standard Base32, uppercase.
pub(crate) fn encode_standard_base32_nopad(bytes: &[u8]) -> String {
    const STANDARD: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

    let mut out = String::with_capacity(bytes.len().div_ceil(5) * 8);
    let mut acc: u32 = 0;
    let mut acc_bits: u32 = 0;
    for &byte in bytes {
        acc = (acc << 8) | u32::from(byte);
        acc_bits += 8;
        while acc_bits >= 5 {
            acc_bits -= 5;
            out.push(STANDARD[((acc >> acc_bits) & 0x1f) as usize] as char);
        }
    }
    if acc_bits > 0 {
        out.push(STANDARD[((acc << (5 - acc_bits)) & 0x1f) as usize] as char);
    }
    out
}
