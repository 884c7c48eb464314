//! Gregorian-time-based UUIDs (versions 1 and 6)

use crate::{random, timestamp, uuid::fixup, Error, Mac, Uuid};

/// Seconds from the Gregorian reform (1582-10-15T00:00:00Z) to the Unix
/// epoch, negated into the 100-nanosecond tick offset applied below.
const GREGORIAN_OFFSET_TICKS: u64 = 12_219_292_800 * 10_000_000;

impl Uuid {
    /// Generates a version 1 (Gregorian-time-based) UUID.
    ///
    /// The node field is `mac`, or a fresh random locally-administered
    /// address when omitted. The clock-sequence field is two fresh random
    /// bytes on every call; it is not persisted across calls as RFC 4122
    /// recommends, a deliberate deviation inherited from this library's
    /// lineage.
    pub fn v1(mac: Option<Mac>) -> Result<Self, Error> {
        Self::gregorian(1, mac)
    }

    /// Generates a version 6 (reordered-time) UUID.
    ///
    /// Identical inputs to [`Uuid::v1`], but the timestamp fields are laid
    /// out most significant first so raw byte comparison sorts by creation
    /// time.
    pub fn v6(mac: Option<Mac>) -> Result<Self, Error> {
        Self::gregorian(6, mac)
    }

    fn gregorian(version: u8, mac: Option<Mac>) -> Result<Self, Error> {
        let ticks = timestamp::v1_ticks()? + GREGORIAN_OFFSET_TICKS;
        let mac = match mac {
            Some(mac) => mac,
            None => Mac::random()?,
        };
        let clock_seq: [u8; 2] = random::bytes()?;

        let mut bytes = [0u8; 16];
        match version {
            // time-low (32), time-mid (16), time-hi (16), big-endian
            1 => {
                bytes[0..4].copy_from_slice(&((ticks & 0xffff_ffff) as u32).to_be_bytes());
                bytes[4..6].copy_from_slice(&((ticks >> 32) as u16).to_be_bytes());
                bytes[6..8].copy_from_slice(&((ticks >> 48) as u16).to_be_bytes());
            }
            // high 32, middle 16, low 12 of the 60-bit count; the version
            // nibble overlays the top four bits of byte 6
            _ => {
                bytes[0..4].copy_from_slice(&((ticks >> 28) as u32).to_be_bytes());
                bytes[4..6].copy_from_slice(&((ticks >> 12) as u16).to_be_bytes());
                bytes[6..8].copy_from_slice(&((ticks & 0x0fff) as u16).to_be_bytes());
            }
        }
        bytes[8..10].copy_from_slice(&clock_seq);
        bytes[10..16].copy_from_slice(mac.as_bytes());
        Ok(Self::from_bytes(fixup(bytes, version)))
    }
}
