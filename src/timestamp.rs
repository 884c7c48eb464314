//! Wall-clock readings at the granularities the identifier formats need

use crate::{random, Error};
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of 100-nanosecond ticks per second.
const TICKS_PER_SEC: u64 = 10_000_000;

/// Returns the current time as 100-nanosecond ticks since the Unix epoch.
///
/// When the clock reading carries no sub-second component (i.e. the platform
/// only exposes whole-second resolution), the sub-second remainder is filled
/// with a uniform random tick count so that identifiers minted during the
/// same second do not all cluster at tick zero.
pub(crate) fn v1_ticks() -> Result<u64, Error> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock may have gone backwards");

    let mut ticks = elapsed.as_secs() * TICKS_PER_SEC;
    match u64::from(elapsed.subsec_nanos()) / 100 {
        0 => ticks += random_subsec_ticks()?,
        subsec => ticks += subsec,
    }
    Ok(ticks)
}

/// Returns the current time as milliseconds since the Unix epoch.
pub(crate) fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock may have gone backwards")
        .as_millis() as u64
}

/// Draws a uniform value in `[0, TICKS_PER_SEC)` by rejection sampling
/// three random bytes.
fn random_subsec_ticks() -> Result<u64, Error> {
    loop {
        let bytes: [u8; 3] = random::bytes()?;
        let r = u64::from(bytes[0]) << 16 | u64::from(bytes[1]) << 8 | u64::from(bytes[2]);
        if r < TICKS_PER_SEC {
            return Ok(r);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{random_subsec_ticks, unix_millis, v1_ticks, TICKS_PER_SEC};
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Matches the wall clock at second precision
    #[test]
    fn matches_the_wall_clock_at_second_precision() {
        let expected_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let secs = v1_ticks().unwrap() / TICKS_PER_SEC;
        assert!(secs.abs_diff(expected_secs) <= 1);
    }

    /// Reports milliseconds close to the system clock
    #[test]
    fn reports_milliseconds_close_to_the_system_clock() {
        let expected_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as u64;
        assert!(unix_millis().abs_diff(expected_ms) <= 1_000);
    }

    /// Keeps the random sub-second fill within one second of ticks
    #[test]
    fn keeps_the_random_sub_second_fill_within_one_second_of_ticks() {
        for _ in 0..1_000 {
            assert!(random_subsec_ticks().unwrap() < TICKS_PER_SEC);
        }
    }
}
