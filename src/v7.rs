//! UUIDv7 generation and the process-wide sequence counter

use crate::{random, timestamp, uuid::fixup, Error, Uuid};
use rand::{rngs::ThreadRng, RngCore};
use std::cell::RefCell;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::OnceLock;

/// A 12-bit sequence counter shared by version 7 generators.
///
/// The counter is seeded to a random value once and incremented (mod 4096)
/// atomically on every draw, so identifiers minted within the same
/// millisecond by one process are strictly ordered by their counter field.
/// There is no coordination across processes; the 62 random tail bits carry
/// uniqueness there.
#[derive(Debug)]
pub struct Sequence(AtomicU16);

impl Sequence {
    /// Creates a counter starting at `seed`.
    pub const fn new(seed: u16) -> Self {
        Self(AtomicU16::new(seed))
    }

    /// Returns the next 12-bit counter value.
    pub fn next_value(&self) -> u16 {
        self.0.fetch_add(1, Ordering::Relaxed) & 0x0fff
    }

    /// Rewinds the counter to `seed`; intended for tests.
    pub fn reset(&self, seed: u16) {
        self.0.store(seed, Ordering::Relaxed);
    }
}

/// Returns the process-wide sequence, seeding it on first use.
fn process_sequence() -> Result<&'static Sequence, Error> {
    static SEQUENCE: OnceLock<Sequence> = OnceLock::new();
    match SEQUENCE.get() {
        Some(seq) => Ok(seq),
        None => {
            let seed: [u8; 2] = random::bytes()?;
            // a racing initializer may win; both seeds are equally good
            Ok(SEQUENCE.get_or_init(|| Sequence::new(u16::from_be_bytes(seed))))
        }
    }
}

/// Represents a UUIDv7 generator combining a clock, a random number
/// generator, and a [`Sequence`] counter.
///
/// The default generator draws from the process-wide sequence; tests can
/// inject their own counter to observe or reset it.
#[derive(Debug)]
pub struct V7Generator<'a, R> {
    sequence: &'a Sequence,
    rng: R,
}

impl<'a, R: RngCore> V7Generator<'a, R> {
    /// Creates a generator drawing counter values from `sequence`.
    pub const fn new(sequence: &'a Sequence, rng: R) -> Self {
        Self { sequence, rng }
    }

    /// Generates a new UUIDv7 object from the current timestamp.
    pub fn generate(&mut self) -> Uuid {
        self.generate_core(timestamp::unix_millis())
    }

    /// Generates a new UUIDv7 object from a given `unix_ts_ms`.
    fn generate_core(&mut self, unix_ts_ms: u64) -> Uuid {
        let counter = self.sequence.next_value();
        let mut bytes = [0u8; 16];
        bytes[0..6].copy_from_slice(&unix_ts_ms.to_be_bytes()[2..]);
        bytes[6] = (counter >> 8) as u8;
        bytes[7] = counter as u8;
        self.rng.fill_bytes(&mut bytes[8..16]);
        Uuid::from_bytes(fixup(bytes, 7))
    }
}

thread_local! {
    static THREAD_RNG: RefCell<ThreadRng> = RefCell::new(rand::thread_rng());
}

/// Generates a UUIDv7 object.
///
/// This function combines a thread-local random number generator with the
/// process-wide [`Sequence`] counter, so same-millisecond calls anywhere in
/// the process receive increasing counter values.
///
/// # Examples
///
/// ```rust
/// let uuid = uuident::uuid7()?;
/// println!("{uuid}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// # Ok::<(), uuident::Error>(())
/// ```
pub fn uuid7() -> Result<Uuid, Error> {
    let sequence = process_sequence()?;
    THREAD_RNG.with(|rng| Ok(V7Generator::new(sequence, &mut *rng.borrow_mut()).generate()))
}

impl Uuid {
    /// Generates a version 7 (Unix-millisecond) UUID; see [`uuid7`].
    pub fn v7() -> Result<Self, Error> {
        uuid7()
    }
}

#[cfg(test)]
mod tests {
    use super::{uuid7, Sequence, V7Generator};
    use crate::Variant;

    const N_SAMPLES: usize = 10_000;
    thread_local!(static SAMPLES: Vec<String> = (0..N_SAMPLES)
        .map(|_| uuid7().unwrap().into())
        .collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-7[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 10k identifiers without collision
    #[test]
    fn generates_10k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        use std::time;
        for _ in 0..1_000 {
            let ts_now = (time::SystemTime::now()
                .duration_since(time::UNIX_EPOCH)
                .expect("clock may have gone backwards")
                .as_millis()) as i64;
            let mut timestamp = 0i64;
            for e in uuid7().unwrap().as_bytes().iter().take(6) {
                timestamp = timestamp * 256 + *e as i64;
            }
            assert!((ts_now - timestamp).abs() < 1_000);
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for _ in 0..1_000 {
            let e = uuid7().unwrap();
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), 7);
        }
    }

    /// Draws consecutive counter values from an injected sequence
    #[test]
    fn draws_consecutive_counter_values_from_an_injected_sequence() {
        let sequence = Sequence::new(0x0ffe);
        let mut g = V7Generator::new(&sequence, rand::thread_rng());

        let counters: Vec<u16> = (0..4)
            .map(|_| {
                let b = *g.generate().as_bytes();
                (u16::from(b[6] & 0x0f) << 8) | u16::from(b[7])
            })
            .collect();
        // wraps mod 4096 after 0xfff
        assert_eq!(counters, vec![0x0ffe, 0x0fff, 0x0000, 0x0001]);

        sequence.reset(42);
        let b = *g.generate().as_bytes();
        assert_eq!((u16::from(b[6] & 0x0f) << 8) | u16::from(b[7]), 42);
    }

    /// Orders same-millisecond identifiers by the counter field
    #[test]
    fn orders_same_millisecond_identifiers_by_the_counter_field() {
        let sequence = Sequence::new(0);
        let mut g = V7Generator::new(&sequence, rand::thread_rng());
        let ts = 0x0123_4567_89abu64;

        let mut prev = g.generate_core(ts);
        for _ in 0..1_000 {
            let curr = g.generate_core(ts);
            assert!(prev < curr);
            prev = curr;
        }
    }
}
