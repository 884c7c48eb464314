//! Compact binary identifiers: UUIDs, ULIDs, and EUI-48/MAC addresses
//!
//! ```rust
//! use uuident::{ns, uuid7, Uuid};
//!
//! let uuid = uuid7()?;
//! println!("{uuid}"); // e.g. "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let name_based = Uuid::v5(&ns::DNS, "www.example.org");
//! assert_eq!(name_based.to_string(), "74738ff5-5367-5958-9aee-98fffdcd1876");
//! # Ok::<(), uuident::Error>(())
//! ```
//!
//! # Field and bit layout
//!
//! All generated UUID versions share the RFC 4122 envelope: the version
//! nibble occupies bits 4-7 of byte 6 and the variant bits `10` occupy the
//! top of byte 8. Version 7 identifiers carry the following layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        counter        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                            rand                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The 12-bit `counter` is a process-wide sequence seeded randomly once and
//! incremented on every version 7 call, so same-millisecond identifiers from
//! one process are strictly ordered; the 62 `rand` bits protect uniqueness
//! across processes.
//!
//! # Other identifiers
//!
//! - [`Ulid`]: 48-bit millisecond timestamp plus 80 random bits, rendered as
//!   26 Crockford Base32 characters.
//! - [`Mac`]: 6-byte EUI-48 address with a multi-format parser and a random
//!   generator that always produces unicast, locally-administered values.

mod crockford;
mod error;
mod hashed;
mod mac;
pub mod ns;
mod random;
mod timestamp;
mod ulid;
mod uuid;
mod v1;
mod v4;
mod v7;

pub use error::Error;
pub use hashed::HashAlgorithm;
pub use mac::Mac;
pub use ulid::{ulid, Ulid};
pub use uuid::{Uuid, Variant};
pub use v4::uuid4;
pub use v7::{uuid7, Sequence, V7Generator};
