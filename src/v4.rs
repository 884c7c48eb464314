//! UUIDv4-related functionality

use crate::{random, uuid::fixup, Error, Uuid};

impl Uuid {
    /// Generates a version 4 (fully random) UUID.
    pub fn v4() -> Result<Self, Error> {
        let bytes: [u8; 16] = random::bytes()?;
        Ok(Self::from_bytes(fixup(bytes, 4)))
    }
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuident::uuid4()?;
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// # Ok::<(), uuident::Error>(())
/// ```
pub fn uuid4() -> Result<Uuid, Error> {
    Uuid::v4()
}
