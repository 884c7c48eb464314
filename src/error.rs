//! Error types shared across the crate

/// Errors reported when constructing, parsing, or generating identifiers.
///
/// Every failure is surfaced synchronously through one of these variants;
/// malformed input is never silently coerced into the nil value.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input does not match any accepted textual or binary shape.
    #[error("input is not a recognized identifier representation")]
    Parse,

    /// The bytes are well-formed but carry a disallowed version pattern.
    #[error("bytes decode to a disallowed version or variant combination")]
    Validation,

    /// A fixed-size constructor received the wrong number of bytes.
    #[error("expected {expected} bytes, got {actual}")]
    Length {
        /// The byte count the constructor requires.
        expected: usize,
        /// The byte count actually supplied.
        actual: usize,
    },

    /// A name-based constructor was asked for a digest it does not know.
    #[error("unsupported digest algorithm: {0:?}")]
    UnsupportedAlgorithm(String),

    /// Every entropy provider in the fallback chain failed.
    #[error("no usable entropy source available")]
    EntropyExhausted,
}
