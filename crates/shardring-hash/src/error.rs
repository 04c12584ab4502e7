//! Error types for hash value parsing.

/// Errors that can occur when parsing a textual hash value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    /// The input is not 1 to 16 hexadecimal digits.
    #[error("invalid raw hash {0:?}: expected 1 to 16 hex digits")]
    InvalidHex(String),

    /// The input is not a signed 64-bit decimal integer.
    #[error("invalid hash value {0:?}: expected a signed 64-bit decimal integer")]
    InvalidDecimal(String),
}
