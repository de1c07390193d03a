//! Code validation errors.

/// Error returned when a value cannot be used as an SGR code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCodeError {
    /// The value is an integer outside `0..=255`.
    #[error("SGR code {value} is out of range (expected 0..=255)")]
    OutOfRange { value: i64 },
    /// The text is neither a known code name nor a decimal integer.
    #[error("'{input}' is not an SGR code name or integer")]
    NotACode { input: String },
}
