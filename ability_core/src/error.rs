//! Errors raised by ability score comparison and rendering

use thiserror::Error;

/// Ability score error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbilityScoreError {
    /// A generic comparison received something other than an ability score
    #[error("object is not an AbilityScore")]
    TypeMismatch,
    /// Rendering was asked for a format specifier it does not know
    #[error("the {0} format string is not supported")]
    UnsupportedFormat(String),
    /// A number format carried a digit set without exactly ten digits
    #[error("a digit set needs exactly 10 digits, got {0}")]
    InvalidDigits(usize),
}
