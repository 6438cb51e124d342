use thiserror::Error;

/// Errors that can occur in digit-string helpers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Digit string cannot be empty")]
    EmptyDigitString,
    #[error("Digit string must contain only digits: {0}")]
    InvalidDigitString(String),
    #[error("Digit group has a leading zero: {0}")]
    LeadingZero(String),
}
