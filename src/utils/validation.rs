use log::warn;

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the string is empty or contains any non-ASCII-digit characters.
pub fn validate_digit_string(digit_string: &str) -> Result<(), UtilsError> {
    if digit_string.is_empty() {
        warn!("Rejecting empty digit string");
        return Err(UtilsError::EmptyDigitString);
    }

    match digit_string.find(|c: char| !c.is_ascii_digit()) {
        Some(position) => {
            warn!(
                "Digit string '{}' has a non-digit character at position {}",
                digit_string, position
            );
            Err(UtilsError::InvalidDigitString(digit_string.to_string()))
        }
        None => Ok(()),
    }
}
