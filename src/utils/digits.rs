use log::debug;

use crate::utils::errors::UtilsError;

/// Parse one contiguous digit group into its numeric value.
///
/// # Errors
///
/// Returns an error if the group is empty, contains a non-digit character, or is a
/// multi-digit group starting with `0` (not a valid numeric literal).
pub fn group_value(group: &str) -> Result<f64, UtilsError> {
    if group.is_empty() {
        return Err(UtilsError::EmptyDigitString);
    }

    if !group.chars().all(|c| c.is_ascii_digit()) {
        return Err(UtilsError::InvalidDigitString(group.to_string()));
    }

    if group.len() > 1 && group.starts_with('0') {
        debug!("Rejecting group with leading zero: '{}'", group);
        return Err(UtilsError::LeadingZero(group.to_string()));
    }

    group
        .parse::<f64>()
        .map_err(|_| UtilsError::InvalidDigitString(group.to_string()))
}

/// Count occurrences of each decimal digit, ignoring every other character.
pub fn digit_counts(text: &str) -> [usize; 10] {
    let mut counts = [0usize; 10];
    for c in text.chars() {
        if let Some(d) = c.to_digit(10) {
            counts[d as usize] += 1;
        }
    }
    counts
}
