//! Shared digit-string helpers

mod digits;
mod errors;
mod validation;

pub use digits::{digit_counts, group_value};
pub use errors::UtilsError;
pub use validation::validate_digit_string;

#[cfg(test)]
mod tests;
