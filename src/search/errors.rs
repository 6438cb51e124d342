use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Invalid input digits: {0}")]
    InvalidDigits(#[from] UtilsError),
    #[error("Input has {len} digits, more than the configured limit of {max}")]
    TooManyDigits { len: usize, max: usize },
}
