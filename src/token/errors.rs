use thiserror::Error;

/// Errors that can occur during tokenization
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenError {
    #[error("Unknown character in expression: '{0}'")]
    UnknownCharacter(char),
}
