//! Tokenizer for candidate expression strings

mod core;
mod errors;

pub use core::{Token, tokenize};
pub use errors::TokenError;
