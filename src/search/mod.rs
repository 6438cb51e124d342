//! Brute-force expression search over digit groupings

pub mod constants;
mod config;
mod core;
mod errors;
mod groupings;
mod ops;
mod parens;

pub use config::{ParenStrategy, SearchConfig};
pub use core::ExpressionSearch;
pub use errors::SearchError;
pub use groupings::Groupings;
pub use ops::{OpAssignments, SEARCH_OPS};

#[cfg(test)]
mod tests;
