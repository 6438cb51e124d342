//! Candidate solution checking

pub mod constants;
mod core;

pub use core::{CandidateChecker, CheckReport};
