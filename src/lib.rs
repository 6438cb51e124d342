//! Hectox - solve and check hundred-target digit puzzles
//!
//! Given an ordered digit sequence, this library searches for a way to group
//! adjacent digits into numbers, insert binary operators, and parenthesize so the
//! expression hits a target value (100 by default), and checks user-supplied
//! candidate expressions against the same digit sequence and target.

pub mod checker;
pub mod eval;
pub mod search;
pub mod token;
pub mod utils;

pub use checker::{CandidateChecker, CheckReport};
pub use eval::{EvalError, OpTable, evaluate};
pub use search::{ExpressionSearch, ParenStrategy, SearchConfig, SearchError};
pub use token::{Token, TokenError, tokenize};
pub use utils::{UtilsError, validate_digit_string};

/// Find an expression over `digits` that evaluates to 100.
///
/// This is a convenience function that runs a search with the default
/// configuration (target 100, adjacent-triple parenthesization).
///
/// # Errors
///
/// Returns an error if the digit string is empty, contains non-digit characters,
/// or exceeds the default digit limit.
///
/// # Examples
///
/// ```
/// use hectox::find_solution;
///
/// match find_solution("955") {
///     Ok(Some(expr)) => println!("Found: {}", expr),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_solution(digits: &str) -> Result<Option<String>, SearchError> {
    let search = ExpressionSearch::new();
    search.find_solution(digits)
}

/// Check a candidate expression against a digit sequence and the target 100.
///
/// The verdict is a plain boolean: `true` only when the candidate uses exactly the
/// digits of `digits`, is structurally legal, and evaluates to 100 within the
/// default tolerance.
///
/// # Examples
///
/// ```
/// use hectox::validate_candidate;
///
/// assert!(validate_candidate("991", "99+1"));
/// assert!(!validate_candidate("11", "1+1"));
/// ```
pub fn validate_candidate(digits: &str, candidate: &str) -> bool {
    let checker = CandidateChecker::new();
    checker.validate(digits, candidate, search::constants::DEFAULT_TARGET)
}
