use log::{debug, info};

use crate::checker::constants::EPSILON;
use crate::eval::{OpTable, evaluate};
use crate::token::tokenize;
use crate::utils::digit_counts;

const LEGAL_SYMBOLS: [char; 8] = ['+', '-', '*', '/', '%', '^', '(', ')'];

/// Outcome of checking one candidate solution
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub valid: bool,
    /// The evaluated value, when the candidate was well-formed enough to evaluate
    pub value: Option<f64>,
}

impl CheckReport {
    fn rejected() -> Self {
        Self {
            valid: false,
            value: None,
        }
    }
}

/// Checks candidate solution strings against a digit sequence and target value
pub struct CandidateChecker {
    table: OpTable,
    tolerance: f64,
}

impl CandidateChecker {
    pub fn new() -> Self {
        Self::with_tolerance(EPSILON)
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            table: OpTable::full(),
            tolerance,
        }
    }

    /// Check a candidate expression against the original digit sequence.
    ///
    /// The candidate must use exactly the digit characters of `digits` (as an
    /// unordered multiset), contain only legal operator and parenthesis symbols,
    /// balance its parentheses, evaluate without failure, and land within the
    /// tolerance of `target`. The checks run in that order with an early exit on
    /// the first failure.
    pub fn check(&self, digits: &str, candidate: &str, target: f64) -> CheckReport {
        info!("Checking candidate '{}' against digits '{}'", candidate, digits);

        if digit_counts(candidate) != digit_counts(digits) {
            debug!("Digit multiset mismatch");
            return CheckReport::rejected();
        }

        if !has_legal_symbols(candidate) {
            debug!("Candidate contains an illegal character");
            return CheckReport::rejected();
        }

        if !parentheses_balanced(candidate) {
            debug!("Candidate has unbalanced parentheses");
            return CheckReport::rejected();
        }

        let Ok(tokens) = tokenize(candidate) else {
            return CheckReport::rejected();
        };

        match evaluate(&tokens, &self.table) {
            Ok(value) => {
                debug!("Candidate evaluated to {}", value);
                CheckReport {
                    valid: (value - target).abs() <= self.tolerance,
                    value: Some(value),
                }
            }
            Err(e) => {
                debug!("Candidate failed to evaluate: {}", e);
                CheckReport::rejected()
            }
        }
    }

    /// Boolean verdict form of [`CandidateChecker::check`].
    pub fn validate(&self, digits: &str, candidate: &str, target: f64) -> bool {
        self.check(digits, candidate, target).valid
    }
}

impl Default for CandidateChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn has_legal_symbols(candidate: &str) -> bool {
    candidate
        .chars()
        .all(|c| c.is_ascii_digit() || LEGAL_SYMBOLS.contains(&c))
}

fn parentheses_balanced(candidate: &str) -> bool {
    let mut stack: Vec<char> = Vec::new();
    for c in candidate.chars() {
        if c == '(' {
            stack.push(c);
        } else if c == ')' && stack.pop().is_none() {
            return false;
        }
    }
    stack.is_empty()
}
