use crate::search::constants::{DEFAULT_MAX_DIGITS, DEFAULT_TARGET, EPSILON};

/// How candidate parenthesizations are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParenStrategy {
    /// Wrap one operator application at a time: for each operator with a token on
    /// each side, one variant parenthesizing that three-token window, plus the
    /// unparenthesized sequence tried last. This is the reference behavior and
    /// does not cover every possible bracketing.
    #[default]
    AdjacentTriple,
    /// Enumerate every full binary bracketing of the groups (Catalan growth).
    Exhaustive,
}

/// Tunable parameters of an expression search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub target: f64,
    pub tolerance: f64,
    pub paren_strategy: ParenStrategy,
    /// Upper bound on input length; the search space is exponential in the digit
    /// count, so callers needing responsiveness should keep this small.
    pub max_digits: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            tolerance: EPSILON,
            paren_strategy: ParenStrategy::default(),
            max_digits: DEFAULT_MAX_DIGITS,
        }
    }
}
