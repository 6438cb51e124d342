use log::{debug, info};

use crate::eval::{OpTable, evaluate};
use crate::search::config::{ParenStrategy, SearchConfig};
use crate::search::constants::MAX_SUPPORTED_DIGITS;
use crate::search::errors::SearchError;
use crate::search::groupings::Groupings;
use crate::search::ops::OpAssignments;
use crate::search::parens::{adjacent_triple_variants, bracketings};
use crate::token::Token;
use crate::utils::{group_value, validate_digit_string};

/// Brute-force search for an expression over a digit sequence that hits a target
pub struct ExpressionSearch {
    config: SearchConfig,
    table: OpTable,
}

impl ExpressionSearch {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            table: OpTable::search(),
        }
    }

    /// Find the first expression over `digits` within tolerance of the target.
    ///
    /// Enumerates grouping × operator-assignment × parenthesization candidates in
    /// deterministic order and returns the rendered expression string of the first
    /// hit, or `Ok(None)` after exhausting the space. Candidates that fail to
    /// evaluate (division by zero, non-finite results) are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if `digits` is empty, contains a non-digit character, or
    /// is longer than the configured digit limit.
    pub fn find_solution(&self, digits: &str) -> Result<Option<String>, SearchError> {
        validate_digit_string(digits)?;

        let len = digits.len();
        let limit = self.config.max_digits.min(MAX_SUPPORTED_DIGITS);
        if len > limit {
            return Err(SearchError::TooManyDigits { len, max: limit });
        }

        info!(
            "Searching '{}' for target {} with strategy {:?}",
            digits, self.config.target, self.config.paren_strategy
        );

        for grouping in Groupings::new(len) {
            // A single group with no operators cannot be a solution here
            if grouping.len() < 2 {
                continue;
            }
            let Some(values) = group_values(digits, &grouping) else {
                continue;
            };

            let slots = grouping.len() - 1;
            for ops in OpAssignments::new(slots) {
                if let Some(solution) = self.try_assignment(&values, &ops) {
                    info!("Found solution: {}", solution);
                    return Ok(Some(solution));
                }
            }
        }

        info!("Search space exhausted, no solution");
        Ok(None)
    }

    fn try_assignment(&self, values: &[f64], ops: &[char]) -> Option<String> {
        match self.config.paren_strategy {
            ParenStrategy::AdjacentTriple => {
                let base = interleave(values, ops);
                let mut variants = adjacent_triple_variants(&base);
                variants.push(base);
                variants
                    .iter()
                    .find_map(|tokens| self.try_candidate(tokens))
            }
            ParenStrategy::Exhaustive => bracketings(values, ops)
                .iter()
                .find_map(|tokens| self.try_candidate(tokens)),
        }
    }

    fn try_candidate(&self, tokens: &[Token]) -> Option<String> {
        if let Ok(value) = evaluate(tokens, &self.table)
            && value.is_finite()
            && (value - self.config.target).abs() < self.config.tolerance
        {
            let rendered = render(tokens);
            debug!("Candidate '{}' evaluated to {}", rendered, value);
            return Some(rendered);
        }
        None
    }
}

impl Default for ExpressionSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a grouping to its numeric values, or `None` when any group has an
/// illegal leading zero.
fn group_values(digits: &str, grouping: &[(usize, usize)]) -> Option<Vec<f64>> {
    grouping
        .iter()
        .map(|&(start, end)| group_value(&digits[start..end]).ok())
        .collect()
}

fn interleave(values: &[f64], ops: &[char]) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(values.len() + ops.len());
    for (i, &value) in values.iter().enumerate() {
        tokens.push(Token::Number(value));
        if let Some(&op) = ops.get(i) {
            tokens.push(Token::Operator(op));
        }
    }
    tokens
}

fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Number(n) => out.push_str(&format!("{}", n)),
            Token::Operator(op) => out.push(*op),
            Token::LeftParen => out.push('('),
            Token::RightParen => out.push(')'),
        }
    }
    out
}
