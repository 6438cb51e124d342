use crate::token::Token;

/// For every operator position with a token on each side, build one variant that
/// wraps the three-token window around it in parentheses.
///
/// This only ever inserts a single parenthesized triple per variant; it is not a
/// full bracketing enumeration. Variants come back in operator-position order.
pub fn adjacent_triple_variants(tokens: &[Token]) -> Vec<Vec<Token>> {
    let mut variants = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if !matches!(token, Token::Operator(_)) {
            continue;
        }
        if i == 0 || i + 1 >= tokens.len() {
            continue;
        }

        let mut variant = Vec::with_capacity(tokens.len() + 2);
        variant.extend(tokens[..i - 1].iter().cloned());
        variant.push(Token::LeftParen);
        variant.extend(tokens[i - 1..=i + 1].iter().cloned());
        variant.push(Token::RightParen);
        variant.extend(tokens[i + 2..].iter().cloned());
        variants.push(variant);
    }

    variants
}

/// Enumerate every full binary bracketing of the groups under a fixed operator
/// assignment, as fully parenthesized token sequences.
///
/// Grows with the Catalan numbers; only usable because the input digit count is
/// bounded. Split points increase left to right, left subtrees vary first.
pub fn bracketings(values: &[f64], ops: &[char]) -> Vec<Vec<Token>> {
    debug_assert_eq!(ops.len() + 1, values.len());
    bracket_range(values, ops, 0, values.len())
}

fn bracket_range(values: &[f64], ops: &[char], lo: usize, hi: usize) -> Vec<Vec<Token>> {
    if hi - lo == 1 {
        return vec![vec![Token::Number(values[lo])]];
    }

    let mut out = Vec::new();
    for split in lo + 1..hi {
        let lefts = bracket_range(values, ops, lo, split);
        let rights = bracket_range(values, ops, split, hi);
        for left in &lefts {
            for right in &rights {
                let mut tokens = Vec::with_capacity(left.len() + right.len() + 3);
                tokens.push(Token::LeftParen);
                tokens.extend(left.iter().cloned());
                tokens.push(Token::Operator(ops[split - 1]));
                tokens.extend(right.iter().cloned());
                tokens.push(Token::RightParen);
                out.push(tokens);
            }
        }
    }
    out
}
