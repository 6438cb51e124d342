use log::debug;

use crate::token::errors::TokenError;

/// A discrete part of an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(char),
    LeftParen,
    RightParen,
}

const OPERATORS: [char; 6] = ['+', '-', '*', '/', '%', '^'];

/// Scan an expression string into tokens.
///
/// Runs of consecutive digits collapse into a single `Number` token holding their
/// base-10 integer value; there are no fractional literals. Every other recognized
/// character becomes its own token.
///
/// # Errors
///
/// Returns an error on the first character outside digits, `+ - * / % ^`, and
/// parentheses.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, TokenError> {
    debug!("Tokenizing expression: '{}'", expression);

    let mut tokens = Vec::new();
    let mut chars = expression.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let mut value = 0.0_f64;
            while let Some(&d) = chars.peek() {
                let Some(digit) = d.to_digit(10) else { break };
                value = value * 10.0 + f64::from(digit);
                chars.next();
            }
            tokens.push(Token::Number(value));
        } else if c == '(' {
            tokens.push(Token::LeftParen);
            chars.next();
        } else if c == ')' {
            tokens.push(Token::RightParen);
            chars.next();
        } else if OPERATORS.contains(&c) {
            tokens.push(Token::Operator(c));
            chars.next();
        } else {
            debug!("Unknown character '{}' in '{}'", c, expression);
            return Err(TokenError::UnknownCharacter(c));
        }
    }

    debug!("Produced {} tokens", tokens.len());
    Ok(tokens)
}
