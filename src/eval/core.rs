use log::debug;

use crate::eval::errors::EvalError;
use crate::eval::table::{Associativity, OpTable, UNARY_MINUS};
use crate::token::Token;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

/// Convert an infix token sequence to postfix (reverse-Polish) order.
///
/// A `-` is treated as unary negation when it appears at the start of the
/// expression, immediately after `(`, or immediately after another operator.
///
/// # Errors
///
/// Returns an error on a `)` with no matching `(`, an unmatched `(` left at the
/// end, or an operator outside the table's alphabet.
pub fn to_postfix(tokens: &[Token], table: &OpTable) -> Result<Vec<Token>, EvalError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<char> = Vec::new();
    let mut allow_unary = true;

    for token in tokens {
        match token {
            Token::Number(n) => {
                output.push(Token::Number(*n));
                allow_unary = false;
            }
            Token::LeftParen => {
                operators.push('(');
                allow_unary = true;
            }
            Token::RightParen => {
                loop {
                    match operators.pop() {
                        Some('(') => break,
                        Some(op) => output.push(Token::Operator(op)),
                        None => return Err(EvalError::MismatchedParenthesis),
                    }
                }
                allow_unary = false;
            }
            Token::Operator(c) => {
                let op = if *c == '-' && allow_unary {
                    UNARY_MINUS
                } else {
                    *c
                };
                let info = table.info(op).ok_or(EvalError::UnknownOperator(op))?;

                while let Some(&top) = operators.last() {
                    if top == '(' {
                        break;
                    }
                    let top_info = table.info(top).ok_or(EvalError::UnknownOperator(top))?;
                    let pops = top_info.precedence > info.precedence
                        || (top_info.precedence == info.precedence
                            && info.associativity == Associativity::Left);
                    if !pops {
                        break;
                    }
                    operators.pop();
                    output.push(Token::Operator(top));
                }

                operators.push(op);
                allow_unary = true;
            }
        }
    }

    while let Some(op) = operators.pop() {
        if op == '(' {
            return Err(EvalError::MismatchedParenthesis);
        }
        output.push(Token::Operator(op));
    }

    Ok(output)
}

fn apply_binary(op: char, a: f64, b: f64) -> Result<f64, EvalError> {
    match op {
        '+' => Ok(a + b),
        '-' => Ok(a - b),
        '*' => Ok(a * b),
        '/' => {
            if is_zero(b) {
                debug!("Division by zero attempted");
                Err(EvalError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
        '%' => {
            if is_zero(b) {
                debug!("Modulo by zero attempted");
                Err(EvalError::DivisionByZero)
            } else {
                // fmod semantics: f64's Rem keeps the sign of the dividend
                Ok(a % b)
            }
        }
        '^' => Ok(a.powf(b)),
        _ => Err(EvalError::UnknownOperator(op)),
    }
}

/// Evaluate a postfix token sequence with an operand stack.
///
/// # Errors
///
/// Returns an error when an operator lacks operands, the divisor of `/` or `%` is
/// zero, or the operand stack does not end with exactly one value.
pub fn eval_postfix(postfix: &[Token]) -> Result<f64, EvalError> {
    let mut operands: Vec<f64> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(n) => operands.push(*n),
            Token::Operator(op) if *op == UNARY_MINUS => {
                let a = operands.pop().ok_or(EvalError::MissingOperand)?;
                operands.push(-a);
            }
            Token::Operator(op) => {
                let b = operands.pop().ok_or(EvalError::MissingOperand)?;
                let a = operands.pop().ok_or(EvalError::MissingOperand)?;
                operands.push(apply_binary(*op, a, b)?);
            }
            Token::LeftParen | Token::RightParen => {
                return Err(EvalError::MalformedExpression);
            }
        }
    }

    if operands.len() != 1 {
        return Err(EvalError::MalformedExpression);
    }
    operands.pop().ok_or(EvalError::MalformedExpression)
}

/// Evaluate an infix token sequence against the given operator table.
///
/// Pure function of its inputs: identical tokens and table always produce the
/// identical outcome.
///
/// # Errors
///
/// Propagates every failure from [`to_postfix`] and [`eval_postfix`].
pub fn evaluate(tokens: &[Token], table: &OpTable) -> Result<f64, EvalError> {
    let postfix = to_postfix(tokens, table)?;
    let result = eval_postfix(&postfix);

    match &result {
        Ok(value) => debug!("Evaluated to {}", value),
        Err(e) => debug!("Evaluation failed: {}", e),
    }

    result
}
