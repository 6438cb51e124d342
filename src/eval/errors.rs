use thiserror::Error;

/// Failure outcomes of expression evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Mismatched parenthesis")]
    MismatchedParenthesis,
    #[error("Operator is missing an operand")]
    MissingOperand,
    #[error("Operator not legal in this context: '{0}'")]
    UnknownOperator(char),
    #[error("Expression is malformed")]
    MalformedExpression,
}
