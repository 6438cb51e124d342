//! Operator-precedence expression evaluation

mod core;
mod errors;
mod table;

pub use core::{eval_postfix, evaluate, to_postfix};
pub use errors::EvalError;
pub use table::{Associativity, OpInfo, OpTable, UNARY_MINUS};
