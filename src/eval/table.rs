/// Internal symbol for contextually recognized unary negation
pub const UNARY_MINUS: char = '~';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpInfo {
    pub precedence: u8,
    pub associativity: Associativity,
}

/// Immutable operator table defining which operators are legal in a context and how
/// they bind. Constructed once and passed by reference into evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpTable {
    with_modulo: bool,
}

impl OpTable {
    /// The checking alphabet: all of `+ - * / % ^` plus unary negation.
    pub fn full() -> Self {
        Self { with_modulo: true }
    }

    /// The search alphabet: like [`OpTable::full`] but without `%`.
    pub fn search() -> Self {
        Self { with_modulo: false }
    }

    /// Look up an operator symbol, or `None` if it is not legal in this context.
    pub fn info(&self, op: char) -> Option<OpInfo> {
        let (precedence, associativity) = match op {
            UNARY_MINUS => (4, Associativity::Right),
            '^' => (3, Associativity::Right),
            '%' if !self.with_modulo => return None,
            '*' | '/' | '%' => (2, Associativity::Left),
            '+' | '-' => (1, Associativity::Left),
            _ => return None,
        };
        Some(OpInfo {
            precedence,
            associativity,
        })
    }
}
