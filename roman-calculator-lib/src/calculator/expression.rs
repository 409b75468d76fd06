use crate::calculator::error::EvalError;
use crate::calculator::operator::Operator;
use crate::calculator::{lexer, normalize};
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// Two operands joined by a single operator, as written by the user.
///
/// The operands are trimmed but not yet interpreted as numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub left: String,
    pub operator: Operator,
    pub right: String,
}

impl Expression {
    pub fn new(
        left: impl Into<String>,
        operator: Operator,
        right: impl Into<String>,
    ) -> Expression {
        Expression {
            left: left.into(),
            operator,
            right: right.into(),
        }
    }
}

impl str::FromStr for Expression {
    type Err = EvalError;

    /// Normalizes and tokenizes raw input.
    fn from_str(input: &str) -> Result<Expression, Self::Err> {
        lexer::tokenize(&normalize(input))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}
