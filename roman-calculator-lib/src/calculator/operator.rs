use crate::calculator::error::EvalError;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl Operator {
    /// Every supported operator character, in the order the lexer reports them.
    pub const SYMBOLS: [char; 5] = ['+', '-', '*', '/', '%'];

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Remainder => '%',
        }
    }

    pub fn is_symbol(character: char) -> bool {
        Self::SYMBOLS.contains(&character)
    }

    /// Whether the right operand of this operator is used as a divisor.
    pub fn divides(&self) -> bool {
        matches!(self, Operator::Divide | Operator::Remainder)
    }

    /// Fails with [`EvalError::DivisionByZero`] if `divisor` can not be used with this operator.
    pub fn check_divisor(&self, divisor: i32) -> Result<(), EvalError> {
        if self.divides() && divisor == 0 {
            return Err(EvalError::DivisionByZero);
        }
        Ok(())
    }

    /// Applies the operator to the two operands.
    ///
    /// Division truncates towards zero and the remainder takes the sign of the dividend.
    /// Operands are expected to be small, overflow is not guarded against.
    ///
    /// # Examples
    ///
    /// ```
    /// use roman_calculator::calculator::operator::Operator;
    /// # use roman_calculator::calculator::error::EvalError;
    ///
    /// assert_eq!(Operator::Divide.evaluate(7, 2), Ok(3));
    /// assert_eq!(Operator::Remainder.evaluate(7, 0), Err(EvalError::DivisionByZero));
    /// ```
    pub fn evaluate(&self, a: i32, b: i32) -> Result<i32, EvalError> {
        self.check_divisor(b)?;
        let result = match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => a / b,
            Operator::Remainder => a % b,
        };
        Ok(result)
    }
}

/// Applies the operator written as `operator` to `a` and `b`.
///
/// # Arguments
///
/// * `a`: The left operand.
/// * `b`: The right operand.
/// * `operator`: One of `+ - * / %`.
///
/// returns: The result, or [`EvalError::UnknownOperator`] for any other character.
pub fn apply(a: i32, b: i32, operator: char) -> Result<i32, EvalError> {
    Operator::try_from(operator)?.evaluate(a, b)
}

impl TryFrom<char> for Operator {
    type Error = EvalError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            '%' => Ok(Operator::Remainder),
            other => Err(EvalError::UnknownOperator(other)),
        }
    }
}

impl str::FromStr for Operator {
    type Err = EvalError;

    fn from_str(input: &str) -> Result<Operator, Self::Err> {
        let mut characters = input.chars();
        match (characters.next(), characters.next()) {
            (Some(symbol), None) => Operator::try_from(symbol),
            (Some(symbol), Some(_)) => Err(EvalError::UnknownOperator(symbol)),
            (None, _) => Err(EvalError::NoOperatorFound),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
