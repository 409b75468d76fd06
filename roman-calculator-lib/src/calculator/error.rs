use thiserror::Error;

/// Everything that can go wrong while evaluating an expression.
///
/// Evaluation stops at the first failing stage, so exactly one of these is reported per input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("the input is empty")]
    EmptyInput,

    #[error("no operator found, expected one of + - * / %")]
    NoOperatorFound,

    #[error("too many operators, expected two operands and exactly one operator")]
    TooManyOperators,

    #[error("an operand is missing on one side of the operator")]
    EmptyOperand,

    #[error("'{0}' is neither a Roman numeral from I to X nor an integer")]
    InvalidNumber(String),

    #[error("Roman and Arabic numerals can not be mixed in one expression")]
    MixedNumeralSystems,

    #[error("operand {0} is out of range, operands must be between 1 and 10")]
    OutOfRange(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("unknown operator '{0}'")]
    UnknownOperator(char),

    #[error("result {0} can not be written as a Roman numeral, Roman numerals start at I")]
    ResultBelowRomanRange(i32),
}
