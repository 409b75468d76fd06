use crate::calculator::error::EvalError;
use crate::calculator::expression::Expression;
use crate::calculator::operator::Operator;
use itertools::Itertools;
use log::debug;

/// Splits a normalized input string into two operands around its only operator.
///
/// # Arguments
///
/// * `input`: Trimmed, upper-cased text such as `"IV * II"`.
///
/// returns: The expression, or an error if there is not exactly one operator
/// or an operand is missing.
///
/// # Examples
///
/// ```
/// use roman_calculator::calculator::lexer::tokenize;
/// use roman_calculator::calculator::operator::Operator;
/// # use roman_calculator::calculator::error::EvalError;
///
/// # fn main() -> Result<(), EvalError> {
/// let expression = tokenize("10 % 3")?;
/// assert_eq!(expression.operator, Operator::Remainder);
/// assert_eq!(expression.left, "10");
/// # Ok(()) }
/// ```
pub fn tokenize(input: &str) -> Result<Expression, EvalError> {
    let occurrences = input
        .char_indices()
        .filter(|(_, character)| Operator::is_symbol(*character))
        .collect_vec();
    let (index, symbol) = match occurrences.as_slice() {
        [] => return Err(EvalError::NoOperatorFound),
        [occurrence] => *occurrence,
        _ => return Err(EvalError::TooManyOperators),
    };

    let operator = Operator::try_from(symbol)?;
    let left = input[..index].trim();
    let right = input[index + symbol.len_utf8()..].trim();
    if left.is_empty() || right.is_empty() {
        return Err(EvalError::EmptyOperand);
    }

    let expression = Expression::new(left, operator, right);
    debug!("tokenized {input:?} into {expression:?}");
    Ok(expression)
}
