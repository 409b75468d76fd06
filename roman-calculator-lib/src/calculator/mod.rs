pub mod error;
pub mod expression;
pub mod lexer;
pub mod numeral;
pub mod operator;
pub mod roman;

use crate::calculator::error::EvalError;
use log::debug;

/// Evaluates an expression made of two operands and one operator.
///
/// Both operands have to be written either as Roman numerals from `I` to `X` or as
/// integers from 1 to 10. The result is written in the same numeral system as the operands.
///
/// # Arguments
///
/// * `input`: A text expression such as `"3 + 5"` or `"iv * ii"`. Surrounding whitespace
/// and letter case are ignored.
///
/// returns: The result in text, or the first error encountered.
///
/// # Examples
///
/// ```
/// use roman_calculator::calculator::evaluate;
/// # use roman_calculator::calculator::error::EvalError;
///
/// # fn main() -> Result<(), EvalError> {
/// assert_eq!(evaluate("IV * II")?, "VIII");
/// assert_eq!(evaluate("2 - 5")?, "-3");
/// # Ok(()) }
/// ```
pub fn evaluate(input: &str) -> Result<String, EvalError> {
    let normalized = normalize(input);
    debug!("normalized {input:?} to {normalized:?}");
    if normalized.is_empty() {
        return Err(EvalError::EmptyInput);
    }

    let expression = lexer::tokenize(&normalized)?;
    let resolved = numeral::resolve(&expression)?;
    resolved.operator.check_divisor(resolved.right)?;
    resolved.check_range(&expression)?;

    let result = resolved.operator.evaluate(resolved.left, resolved.right)?;
    debug!("{expression} = {result} ({})", resolved.system);
    resolved.format(result)
}

/// Trims surrounding whitespace and upper-cases the input.
pub fn normalize(input: &str) -> String {
    input.trim().to_uppercase()
}
