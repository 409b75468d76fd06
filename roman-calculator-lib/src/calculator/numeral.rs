use crate::calculator::error::EvalError;
use crate::calculator::expression::Expression;
use crate::calculator::operator::Operator;
use crate::calculator::roman;
use log::debug;
use std::fmt;
use std::fmt::Formatter;
use std::num::IntErrorKind;
use std::ops::RangeInclusive;

/// Operands must lie in this range, whichever numeral system they are written in.
pub const OPERAND_RANGE: RangeInclusive<i32> = 1..=10;

/// The way both operands of an expression are written.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NumeralSystem {
    Roman,
    Arabic,
}

/// An expression whose operands have been interpreted as integers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResolvedExpression {
    pub system: NumeralSystem,
    pub left: i32,
    pub operator: Operator,
    pub right: i32,
}

impl ResolvedExpression {
    /// Fails with [`EvalError::OutOfRange`] for the first operand outside [`OPERAND_RANGE`],
    /// naming it as written in `expression`, the expression this was resolved from.
    pub fn check_range(&self, expression: &Expression) -> Result<(), EvalError> {
        match [(self.left, &expression.left), (self.right, &expression.right)]
            .into_iter()
            .find(|(value, _)| !OPERAND_RANGE.contains(value))
        {
            Some((_, operand)) => Err(EvalError::OutOfRange(operand.clone())),
            None => Ok(()),
        }
    }

    /// Renders a value in this expression's numeral system.
    pub fn format(&self, value: i32) -> Result<String, EvalError> {
        match self.system {
            NumeralSystem::Roman => roman::arabic_to_roman(value),
            NumeralSystem::Arabic => Ok(value.to_string()),
        }
    }
}

/// Interprets both operands of the expression in a shared numeral system.
///
/// An operand is Roman only if it is exactly one of the numerals `I` to `X`,
/// otherwise it has to be a decimal integer. Values are not range checked here.
///
/// # Examples
///
/// ```
/// use roman_calculator::calculator::expression::Expression;
/// use roman_calculator::calculator::numeral::{resolve, NumeralSystem};
/// # use roman_calculator::calculator::error::EvalError;
///
/// # fn main() -> Result<(), EvalError> {
/// let expression: Expression = "VI / III".parse()?;
/// let resolved = resolve(&expression)?;
/// assert_eq!(resolved.system, NumeralSystem::Roman);
/// assert_eq!((resolved.left, resolved.right), (6, 3));
/// # Ok(()) }
/// ```
pub fn resolve(expression: &Expression) -> Result<ResolvedExpression, EvalError> {
    let (system, left, right) = match (
        roman::lookup(&expression.left),
        roman::lookup(&expression.right),
    ) {
        (Some(left), Some(right)) => (NumeralSystem::Roman, left, right),
        (Some(_), None) | (None, Some(_)) => return Err(EvalError::MixedNumeralSystems),
        (None, None) => (
            NumeralSystem::Arabic,
            parse_arabic(&expression.left)?,
            parse_arabic(&expression.right)?,
        ),
    };

    let resolved = ResolvedExpression {
        system,
        left,
        operator: expression.operator,
        right,
    };
    debug!("resolved {expression} to {resolved:?}");
    Ok(resolved)
}

fn parse_arabic(operand: &str) -> Result<i32, EvalError> {
    operand.parse::<i32>().map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            EvalError::OutOfRange(operand.to_string())
        }
        _ => EvalError::InvalidNumber(operand.to_string()),
    })
}

impl fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NumeralSystem::Roman => write!(f, "Roman"),
            NumeralSystem::Arabic => write!(f, "Arabic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    fn resolve_str(input: &str) -> Result<ResolvedExpression, EvalError> {
        resolve(&input.parse::<Expression>()?)
    }

    #[test]
    fn roman_operands_resolve_to_values() {
        let resolved = resolve_str("IX - IV").unwrap();

        assert_eq!(
            resolved,
            ResolvedExpression {
                system: NumeralSystem::Roman,
                left: 9,
                operator: Operator::Subtract,
                right: 4,
            }
        );
    }

    #[test]
    fn arabic_operands_resolve_to_values() {
        let resolved = resolve_str("10 % 03").unwrap();

        assert_eq!(resolved.system, NumeralSystem::Arabic);
        assert_eq!((resolved.left, resolved.right), (10, 3));
    }

    #[parameterized(input = { "III + 4", "4 + III", "III + XYZ", "X * 10" })]
    fn mixed_systems_are_rejected(input: &str) {
        assert_eq!(resolve_str(input), Err(EvalError::MixedNumeralSystems));
    }

    #[parameterized(
    input = { "xyz + 2", "2 + 2.5", "IIII * 2", "XI / 1", "1 % q" },
    operand = { "XYZ", "2.5", "IIII", "XI", "Q" }
    )]
    fn unreadable_operands_are_invalid(input: &str, operand: &str) {
        assert_eq!(
            resolve_str(input),
            Err(EvalError::InvalidNumber(operand.to_string()))
        );
    }

    #[test]
    fn overflowing_integer_is_out_of_range() {
        assert_eq!(
            resolve_str("99999999999 + 1"),
            Err(EvalError::OutOfRange("99999999999".into()))
        );
    }

    #[parameterized(
    input = { "0 + 5", "11 * 2", "3 - 100", "011 + 1", "1 / 00" },
    operand = { "0", "11", "100", "011", "00" }
    )]
    fn operands_outside_one_to_ten_fail_range_check(input: &str, operand: &str) {
        let expression = input.parse::<Expression>().unwrap();
        let resolved = resolve(&expression).unwrap();

        assert_eq!(
            resolved.check_range(&expression),
            Err(EvalError::OutOfRange(operand.to_string()))
        );
    }

    #[test]
    fn roman_values_are_formatted_as_numerals() {
        let resolved = resolve_str("V + V").unwrap();

        assert_eq!(resolved.format(10).unwrap(), "X");
        assert_eq!(resolved.format(0), Err(EvalError::ResultBelowRomanRange(0)));
    }
}
