use crate::calculator::error::EvalError;
use log::trace;

/// The Roman numerals an operand may be written as, with their values.
pub static ROMAN_NUMERALS: [(&str, i32); 10] = [
    ("I", 1),
    ("II", 2),
    ("III", 3),
    ("IV", 4),
    ("V", 5),
    ("VI", 6),
    ("VII", 7),
    ("VIII", 8),
    ("IX", 9),
    ("X", 10),
];

/// Greedy conversion table, largest value first.
static GREEDY_NUMERALS: [(i32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Largest value with a canonical Roman form that does not repeat `M` more than three times.
pub const MAX_CANONICAL: i32 = 3999;

/// Looks up one of the operand numerals `I` to `X`.
pub fn lookup(symbol: &str) -> Option<i32> {
    ROMAN_NUMERALS
        .iter()
        .find(|(numeral, _)| *numeral == symbol)
        .map(|(_, value)| *value)
}

/// Converts a canonical upper-case Roman numeral to its value.
///
/// Only the form [`arabic_to_roman`] would produce is accepted, so `IIII` or `IC` are invalid.
///
/// # Examples
///
/// ```
/// use roman_calculator::calculator::roman::roman_to_arabic;
///
/// assert_eq!(roman_to_arabic("VII"), Ok(7));
/// assert_eq!(roman_to_arabic("MCMXCIV"), Ok(1994));
/// assert!(roman_to_arabic("IIII").is_err());
/// ```
pub fn roman_to_arabic(numeral: &str) -> Result<i32, EvalError> {
    if let Some(value) = lookup(numeral) {
        return Ok(value);
    }

    let invalid = || EvalError::InvalidNumber(numeral.to_string());
    let mut remaining = numeral;
    let mut value = 0;
    for (symbol_value, symbol) in GREEDY_NUMERALS.iter() {
        while let Some(rest) = remaining.strip_prefix(symbol) {
            value += symbol_value;
            remaining = rest;
        }
    }
    trace!("parsed {numeral} as {value}, unparsed remainder {remaining:?}");

    if !remaining.is_empty() || value < 1 || value > MAX_CANONICAL {
        return Err(invalid());
    }
    if arabic_to_roman(value)? != numeral {
        return Err(invalid());
    }
    Ok(value)
}

/// Converts a positive integer to a Roman numeral with the greedy algorithm.
///
/// # Arguments
///
/// * `number`: The value to convert, at least 1.
///
/// returns: The numeral, or [`EvalError::ResultBelowRomanRange`] when `number` is below 1.
///
/// # Examples
///
/// ```
/// use roman_calculator::calculator::roman::arabic_to_roman;
///
/// assert_eq!(arabic_to_roman(14).unwrap(), "XIV");
/// ```
pub fn arabic_to_roman(number: i32) -> Result<String, EvalError> {
    if number < 1 {
        return Err(EvalError::ResultBelowRomanRange(number));
    }

    let mut remaining = number;
    let mut numeral = String::new();
    for (value, symbol) in GREEDY_NUMERALS.iter() {
        while remaining >= *value {
            numeral.push_str(symbol);
            remaining -= value;
        }
    }
    trace!("converted {number} to {numeral}");
    Ok(numeral)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;
    use proptest::prelude::*;

    #[parameterized(
    number = { 1, 4, 9, 10, 14, 40, 90, 100, 1994, 3999 },
    expected = { "I", "IV", "IX", "X", "XIV", "XL", "XC", "C", "MCMXCIV", "MMMCMXCIX" }
    )]
    fn arabic_converts_to_roman(number: i32, expected: &str) {
        assert_eq!(arabic_to_roman(number).unwrap(), expected);
    }

    #[parameterized(number = { 0, -1, -100 })]
    fn non_positive_numbers_have_no_roman_form(number: i32) {
        assert_eq!(
            arabic_to_roman(number),
            Err(EvalError::ResultBelowRomanRange(number))
        );
    }

    #[test]
    fn values_above_canonical_range_repeat_thousands() {
        assert_eq!(arabic_to_roman(4001).unwrap(), "MMMMI");
    }

    #[parameterized(numeral = { "IIII", "VX", "IC", "XIIX", "", "ABC", "MMMM", "iv" })]
    fn non_canonical_numerals_are_rejected(numeral: &str) {
        assert_eq!(
            roman_to_arabic(numeral),
            Err(EvalError::InvalidNumber(numeral.to_string()))
        );
    }

    #[test]
    fn lookup_only_knows_one_to_ten() {
        assert_eq!(lookup("X"), Some(10));
        assert_eq!(lookup("XI"), None);
        assert_eq!(lookup("8"), None);
    }

    #[test]
    fn table_symbols_survive_round_trip() {
        for (symbol, value) in ROMAN_NUMERALS.iter() {
            assert_eq!(arabic_to_roman(*value).unwrap(), *symbol);
            assert_eq!(roman_to_arabic(symbol), Ok(*value));
        }
    }

    proptest! {
        #[test]
        fn arabic_survives_round_trip(number in 1..=MAX_CANONICAL) {
            let numeral = arabic_to_roman(number).unwrap();
            prop_assert_eq!(roman_to_arabic(&numeral), Ok(number));
        }
    }
}
