//! Coercion of raw amount text entered by the donor.
//!
//! Amount fields never reject input. Blank, unparseable or negative text
//! becomes 0 and oversized values stop at $999,999.99, so a half-typed
//! value cannot break the running totals.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::MAXIMUM_AMOUNT;

/// Trims whitespace and removes a leading `$` and comma thousands separators.
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .trim()
        .replace(',', "")
}

/// Parses amount text into a non-negative [`Decimal`].
///
/// Accepts `"1,234.56"`, `"$50"` and scientific notation such as `"1e3"`.
/// Anything else coerces to 0, and values above [`MAXIMUM_AMOUNT`] are
/// capped at it. Non-empty input that had to be coerced is logged at `warn`.
pub fn parse_amount(s: &str) -> Decimal {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }

    let parsed = Decimal::from_str(&normalized).or_else(|_| Decimal::from_scientific(&normalized));
    match parsed {
        Ok(value) if value.is_sign_negative() && !value.is_zero() => {
            warn!(input = %s, "negative amount coerced to 0");
            Decimal::ZERO
        }
        Ok(value) if value > MAXIMUM_AMOUNT => {
            warn!(input = %s, "amount above {} capped", MAXIMUM_AMOUNT);
            MAXIMUM_AMOUNT
        }
        Ok(value) => value,
        Err(e) => {
            warn!(input = %s, "unparseable amount coerced to 0: {}", e);
            Decimal::ZERO
        }
    }
}

/// Parses optional amount text. Blank input is `None`; otherwise as [`parse_amount`].
pub fn parse_optional_amount(s: &str) -> Option<Decimal> {
    if normalize_amount_input(s).is_empty() {
        None
    } else {
        Some(parse_amount(s))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_amount_accepts_plain_decimals() {
        assert_eq!(parse_amount("25.50"), dec!(25.50));
        assert_eq!(parse_amount("  100 "), dec!(100));
    }

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56"), dec!(1234.56));
    }

    #[test]
    fn parse_amount_accepts_dollar_prefix() {
        assert_eq!(parse_amount("$50"), dec!(50));
        assert_eq!(parse_amount("$ 2.20"), dec!(2.20));
    }

    #[test]
    fn parse_amount_accepts_scientific_notation() {
        assert_eq!(parse_amount("1e3"), dec!(1000));
    }

    #[test]
    fn parse_amount_blank_is_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("   "), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_garbage_is_zero() {
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount("12..5"), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_negative_is_zero() {
        assert_eq!(parse_amount("-5"), Decimal::ZERO);
        assert_eq!(parse_amount("-0.01"), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_caps_oversized_values() {
        assert_eq!(parse_amount("999999.99"), dec!(999999.99));
        assert_eq!(parse_amount("1,000,000"), dec!(999999.99));
        assert_eq!(parse_amount("1e20"), dec!(999999.99));
        assert_eq!(parse_amount("79228162514264337593543950335"), dec!(999999.99));
    }

    #[test]
    fn parse_optional_amount_distinguishes_blank() {
        assert_eq!(parse_optional_amount(""), None);
        assert_eq!(parse_optional_amount("x"), Some(Decimal::ZERO));
        assert_eq!(parse_optional_amount("7"), Some(dec!(7)));
    }
}
