//! Currency display.
//!
//! Every monetary value shown to the donor renders as `$1,234.56`: a dollar
//! sign, comma thousands separators and exactly two decimals, rounded half-up.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Formats an amount for display.
///
/// ```
/// use rust_decimal_macros::dec;
/// use donation_core::currency::format_currency;
///
/// assert_eq!(format_currency(dec!(1234.5)), "$1,234.50");
/// assert_eq!(format_currency(dec!(2.555)), "$2.56");
/// assert_eq!(format_currency(dec!(-1.5)), "-$1.50");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let mut magnitude = rounded.abs();
    magnitude.rescale(2);

    let text = magnitude.to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
