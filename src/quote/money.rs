//! Currency rounding and formatting.
//!
//! Every stored subtotal and every displayed amount goes through these two
//! functions so the whole tool speaks one locale convention: comma thousands
//! separator, dot decimal separator, always two decimals.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to two decimal places using half-up rounding (midpoint away from
/// zero), the standard convention for currency amounts.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount with a currency prefix: `S/. 1,234.56`.
pub fn format_currency(value: Decimal, prefix: &str) -> String {
    format!("{} {}", prefix, format_amount(value))
}

/// Format an amount without a prefix: `1,234.56`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_currency(value);
    let raw = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac_part)
}
