use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as Danish kroner: `1.234,50 kr.`
///
/// Always two decimals, `.` as thousands separator, `,` as decimal
/// separator and a non-breaking space before the currency suffix. Returns
/// an empty string for non-finite input.
#[must_use]
pub fn format_dkk(amount: f64) -> String {
    let Some(value) = Decimal::from_f64(amount) else {
        return String::new();
    };
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped},{frac_part}\u{a0}kr.")
}
