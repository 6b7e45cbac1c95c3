//! Money helpers
//!
//! All amounts are `i64` minor units (cents). Decimal conversion is only
//! used for display, never for arithmetic on balances.

use rust_decimal::Decimal;

use super::result::{Error, Result};

/// Convert cents to a two-place decimal value
pub fn to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Format cents as Brazilian reais, e.g. `R$ 1.000,00`
pub fn format_brl(cents: i64) -> String {
    let value = to_decimal(cents);
    let text = format!("{:.2}", value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value.is_sign_negative() && !value.is_zero() { "-" } else { "" };
    format!("{}R$ {},{}", sign, grouped, frac_part)
}

/// Parse what the user typed into an amount in cents
///
/// Only digits are kept, so `R$ 25,00`, `25,00` and `2500` all mean 2500.
/// Empty input is zero.
pub fn parse_amount_input(input: &str) -> Result<i64> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse::<i64>()
        .map_err(|_| Error::validation(format!("Amount is too large: {}", input.trim())))
}
