//! Rupee display formatting and parsing.
//!
//! Amounts render in the Indian grouping convention: the last three digits
//! form one group, every pair before that its own (`₹12,34,567.89`).

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Round to two decimal places (paise).
#[must_use]
pub fn round_paise(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format an amount as `₹12,34,567.89`.
#[must_use]
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹–".to_owned();
    }
    let negative = amount < 0.0;
    let rounded = round_paise(amount.abs());
    let whole = rounded.trunc() as u64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let paise = ((rounded - rounded.trunc()) * 100.0).round() as u64;
    let grouped = group_indian(whole);
    let sign = if negative { "-" } else { "" };
    format!("{sign}₹{grouped}.{paise:02}")
}

/// Apply Indian digit grouping to a whole-rupee value: last three digits as
/// one group, every pair before that as its own.
fn group_indian(value: u64) -> String {
    if value < 1000 {
        return value.to_string();
    }
    let mut out = format!("{:03}", value % 1000);
    let mut rest = value / 1000;
    while rest >= 100 {
        out = format!("{:02},{out}", rest % 100);
        rest /= 100;
    }
    format!("{rest},{out}")
}

/// Parse a user-entered amount, tolerating the symbols [`format_inr`] emits.
///
/// # Errors
///
/// Returns a user-facing message when the input is not a positive number.
pub fn parse_amount(input: &str) -> Result<f64, String> {
    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '₹'))
        .collect();
    if cleaned.is_empty() {
        return Err("Enter an amount".to_owned());
    }
    let value: f64 = cleaned
        .parse()
        .map_err(|_| "Enter a valid amount".to_owned())?;
    if !value.is_finite() || value <= 0.0 {
        return Err("Amount must be greater than zero".to_owned());
    }
    Ok(round_paise(value))
}
