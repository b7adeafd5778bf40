//! Form field validation with user-facing messages.
//!
//! DESIGN
//! ======
//! Validators are plain functions returning `Result<(), String>` where the
//! `Err` string is shown directly under the field. Forms collect failures
//! into a [`FieldErrors`] map keyed by field name, so a step can render every
//! problem at once instead of stopping at the first.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::HashMap;

/// Per-form validation failures keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: HashMap<String, String>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`, replacing any earlier message.
    pub fn insert(&mut self, field: &str, message: String) {
        self.errors.insert(field.to_owned(), message);
    }

    /// Run `check` and record its failure under `field`.
    pub fn check(&mut self, field: &str, check: Result<(), String>) {
        if let Err(message) = check {
            self.insert(field, message);
        }
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Drop all recorded failures.
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// Non-blank requirement with the field's display name in the message.
///
/// # Errors
///
/// Returns a user-facing message when `value` is blank.
pub fn require(label: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{label} is required"));
    }
    Ok(())
}

/// Indian mobile number: exactly 10 digits starting 6-9, ignoring spaces and
/// dashes.
///
/// # Errors
///
/// Returns a user-facing message when the number is malformed.
pub fn validate_phone(value: &str) -> Result<(), String> {
    let digits: String = value.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    if digits.len() != 10 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err("Phone must be a 10-digit mobile number".to_owned());
    }
    if !matches!(digits.as_bytes()[0], b'6'..=b'9') {
        return Err("Phone must start with 6, 7, 8, or 9".to_owned());
    }
    Ok(())
}

/// PAN shape: five letters, four digits, one letter (e.g. `ABCDE1234F`).
///
/// # Errors
///
/// Returns a user-facing message when the PAN is malformed.
pub fn validate_pan(value: &str) -> Result<(), String> {
    let pan = value.trim().to_ascii_uppercase();
    let bytes = pan.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[..5].iter().all(u8::is_ascii_uppercase)
        && bytes[5..9].iter().all(u8::is_ascii_digit)
        && bytes[9].is_ascii_uppercase();
    if !well_formed {
        return Err("PAN must look like ABCDE1234F".to_owned());
    }
    Ok(())
}

/// Postal pincode: exactly 6 digits, not starting with zero.
///
/// # Errors
///
/// Returns a user-facing message when the pincode is malformed.
pub fn validate_pincode(value: &str) -> Result<(), String> {
    let pincode = value.trim();
    if pincode.len() != 6 || !pincode.chars().all(|c| c.is_ascii_digit()) {
        return Err("Pincode must be 6 digits".to_owned());
    }
    if pincode.starts_with('0') {
        return Err("Pincode cannot start with 0".to_owned());
    }
    Ok(())
}

/// Minimal email shape: one `@`, non-empty local part, a dot in the domain.
///
/// # Errors
///
/// Returns a user-facing message when the email is malformed.
pub fn validate_email(value: &str) -> Result<(), String> {
    let email = value.trim();
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err("Enter a valid email address".to_owned());
    }
    let dot = domain.find('.');
    if dot.is_none() || dot == Some(0) || domain.ends_with('.') {
        return Err("Enter a valid email address".to_owned());
    }
    Ok(())
}

/// Amount within `[min, max]`, bounds shown in the message.
///
/// # Errors
///
/// Returns a user-facing message when the amount is out of range.
pub fn validate_amount(value: f64, min: f64, max: f64) -> Result<(), String> {
    if !value.is_finite() || value < min || value > max {
        return Err(format!("Amount must be between {min:.0} and {max:.0}"));
    }
    Ok(())
}

/// Tenure in months within `[1, 360]`.
///
/// # Errors
///
/// Returns a user-facing message when the tenure is out of range.
pub fn validate_tenure_months(value: u32) -> Result<(), String> {
    if !(1..=360).contains(&value) {
        return Err("Tenure must be between 1 and 360 months".to_owned());
    }
    Ok(())
}
