use super::*;

// =============================================================
// FieldErrors
// =============================================================

#[test]
fn field_errors_collects_only_failures() {
    let mut errors = FieldErrors::new();
    errors.check("name", require("Name", "Ravi"));
    errors.check("phone", validate_phone("12345"));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("phone"), Some("Phone must be a 10-digit mobile number"));
    assert_eq!(errors.get("name"), None);
}

#[test]
fn field_errors_insert_replaces_earlier_message() {
    let mut errors = FieldErrors::new();
    errors.insert("pan", "first".to_owned());
    errors.insert("pan", "second".to_owned());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("pan"), Some("second"));
}

#[test]
fn field_errors_clear_empties_the_map() {
    let mut errors = FieldErrors::new();
    errors.insert("name", "msg".to_owned());
    errors.clear();
    assert!(errors.is_empty());
}

// =============================================================
// Individual validators
// =============================================================

#[test]
fn require_rejects_blank_and_whitespace() {
    assert_eq!(require("Name", ""), Err("Name is required".to_owned()));
    assert_eq!(require("Name", "   "), Err("Name is required".to_owned()));
    assert_eq!(require("Name", "Ravi"), Ok(()));
}

#[test]
fn phone_accepts_ten_digit_mobiles_with_separators() {
    assert_eq!(validate_phone("9812345678"), Ok(()));
    assert_eq!(validate_phone("98123-45678"), Ok(()));
    assert_eq!(validate_phone("98123 45678"), Ok(()));
}

#[test]
fn phone_rejects_bad_length_and_leading_digit() {
    assert!(validate_phone("981234567").is_err());
    assert!(validate_phone("98123456789").is_err());
    assert!(validate_phone("5812345678").is_err());
    assert!(validate_phone("98123x5678").is_err());
}

#[test]
fn pan_accepts_canonical_shape_case_insensitively() {
    assert_eq!(validate_pan("ABCDE1234F"), Ok(()));
    assert_eq!(validate_pan("abcde1234f"), Ok(()));
}

#[test]
fn pan_rejects_malformed_shapes() {
    assert!(validate_pan("ABCD1234F").is_err());
    assert!(validate_pan("ABCDE12345").is_err());
    assert!(validate_pan("1BCDE1234F").is_err());
    assert_eq!(validate_pan("ABCDE123F").unwrap_err(), "PAN must look like ABCDE1234F");
}

#[test]
fn pincode_rejects_wrong_length_and_leading_zero() {
    assert_eq!(validate_pincode("452001"), Ok(()));
    assert!(validate_pincode("45200").is_err());
    assert!(validate_pincode("052001").is_err());
    assert!(validate_pincode("45200a").is_err());
}

#[test]
fn email_requires_at_and_dotted_domain() {
    assert_eq!(validate_email("ravi@example.com"), Ok(()));
    assert!(validate_email("ravi").is_err());
    assert!(validate_email("@example.com").is_err());
    assert!(validate_email("ravi@example").is_err());
    assert!(validate_email("ravi@.com").is_err());
    assert!(validate_email("ravi@example.").is_err());
}

#[test]
fn amount_bounds_appear_in_message() {
    assert_eq!(validate_amount(50_000.0, 10_000.0, 5_000_000.0), Ok(()));
    let err = validate_amount(100.0, 10_000.0, 5_000_000.0).unwrap_err();
    assert_eq!(err, "Amount must be between 10000 and 5000000");
    assert!(validate_amount(f64::NAN, 0.0, 1.0).is_err());
}

#[test]
fn tenure_bounds_are_inclusive() {
    assert_eq!(validate_tenure_months(1), Ok(()));
    assert_eq!(validate_tenure_months(360), Ok(()));
    assert!(validate_tenure_months(0).is_err());
    assert!(validate_tenure_months(361).is_err());
}
