use super::*;

#[test]
fn payment_request_requires_reference_for_instruments() {
    assert!(build_payment_request("9,000", PaymentMode::Cheque, " ").is_err());
    assert!(build_payment_request("9,000", PaymentMode::BankTransfer, "").is_err());
    let request = build_payment_request("9,000", PaymentMode::Cash, "").unwrap();
    assert_eq!(request.amount, 9000.0);
    assert_eq!(request.reference_number, None);
}

#[test]
fn payment_request_keeps_trimmed_reference() {
    let request =
        build_payment_request("500", PaymentMode::Cheque, "  123456  ").unwrap();
    assert_eq!(request.mode, PaymentMode::Cheque);
    assert_eq!(request.reference_number.as_deref(), Some("123456"));
}

#[test]
fn payment_request_rejects_bad_amount() {
    assert!(build_payment_request("", PaymentMode::Cash, "").is_err());
    assert!(build_payment_request("-5", PaymentMode::Cash, "").is_err());
}

#[test]
fn mode_select_values_round_trip_debug_names() {
    assert_eq!(mode_from_value("BankTransfer"), PaymentMode::BankTransfer);
    assert_eq!(mode_from_value("Upi"), PaymentMode::Upi);
    assert_eq!(mode_from_value("bogus"), PaymentMode::Cash);
}
