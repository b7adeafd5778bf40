use super::*;

#[test]
fn payment_deserializes_snake_case_enums() {
    let payment: Payment = serde_json::from_str(
        r#"{
            "id": "p-1",
            "case_id": "c-1",
            "amount": 8884.88,
            "mode": "bank_transfer",
            "reference_number": "UTR123",
            "receipt_number": null,
            "paid_at": "2026-07-12T09:30:00Z",
            "received_by": "off-3",
            "status": "confirmed"
        }"#,
    )
    .unwrap();
    assert_eq!(payment.mode, PaymentMode::BankTransfer);
    assert_eq!(payment.status, PaymentStatus::Confirmed);
}

#[test]
fn payment_mode_round_trips_through_as_str() {
    for mode in PaymentMode::ALL {
        assert_eq!(mode.as_str().parse::<PaymentMode>().unwrap(), mode);
    }
}

#[test]
fn payment_mode_parse_rejects_unknown_value() {
    let err = "barter".parse::<PaymentMode>().unwrap_err();
    assert_eq!(err.to_string(), "unknown payment mode value: barter");
}

#[test]
fn labels_match_display_conventions() {
    assert_eq!(PaymentMode::Upi.label(), "UPI");
    assert_eq!(PaymentStatus::Bounced.label(), "Bounced");
}
