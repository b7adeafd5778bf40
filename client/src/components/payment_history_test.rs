use super::*;
use crate::net::types::PaymentMode;

fn sample_payment(mode: PaymentMode, reference: Option<&str>) -> Payment {
    Payment {
        id: "p-1".to_owned(),
        case_id: "c-1".to_owned(),
        amount: 8884.88,
        mode,
        reference_number: reference.map(str::to_owned),
        receipt_number: None,
        paid_at: "2026-07-12T09:30:00Z".to_owned(),
        received_by: "off-3".to_owned(),
        status: PaymentStatus::Confirmed,
    }
}

#[test]
fn instrument_display_includes_reference_when_present() {
    let payment = sample_payment(PaymentMode::BankTransfer, Some("UTR123"));
    assert_eq!(instrument_display(&payment), "Bank Transfer · UTR123");
}

#[test]
fn instrument_display_is_mode_only_without_reference() {
    assert_eq!(instrument_display(&sample_payment(PaymentMode::Cash, None)), "Cash");
    assert_eq!(instrument_display(&sample_payment(PaymentMode::Upi, Some(""))), "UPI");
}

#[test]
fn payment_status_class_covers_all_variants() {
    assert_eq!(payment_status_class(PaymentStatus::Pending), "badge badge--pending");
    assert_eq!(payment_status_class(PaymentStatus::Confirmed), "badge badge--confirmed");
    assert_eq!(payment_status_class(PaymentStatus::Bounced), "badge badge--bounced");
}
