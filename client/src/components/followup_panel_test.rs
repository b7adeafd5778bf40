use super::*;

#[test]
fn build_request_requires_remarks() {
    let err = build_followup_request(
        FollowUpChannel::Call,
        FollowUpOutcome::Contacted,
        "   ",
        "",
        "",
    )
    .unwrap_err();
    assert_eq!(err, "Enter remarks for the follow-up");
}

#[test]
fn non_promise_outcomes_drop_promise_fields() {
    let request = build_followup_request(
        FollowUpChannel::Sms,
        FollowUpOutcome::NoContact,
        "no answer",
        "9000",
        "2026-09-01",
    )
    .unwrap();
    assert_eq!(request.promised_amount, None);
    assert_eq!(request.promised_date, None);
    assert_eq!(request.remarks, "no answer");
}

#[test]
fn promise_outcome_requires_amount_and_date() {
    assert!(
        build_followup_request(
            FollowUpChannel::Call,
            FollowUpOutcome::PromiseToPay,
            "will pay",
            "",
            "2026-09-01",
        )
        .is_err()
    );
    assert!(
        build_followup_request(
            FollowUpChannel::Call,
            FollowUpOutcome::PromiseToPay,
            "will pay",
            "9,000",
            "  ",
        )
        .is_err()
    );
    let request = build_followup_request(
        FollowUpChannel::Call,
        FollowUpOutcome::PromiseToPay,
        "will pay",
        "9,000",
        "2026-09-01",
    )
    .unwrap();
    assert_eq!(request.promised_amount, Some(9000.0));
    assert_eq!(request.promised_date.as_deref(), Some("2026-09-01"));
}

#[test]
fn select_values_round_trip_debug_names() {
    assert_eq!(channel_from_value("FieldVisit"), FollowUpChannel::FieldVisit);
    assert_eq!(channel_from_value("bogus"), FollowUpChannel::Call);
    assert_eq!(outcome_from_value("Dispute"), FollowUpOutcome::Dispute);
    assert_eq!(outcome_from_value(""), FollowUpOutcome::NoContact);
}
