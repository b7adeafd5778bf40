use super::*;

#[test]
fn followup_deserializes_with_promise_fields() {
    let followup: FollowUp = serde_json::from_str(
        r#"{
            "id": "f-1",
            "case_id": "c-1",
            "channel": "field_visit",
            "outcome": "promise_to_pay",
            "remarks": "Will pay after salary credit",
            "promised_amount": 9000.0,
            "promised_date": "2026-08-05",
            "next_action_date": "2026-08-06",
            "recorded_by": "off-3",
            "recorded_at": "2026-07-28T14:00:00Z"
        }"#,
    )
    .unwrap();
    assert_eq!(followup.channel, FollowUpChannel::FieldVisit);
    assert_eq!(followup.outcome, FollowUpOutcome::PromiseToPay);
    assert_eq!(followup.promised_amount, Some(9000.0));
}

#[test]
fn only_promise_to_pay_requires_promise_fields() {
    for outcome in FollowUpOutcome::ALL {
        assert_eq!(outcome.requires_promise(), outcome == FollowUpOutcome::PromiseToPay);
    }
}

#[test]
fn channel_labels_match_display_conventions() {
    assert_eq!(FollowUpChannel::Sms.label(), "SMS");
    assert_eq!(FollowUpChannel::FieldVisit.label(), "Field Visit");
    assert_eq!(FollowUpOutcome::NoContact.label(), "No Contact");
}
