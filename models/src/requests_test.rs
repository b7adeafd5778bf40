use super::*;

#[test]
fn collection_query_default_is_unfiltered_first_page() {
    let query = CollectionQuery::default();
    assert_eq!(query.search, "");
    assert_eq!(query.status, None);
    assert_eq!(query.page, 0);
}

#[test]
fn record_followup_serializes_optional_promise_fields() {
    let request = RecordFollowUpRequest {
        channel: FollowUpChannel::Call,
        outcome: FollowUpOutcome::PromiseToPay,
        remarks: "will pay Friday".to_owned(),
        promised_amount: Some(9000.0),
        promised_date: Some("2026-08-28".to_owned()),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["channel"], "call");
    assert_eq!(value["outcome"], "promise_to_pay");
    assert_eq!(value["promised_amount"], 9000.0);
}

#[test]
fn case_list_response_deserializes_total() {
    let response: CaseListResponse =
        serde_json::from_str(r#"{ "items": [], "total": 42 }"#).unwrap();
    assert!(response.items.is_empty());
    assert_eq!(response.total, 42);
}

#[test]
fn ack_and_submit_response_round_trip() {
    let ack: Ack = serde_json::from_str(r#"{ "ok": true }"#).unwrap();
    assert!(ack.ok);
    let submitted: SubmitResponse =
        serde_json::from_str(r#"{ "application_id": "app-77" }"#).unwrap();
    assert_eq!(submitted.application_id, "app-77");
}
