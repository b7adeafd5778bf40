use super::*;

fn sample_case_json(status: &str) -> String {
    format!(
        r#"{{
            "id": "c-1",
            "loan_account_number": "LN-2209-0042",
            "customer": {{ "id": "cu-9", "name": "Ravi Kumar", "phone": "9812345678" }},
            "principal_outstanding": 84500.0,
            "amount_overdue": 17769.76,
            "days_past_due": 62,
            "emi_amount": 8884.88,
            "status": "{status}",
            "branch": "Indore",
            "assigned_to": "off-3",
            "flag": null,
            "location": null,
            "last_payment_date": "2026-06-05"
        }}"#
    )
}

#[test]
fn case_deserializes_known_status() {
    let case: CollectionCase = serde_json::from_str(&sample_case_json("in_follow_up")).unwrap();
    assert_eq!(case.status, CaseStatus::InFollowUp);
    assert_eq!(case.customer.name, "Ravi Kumar");
    assert_eq!(case.days_past_due, 62);
}

#[test]
fn case_survives_unknown_status_string() {
    let case: CollectionCase = serde_json::from_str(&sample_case_json("skip_traced")).unwrap();
    assert_eq!(case.status, CaseStatus::Unknown);
}

#[test]
fn status_round_trips_through_as_str() {
    for status in CaseStatus::ALL {
        assert_eq!(status.as_str().parse::<CaseStatus>().unwrap(), status);
    }
}

#[test]
fn status_parse_rejects_unknown_value() {
    let err = "escalated".parse::<CaseStatus>().unwrap_err();
    assert_eq!(err.to_string(), "unknown case status value: escalated");
}

#[test]
fn only_closed_is_terminal() {
    assert!(CaseStatus::Closed.is_terminal());
    assert!(!CaseStatus::Pending.is_terminal());
    assert!(!CaseStatus::Legal.is_terminal());
}

#[test]
fn status_labels_are_human_facing() {
    assert_eq!(CaseStatus::PromiseToPay.label(), "Promise to Pay");
    assert_eq!(CaseStatus::InFollowUp.label(), "In Follow-up");
}

#[test]
fn case_location_serializes_nested_point() {
    let location = CaseLocation {
        point: GeoPoint { lat: 22.72, lon: 75.86 },
        address_text: Some("56 Dukan, Indore".to_owned()),
        captured_at: "2026-08-01T10:15:00Z".to_owned(),
    };
    let value = serde_json::to_value(&location).unwrap();
    assert_eq!(value["point"]["lat"], 22.72);
    assert_eq!(value["address_text"], "56 Dukan, Indore");
}
