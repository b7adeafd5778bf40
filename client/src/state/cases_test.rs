use super::*;
use models::{CustomerSummary, GeoPoint};

fn sample_case(id: &str) -> CollectionCase {
    CollectionCase {
        id: id.to_owned(),
        loan_account_number: format!("LN-{id}"),
        customer: CustomerSummary {
            id: "cu-1".to_owned(),
            name: "Ravi Kumar".to_owned(),
            phone: "9812345678".to_owned(),
        },
        principal_outstanding: 84_500.0,
        amount_overdue: 17_769.76,
        days_past_due: 62,
        emi_amount: 8884.88,
        status: CaseStatus::Pending,
        branch: "Indore".to_owned(),
        assigned_to: None,
        flag: None,
        location: Some(models::CaseLocation {
            point: GeoPoint { lat: 22.7, lon: 75.8 },
            address_text: None,
            captured_at: "2026-08-01T10:00:00Z".to_owned(),
        }),
        last_payment_date: None,
    }
}

#[test]
fn default_state_is_unfiltered_and_idle() {
    let state = CasesState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.status_tab, None);
    assert_eq!(state.page, 0);
}

#[test]
fn query_trims_search_and_carries_filters() {
    let state = CasesState {
        search: "  ravi ".to_owned(),
        status_tab: Some(CaseStatus::Legal),
        page: 3,
        ..CasesState::default()
    };
    let query = state.query();
    assert_eq!(query.search, "ravi");
    assert_eq!(query.status, Some(CaseStatus::Legal));
    assert_eq!(query.page, 3);
}

#[test]
fn apply_response_replaces_rows_and_clears_error() {
    let mut state = CasesState {
        loading: true,
        error: Some("boom".to_owned()),
        ..CasesState::default()
    };
    state.apply_response(vec![sample_case("c-1"), sample_case("c-2")], 12);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.total, 12);
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn apply_error_keeps_stale_rows() {
    let mut state = CasesState::default();
    state.apply_response(vec![sample_case("c-1")], 1);
    state.loading = true;
    state.apply_error("network down".to_owned());
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("network down"));
    assert!(!state.loading);
}
