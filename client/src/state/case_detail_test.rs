use super::*;

#[test]
fn default_state_shows_nothing() {
    let state = CaseDetailState::default();
    assert_eq!(state.case_id, None);
    assert!(state.case.is_none());
    assert!(!state.loading_case);
}

#[test]
fn reset_for_clears_previous_case_and_starts_loading() {
    let mut state = CaseDetailState {
        case_id: Some("c-1".to_owned()),
        payments: vec![],
        case_error: Some("old error".to_owned()),
        flagging: true,
        ..CaseDetailState::default()
    };
    state.reset_for("c-2".to_owned());
    assert_eq!(state.case_id.as_deref(), Some("c-2"));
    assert!(state.loading_case);
    assert!(state.loading_histories);
    assert_eq!(state.case_error, None);
    assert!(!state.flagging);
}

#[test]
fn is_showing_compares_route_ids() {
    let mut state = CaseDetailState::default();
    assert!(!state.is_showing("c-1"));
    state.reset_for("c-1".to_owned());
    assert!(state.is_showing("c-1"));
    assert!(!state.is_showing("c-2"));
}
