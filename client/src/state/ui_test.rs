use super::*;

// =============================================================
// Toast queue
// =============================================================

#[test]
fn push_toast_assigns_increasing_ids() {
    let mut state = UiState::default();
    let first = state.push_toast(ToastLevel::Info, "saving...");
    let second = state.push_toast(ToastLevel::Error, "failed");
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "saving...");
}

#[test]
fn settle_toast_updates_in_place() {
    let mut state = UiState::default();
    let id = state.push_toast(ToastLevel::Info, "recording payment...");
    state.settle_toast(id, ToastLevel::Success, "payment recorded");
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].level, ToastLevel::Success);
    assert_eq!(state.toasts[0].message, "payment recorded");
}

#[test]
fn settle_toast_after_dismiss_is_a_noop() {
    let mut state = UiState::default();
    let id = state.push_toast(ToastLevel::Info, "working...");
    state.dismiss_toast(id);
    state.settle_toast(id, ToastLevel::Error, "failed");
    assert!(state.toasts.is_empty());
}

#[test]
fn dismiss_toast_removes_only_the_target() {
    let mut state = UiState::default();
    let first = state.push_toast(ToastLevel::Info, "a");
    let second = state.push_toast(ToastLevel::Info, "b");
    state.dismiss_toast(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_has_no_toasts_and_light_mode() {
    let state = UiState::default();
    assert!(state.toasts.is_empty());
    assert!(!state.dark_mode);
    assert_eq!(state.next_toast_id, 0);
}

#[test]
fn toast_level_default_is_info() {
    assert_eq!(ToastLevel::default(), ToastLevel::Info);
}
