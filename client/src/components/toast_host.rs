//! Toast rendering and the helpers pages use to surface async outcomes.
//!
//! DESIGN
//! ======
//! `show` queues a toast and arms its auto-dismiss timer; the pending/settle
//! pair keeps one toast alive across an async action, updating it in place
//! when the request resolves. State lives in `UiState` so tests can drive
//! the queue without a browser.

use leptos::prelude::*;

use crate::state::ui::{ToastLevel, UiState};

#[cfg(feature = "hydrate")]
const TOAST_DISMISS_SECS: u64 = 5;

/// Queue a toast that dismisses itself after a few seconds.
pub fn show(ui: RwSignal<UiState>, level: ToastLevel, message: impl Into<String>) {
    let mut id = 0;
    ui.update(|u| id = u.push_toast(level, message));
    arm_dismiss(ui, id);
}

/// Queue a pending toast for an in-flight action; settle it with
/// [`settle`] once the action resolves.
pub fn show_pending(ui: RwSignal<UiState>, message: impl Into<String>) -> u64 {
    let mut id = 0;
    ui.update(|u| id = u.push_toast(ToastLevel::Info, message));
    id
}

/// Resolve a pending toast and arm its dismiss timer.
pub fn settle(ui: RwSignal<UiState>, id: u64, level: ToastLevel, message: impl Into<String>) {
    ui.update(|u| u.settle_toast(id, level, message));
    arm_dismiss(ui, id);
}

fn arm_dismiss(ui: RwSignal<UiState>, id: u64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_DISMISS_SECS)).await;
            ui.update(|u| u.dismiss_toast(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ui, id);
    }
}

/// Fixed-position stack rendering the toast queue.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let level_class = |level: ToastLevel| match level {
        ToastLevel::Info => "toast toast--info",
        ToastLevel::Success => "toast toast--success",
        ToastLevel::Error => "toast toast--error",
    };

    view! {
        <div class="toast-host">
            {move || {
                ui.get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=level_class(toast.level)>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    on:click=move |_| ui.update(|u| u.dismiss_toast(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
