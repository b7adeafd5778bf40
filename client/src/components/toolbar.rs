//! Top bar with navigation and the dark-mode toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The toolbar is the only persistent chrome: brand, links to the dashboard
//! and the application wizard, and the theme toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;

/// App-wide top toolbar.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let nav_class = move |path: &'static str| {
        let current = location.pathname.get();
        let active = if path == "/" {
            current == "/"
        } else {
            current.starts_with(path)
        };
        if active { "toolbar__link toolbar__link--active" } else { "toolbar__link" }
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__brand">"LoanDesk"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>

            <a href="/" class=move || nav_class("/")>
                "Cases"
            </a>
            <a href="/apply" class=move || nav_class("/apply")>
                "New Application"
            </a>

            <span class="toolbar__spacer"></span>

            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
