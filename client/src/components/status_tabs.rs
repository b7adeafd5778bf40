//! Status filter tabs for the collections dashboard.

use leptos::prelude::*;

use crate::net::types::CaseStatus;

/// "All" plus one tab per case status.
#[component]
pub fn StatusTabs(
    /// Currently selected tab; `None` is "All".
    current: Signal<Option<CaseStatus>>,
    /// Called with the newly selected tab.
    on_select: Callback<Option<CaseStatus>>,
) -> impl IntoView {
    let tab_class = move |tab: Option<CaseStatus>| {
        if current.get() == tab {
            "status-tabs__tab status-tabs__tab--active"
        } else {
            "status-tabs__tab"
        }
    };

    view! {
        <nav class="status-tabs">
            <button class=move || tab_class(None) on:click=move |_| on_select.run(None)>
                "All"
            </button>
            {CaseStatus::ALL
                .into_iter()
                .map(|status| {
                    view! {
                        <button
                            class=move || tab_class(Some(status))
                            on:click=move |_| on_select.run(Some(status))
                        >
                            {status.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
