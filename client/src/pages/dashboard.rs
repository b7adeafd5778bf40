//! Collections dashboard: searchable, status-filtered case list.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::case_table::CaseTable;
use crate::components::emi_calculator::EmiCalculatorDialog;
use crate::components::status_tabs::StatusTabs;
use crate::state::cases::CasesState;

/// Backend list page size; drives the next-page gate.
const PAGE_SIZE: u32 = 20;

/// Whether a page after `page` exists for `total` matches.
#[must_use]
fn has_next_page(page: u32, total: i64) -> bool {
    i64::from(page + 1) * i64::from(PAGE_SIZE) < total
}

/// Kick off a list fetch for the current filters.
fn refresh(cases: RwSignal<CasesState>) {
    cases.update(|c| c.loading = true);
    #[cfg(feature = "hydrate")]
    {
        let query = cases.get_untracked().query();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_collection(&query).await {
                Ok(resp) => cases.update(|c| c.apply_response(resp.items, resp.total)),
                Err(message) => cases.update(|c| c.apply_error(message)),
            }
        });
    }
}

/// Collections dashboard page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let cases = expect_context::<RwSignal<CasesState>>();

    // Fetch on mount and again whenever the tab or page changes; search
    // refetches on Enter or the search button so typing stays cheap. The memo
    // keeps list responses from re-triggering the effect.
    let filters = Memo::new(move |_| cases.with(|c| (c.status_tab, c.page)));
    Effect::new(move || {
        let _ = filters.get();
        refresh(cases);
    });

    let on_search = move || {
        cases.update(CasesState::reset_page);
        refresh(cases);
    };

    let on_tab = Callback::new(move |status| {
        cases.update(|c| {
            c.status_tab = status;
            c.reset_page();
        });
    });

    let show_calculator = RwSignal::new(false);
    let on_calculator_close = Callback::new(move |()| show_calculator.set(false));

    let current_tab = Signal::derive(move || cases.get().status_tab);
    let items = Signal::derive(move || cases.get().items);
    let summary = Signal::derive(move || {
        let c = cases.get();
        format!("{} case(s)", c.total)
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Collections"</h1>
                <button class="btn" on:click=move |_| show_calculator.set(true)>
                    "EMI Calculator"
                </button>
            </header>

            <div class="dashboard-page__filters">
                <input
                    class="dashboard-page__search"
                    type="text"
                    placeholder="Search name, phone, or loan account"
                    prop:value=move || cases.get().search
                    on:input=move |ev| cases.update(|c| c.search = event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_search();
                        }
                    }
                />
                <button class="btn btn--primary" on:click=move |_| on_search()>
                    "Search"
                </button>
            </div>

            <StatusTabs current=current_tab on_select=on_tab />

            <Show when=move || cases.get().error.is_some()>
                <p class="dashboard-page__error">
                    {move || cases.get().error.unwrap_or_default()}
                </p>
            </Show>

            <Show when=move || cases.get().loading>
                <p class="dashboard-page__loading">"Loading cases..."</p>
            </Show>

            <CaseTable items=items />

            <footer class="dashboard-page__pager">
                <span class="dashboard-page__summary">{summary}</span>
                <button
                    class="btn btn--small"
                    disabled=move || cases.get().page == 0
                    on:click=move |_| {
                        cases.update(|c| c.page = c.page.saturating_sub(1));
                    }
                >
                    "Previous"
                </button>
                <span class="dashboard-page__page">
                    {move || format!("Page {}", cases.get().page + 1)}
                </span>
                <button
                    class="btn btn--small"
                    disabled=move || {
                        let c = cases.get();
                        !has_next_page(c.page, c.total)
                    }
                    on:click=move |_| cases.update(|c| c.page += 1)
                >
                    "Next"
                </button>
            </footer>

            <Show when=move || show_calculator.get()>
                <EmiCalculatorDialog on_cancel=on_calculator_close />
            </Show>
        </div>
    }
}
