//! Wizard step 4: existing obligations.
//!
//! Each row holds lender, outstanding, EMI, and remaining tenure; the
//! "Derive rate" action back-solves the obligation's implied annual rate
//! from those numbers so the reviewer sees the true cost of the book.

use leptos::prelude::*;

use crate::components::field::wizard_row_error;
use crate::components::toast_host;
use crate::state::ui::{ToastLevel, UiState};
use crate::state::wizard::{LiabilityRow, WizardState};

#[component]
pub fn StepLiabilities() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();

    let row_count = Signal::derive(move || wizard.get().liabilities.len());

    view! {
        <div class="wizard-step">
            <h2 class="wizard-step__title">"Existing Liabilities"</h2>
            <p class="wizard-step__hint">
                "Declare running loans so the implied obligations are on file. Leave empty if none."
            </p>
            {move || {
                (0..row_count.get())
                    .map(|index| view! { <LiabilityRowView index=index /> })
                    .collect::<Vec<_>>()
            }}
            <button
                class="btn"
                on:click=move |_| wizard.update(|w| w.liabilities.push(LiabilityRow::default()))
            >
                "+ Add liability"
            </button>
        </div>
    }
}

#[component]
fn LiabilityRowView(index: usize) -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let row = move || wizard.get().liabilities.get(index).cloned().unwrap_or_default();
    let edit = move |apply: fn(&mut LiabilityRow, String), value: String| {
        wizard.update(|w| {
            if let Some(row) = w.liabilities.get_mut(index) {
                apply(row, value);
                // Stale once any input changes.
                row.derived_rate_pct = None;
            }
        });
    };

    let on_derive = move |_| {
        let current = row();
        match WizardState::derive_liability_rate(&current) {
            Ok(rate) => wizard.update(|w| {
                if let Some(row) = w.liabilities.get_mut(index) {
                    row.derived_rate_pct = Some(rate);
                }
            }),
            Err(message) => toast_host::show(ui, ToastLevel::Error, message),
        }
    };

    view! {
        <div class="liability-row">
            <label class="field">
                <span class="field__label">"Lender"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || row().lender
                    on:input=move |ev| edit(|r, v| r.lender = v, event_target_value(&ev))
                />
                <RowError error=wizard_row_error(wizard, "liability", index, "lender") />
            </label>
            <label class="field">
                <span class="field__label">"Outstanding"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || row().outstanding
                    on:input=move |ev| edit(|r, v| r.outstanding = v, event_target_value(&ev))
                />
                <RowError error=wizard_row_error(wizard, "liability", index, "outstanding") />
            </label>
            <label class="field">
                <span class="field__label">"Monthly EMI"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || row().monthly_emi
                    on:input=move |ev| edit(|r, v| r.monthly_emi = v, event_target_value(&ev))
                />
                <RowError error=wizard_row_error(wizard, "liability", index, "monthly_emi") />
            </label>
            <label class="field">
                <span class="field__label">"Months left"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || row().remaining_tenure_months
                    on:input=move |ev| {
                        edit(|r, v| r.remaining_tenure_months = v, event_target_value(&ev));
                    }
                />
                <RowError error=wizard_row_error(wizard, "liability", index, "remaining_tenure_months") />
            </label>
            <div class="liability-row__derived">
                <button class="btn btn--small" on:click=on_derive>
                    "Derive rate"
                </button>
                {move || {
                    row().derived_rate_pct.map(|rate| {
                        view! { <span class="liability-row__rate">{format!("≈ {rate:.2}% p.a.")}</span> }
                    })
                }}
            </div>
            <button
                class="btn btn--small btn--danger"
                on:click=move |_| {
                    wizard.update(|w| {
                        if index < w.liabilities.len() {
                            w.liabilities.remove(index);
                        }
                    });
                }
            >
                "Remove"
            </button>
        </div>
    }
}

#[component]
fn RowError(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <span class="field__error">{move || error.get().unwrap_or_default()}</span>
        </Show>
    }
}
