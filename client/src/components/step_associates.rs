//! Wizard step 5: co-applicants, guarantors, and references.

use leptos::prelude::*;

use crate::components::field::wizard_row_error;
use crate::net::types::AssociateRole;
use crate::state::wizard::{AssociateEntry, WizardState};

fn role_from_value(value: &str) -> AssociateRole {
    AssociateRole::ALL
        .into_iter()
        .find(|r| format!("{r:?}") == value)
        .unwrap_or_default()
}

#[component]
pub fn StepAssociates() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();

    let row_count = Signal::derive(move || wizard.get().associates.len());

    view! {
        <div class="wizard-step">
            <h2 class="wizard-step__title">"Co-applicants & References"</h2>
            <p class="wizard-step__hint">"Optional, but guarantors strengthen the file."</p>
            {move || {
                (0..row_count.get())
                    .map(|index| view! { <AssociateRowView index=index /> })
                    .collect::<Vec<_>>()
            }}
            <button
                class="btn"
                on:click=move |_| wizard.update(|w| w.associates.push(AssociateEntry::default()))
            >
                "+ Add person"
            </button>
        </div>
    }
}

#[component]
fn AssociateRowView(index: usize) -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();

    let entry = move || wizard.get().associates.get(index).cloned().unwrap_or_default();
    let edit = move |apply: fn(&mut AssociateEntry, String), value: String| {
        wizard.update(|w| {
            if let Some(entry) = w.associates.get_mut(index) {
                apply(entry, value);
            }
        });
    };

    let name_error = wizard_row_error(wizard, "associate", index, "name");
    let phone_error = wizard_row_error(wizard, "associate", index, "phone");

    view! {
        <div class="associate-row">
            <label class="field">
                <span class="field__label">"Name"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || entry().name
                    on:input=move |ev| edit(|e, v| e.name = v, event_target_value(&ev))
                />
                <Show when=move || name_error.get().is_some()>
                    <span class="field__error">{move || name_error.get().unwrap_or_default()}</span>
                </Show>
            </label>
            <label class="field">
                <span class="field__label">"Role"</span>
                <select
                    class="field__input"
                    on:change=move |ev| {
                        let role = role_from_value(&event_target_value(&ev));
                        wizard.update(|w| {
                            if let Some(entry) = w.associates.get_mut(index) {
                                entry.role = role;
                            }
                        });
                    }
                >
                    {AssociateRole::ALL
                        .into_iter()
                        .map(|r| view! { <option value=format!("{r:?}")>{r.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="field">
                <span class="field__label">"Phone"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || entry().phone
                    on:input=move |ev| edit(|e, v| e.phone = v, event_target_value(&ev))
                />
                <Show when=move || phone_error.get().is_some()>
                    <span class="field__error">{move || phone_error.get().unwrap_or_default()}</span>
                </Show>
            </label>
            <label class="field">
                <span class="field__label">"Relation (optional)"</span>
                <input
                    class="field__input"
                    type="text"
                    placeholder="e.g. brother, employer"
                    prop:value=move || entry().relation
                    on:input=move |ev| edit(|e, v| e.relation = v, event_target_value(&ev))
                />
            </label>
            <button
                class="btn btn--small btn--danger"
                on:click=move |_| {
                    wizard.update(|w| {
                        if index < w.associates.len() {
                            w.associates.remove(index);
                        }
                    });
                }
            >
                "Remove"
            </button>
        </div>
    }
}
