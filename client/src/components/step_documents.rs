//! Wizard step 6: KYC document staging.
//!
//! The wizard stages document metadata only; binaries are pushed to the
//! backend once the application exists (and from the case screen during
//! collections). Documents are optional at draft time.

use leptos::prelude::*;

use crate::net::types::{DocumentKind, StagedDocument};
use crate::state::wizard::WizardState;

fn kind_from_value(value: &str) -> DocumentKind {
    DocumentKind::ALL
        .into_iter()
        .find(|k| format!("{k:?}") == value)
        .unwrap_or_default()
}

#[component]
pub fn StepDocuments() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();

    let kind = RwSignal::new(DocumentKind::default());
    let file_name = RwSignal::new(String::new());

    let on_stage = move |_| {
        let name = file_name.get().trim().to_owned();
        if name.is_empty() {
            return;
        }
        wizard.update(|w| {
            w.documents.push(StagedDocument {
                kind: kind.get().as_str().to_owned(),
                file_name: name.clone(),
            });
        });
        file_name.set(String::new());
    };

    view! {
        <div class="wizard-step">
            <h2 class="wizard-step__title">"KYC Documents"</h2>
            <p class="wizard-step__hint">
                "List the documents collected from the applicant; uploads follow once the file is registered."
            </p>

            <div class="document-stage">
                <select
                    class="field__input"
                    on:change=move |ev| kind.set(kind_from_value(&event_target_value(&ev)))
                >
                    {DocumentKind::ALL
                        .into_iter()
                        .map(|k| view! { <option value=format!("{k:?}")>{k.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    class="field__input"
                    type="text"
                    placeholder="file name, e.g. pan_card.jpg"
                    prop:value=move || file_name.get()
                    on:input=move |ev| file_name.set(event_target_value(&ev))
                />
                <button class="btn" on:click=on_stage>
                    "Stage"
                </button>
            </div>

            <ul class="document-stage__list">
                {move || {
                    wizard
                        .get()
                        .documents
                        .iter()
                        .enumerate()
                        .map(|(index, doc)| {
                            let label = doc
                                .kind
                                .parse::<DocumentKind>()
                                .map_or_else(
                                    |_| format!("{} - {}", doc.kind, doc.file_name),
                                    |k| format!("{} - {}", k.label(), doc.file_name),
                                );
                            view! {
                                <li class="document-stage__item">
                                    <span>{label}</span>
                                    <button
                                        class="btn btn--small btn--danger"
                                        on:click=move |_| {
                                            wizard.update(|w| {
                                                if index < w.documents.len() {
                                                    w.documents.remove(index);
                                                }
                                            });
                                        }
                                    >
                                        "Remove"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
