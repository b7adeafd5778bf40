//! Loan application wizard page.
//!
//! The step rail, progress bar, and back/next chrome live here; each step's
//! form is its own component under `components::step_*`. All entered data
//! sits in the shared `WizardState` so navigation never loses input.

#[cfg(test)]
#[path = "apply_test.rs"]
mod apply_test;

use leptos::prelude::*;

use crate::components::step_address::StepAddress;
use crate::components::step_applicant::StepApplicant;
use crate::components::step_associates::StepAssociates;
use crate::components::step_documents::StepDocuments;
use crate::components::step_liabilities::StepLiabilities;
use crate::components::step_loan::StepLoan;
use crate::components::step_review::StepReview;
#[cfg(feature = "hydrate")]
use crate::components::toast_host;
#[cfg(feature = "hydrate")]
use crate::state::ui::{ToastLevel, UiState};
use crate::state::wizard::{SubmitStatus, WizardState, WizardStep};

/// Rail tab class for a step given the current position and unlock state.
fn rail_class(step: WizardStep, current: WizardStep, unlocked: bool) -> String {
    let mut class = String::from("wizard-rail__tab");
    if step == current {
        class.push_str(" wizard-rail__tab--active");
    } else if unlocked {
        class.push_str(" wizard-rail__tab--open");
    } else {
        class.push_str(" wizard-rail__tab--locked");
    }
    class
}

/// Loan application wizard page.
#[component]
pub fn ApplicationPage() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();
    #[cfg(feature = "hydrate")]
    let ui = expect_context::<RwSignal<UiState>>();

    let step = Signal::derive(move || wizard.get().step);
    let submitting = Signal::derive(move || wizard.get().submit == SubmitStatus::Submitting);

    let on_back = move |_| wizard.update(WizardState::back);
    let on_next = move |_| {
        wizard.update(|w| {
            w.advance();
        });
    };

    let on_submit = move |_| {
        let draft = match wizard.get_untracked().to_draft() {
            Ok(draft) => draft,
            Err(errors) => {
                wizard.update(|w| w.errors = errors);
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            wizard.update(|w| w.submit = SubmitStatus::Submitting);
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_application(&draft).await {
                    Ok(resp) => {
                        toast_host::show(ui, ToastLevel::Success, "Application submitted");
                        wizard.update(|w| {
                            w.submit = SubmitStatus::Submitted {
                                application_id: resp.application_id,
                            };
                        });
                    }
                    Err(message) => {
                        toast_host::show(ui, ToastLevel::Error, message.clone());
                        wizard.update(|w| w.submit = SubmitStatus::Failed { message });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
        }
    };

    view! {
        <div class="apply-page">
            <header class="apply-page__header">
                <h1>"New Loan Application"</h1>
                <div class="wizard-progress">
                    <div
                        class="wizard-progress__bar"
                        style:width=move || format!("{}%", step.get().progress_pct())
                    ></div>
                </div>
            </header>

            <nav class="wizard-rail">
                {WizardStep::ALL
                    .into_iter()
                    .map(|s| {
                        view! {
                            <button
                                class=move || {
                                    let w = wizard.get();
                                    rail_class(s, w.step, s <= w.furthest && w.can_enter(s))
                                }
                                on:click=move |_| {
                                    wizard.update(|w| {
                                        w.goto(s);
                                    });
                                }
                            >
                                {format!("{}. {}", s.index() + 1, s.title())}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            {move || match wizard.get().submit {
                SubmitStatus::Submitted { application_id } => {
                    view! {
                        <div class="apply-page__done">
                            <h2>"Application Submitted"</h2>
                            <p>
                                "Reference: "
                                <strong>{application_id}</strong>
                            </p>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| wizard.set(WizardState::default())
                            >
                                "Start Another"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                _ => {
                    view! {
                        <div class="apply-page__body">
                            {move || match step.get() {
                                WizardStep::Applicant => view! { <StepApplicant /> }.into_any(),
                                WizardStep::Address => view! { <StepAddress /> }.into_any(),
                                WizardStep::Loan => view! { <StepLoan /> }.into_any(),
                                WizardStep::Liabilities => {
                                    view! { <StepLiabilities /> }.into_any()
                                }
                                WizardStep::Associates => view! { <StepAssociates /> }.into_any(),
                                WizardStep::Documents => view! { <StepDocuments /> }.into_any(),
                                WizardStep::Review => view! { <StepReview /> }.into_any(),
                            }}

                            {move || {
                                if let SubmitStatus::Failed { message } = wizard.get().submit {
                                    Some(view! { <p class="apply-page__error">{message}</p> })
                                } else {
                                    None
                                }
                            }}

                            <footer class="apply-page__nav">
                                <button
                                    class="btn"
                                    disabled=move || step.get().prev().is_none()
                                    on:click=on_back
                                >
                                    "Back"
                                </button>
                                <Show
                                    when=move || step.get() == WizardStep::Review
                                    fallback=move || {
                                        view! {
                                            <button class="btn btn--primary" on:click=on_next>
                                                "Next"
                                            </button>
                                        }
                                    }
                                >
                                    <button
                                        class="btn btn--primary"
                                        disabled=move || submitting.get()
                                        on:click=on_submit
                                    >
                                        {move || {
                                            if submitting.get() { "Submitting..." } else { "Submit" }
                                        }}
                                    </button>
                                </Show>
                            </footer>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
