//! Wizard step 7: read-only summary before submission.

use leptos::prelude::*;

use crate::state::wizard::{WizardState, WizardStep};
use crate::util::emi;
use crate::util::money::{format_inr, parse_amount};

#[component]
pub fn StepReview() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();

    let emi_line = Signal::derive(move || {
        let loan = wizard.get().loan;
        let principal = parse_amount(&loan.amount).ok()?;
        let rate: f64 = loan.annual_rate_pct.trim().parse().ok()?;
        let months: u32 = loan.tenure_months.trim().parse().ok()?;
        emi::emi(principal, rate, months).ok().map(format_inr)
    });

    let step_problems = Signal::derive(move || {
        let w = wizard.get();
        WizardStep::ALL
            .into_iter()
            .filter(|s| *s != WizardStep::Review)
            .filter_map(|s| w.errors.get(s.title()).map(str::to_owned))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="wizard-step">
            <h2 class="wizard-step__title">"Review & Submit"</h2>

            <Show when=move || !step_problems.get().is_empty()>
                <ul class="review__problems">
                    {move || {
                        step_problems
                            .get()
                            .into_iter()
                            .map(|p| view! { <li class="review__problem">{p}</li> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>

            {move || {
                let w = wizard.get();
                let address = format!(
                    "{}, {}, {} {}",
                    w.address.line1, w.address.city, w.address.state, w.address.pincode
                );
                let loan = format!(
                    "{} over {} months at {}% p.a.",
                    w.loan.amount, w.loan.tenure_months, w.loan.annual_rate_pct
                );
                view! {
                    <dl class="review">
                        <dt>"Applicant"</dt>
                        <dd>{format!("{} · {} · PAN {}", w.applicant.name, w.applicant.phone, w.applicant.pan)}</dd>
                        <dt>"Address"</dt>
                        <dd>{address}</dd>
                        <dt>"Loan"</dt>
                        <dd>
                            {loan}
                            {move || {
                                emi_line.get().map(|e| view! { <span class="review__emi">{" — EMI "} {e}</span> })
                            }}
                        </dd>
                        <dt>"Liabilities"</dt>
                        <dd>
                            {if w.liabilities.is_empty() {
                                "None declared".to_owned()
                            } else {
                                w.liabilities
                                    .iter()
                                    .map(|row| match row.derived_rate_pct {
                                        Some(rate) => {
                                            format!("{} (≈ {rate:.2}% p.a.)", row.lender)
                                        }
                                        None => row.lender.clone(),
                                    })
                                    .collect::<Vec<_>>()
                                    .join(", ")
                            }}
                        </dd>
                        <dt>"Co-applicants"</dt>
                        <dd>
                            {if w.associates.is_empty() {
                                "None".to_owned()
                            } else {
                                w.associates
                                    .iter()
                                    .map(|e| format!("{} ({})", e.name, e.role.label()))
                                    .collect::<Vec<_>>()
                                    .join(", ")
                            }}
                        </dd>
                        <dt>"Documents"</dt>
                        <dd>
                            {if w.documents.is_empty() {
                                "None staged".to_owned()
                            } else {
                                w.documents
                                    .iter()
                                    .map(|d| d.file_name.clone())
                                    .collect::<Vec<_>>()
                                    .join(", ")
                            }}
                        </dd>
                    </dl>
                }
            }}
        </div>
    }
}
