//! Wizard step 3: loan terms with a live EMI preview.

use leptos::prelude::*;

use crate::components::field::{Field, wizard_field_error};
use crate::state::wizard::WizardState;
use crate::util::emi::{self, EmiBreakdown};
use crate::util::money::{format_inr, parse_amount};

#[component]
pub fn StepLoan() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();

    let amount = Signal::derive(move || wizard.get().loan.amount.clone());
    let set_amount = Callback::new(move |v: String| wizard.update(|w| w.loan.amount = v));
    let tenure = Signal::derive(move || wizard.get().loan.tenure_months.clone());
    let set_tenure = Callback::new(move |v: String| wizard.update(|w| w.loan.tenure_months = v));
    let rate = Signal::derive(move || wizard.get().loan.annual_rate_pct.clone());
    let set_rate = Callback::new(move |v: String| wizard.update(|w| w.loan.annual_rate_pct = v));
    let purpose = Signal::derive(move || wizard.get().loan.purpose.clone());
    let set_purpose = Callback::new(move |v: String| wizard.update(|w| w.loan.purpose = v));

    // Preview recomputes as soon as all three numbers parse; invalid input
    // just hides it, advance() owns the real validation.
    let preview = Signal::derive(move || -> Option<EmiBreakdown> {
        let loan = wizard.get().loan;
        let principal = parse_amount(&loan.amount).ok()?;
        let rate: f64 = loan.annual_rate_pct.trim().parse().ok()?;
        let months: u32 = loan.tenure_months.trim().parse().ok()?;
        emi::breakdown(principal, rate, months).ok()
    });

    view! {
        <div class="wizard-step">
            <h2 class="wizard-step__title">"Loan Terms"</h2>
            <Field
                label="Loan Amount"
                value=amount
                on_input=set_amount
                error=wizard_field_error(wizard, "amount")
                placeholder="e.g. 2,50,000"
            />
            <Field
                label="Tenure (months)"
                value=tenure
                on_input=set_tenure
                error=wizard_field_error(wizard, "tenure_months")
            />
            <Field
                label="Annual Rate %"
                value=rate
                on_input=set_rate
                error=wizard_field_error(wizard, "annual_rate_pct")
            />
            <Field
                label="Purpose"
                value=purpose
                on_input=set_purpose
                error=wizard_field_error(wizard, "purpose")
                placeholder="e.g. working capital"
            />

            {move || {
                preview.get().map(|b| {
                    view! {
                        <div class="emi-preview">
                            <span class="emi-preview__figure">
                                "Monthly EMI " <strong>{format_inr(b.emi)}</strong>
                            </span>
                            <span>"Total interest " {format_inr(b.total_interest)}</span>
                            <span>"Total payable " {format_inr(b.total_payable)}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
