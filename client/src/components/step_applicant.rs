//! Wizard step 1: applicant identity.

use leptos::prelude::*;

use crate::components::field::{Field, wizard_field_error};
use crate::state::wizard::WizardState;

#[component]
pub fn StepApplicant() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();

    let name = Signal::derive(move || wizard.get().applicant.name.clone());
    let set_name = Callback::new(move |v: String| wizard.update(|w| w.applicant.name = v));
    let phone = Signal::derive(move || wizard.get().applicant.phone.clone());
    let set_phone = Callback::new(move |v: String| wizard.update(|w| w.applicant.phone = v));
    let email = Signal::derive(move || wizard.get().applicant.email.clone());
    let set_email = Callback::new(move |v: String| wizard.update(|w| w.applicant.email = v));
    let pan = Signal::derive(move || wizard.get().applicant.pan.clone());
    let set_pan = Callback::new(move |v: String| wizard.update(|w| w.applicant.pan = v));
    let dob = Signal::derive(move || wizard.get().applicant.date_of_birth.clone());
    let set_dob = Callback::new(move |v: String| wizard.update(|w| w.applicant.date_of_birth = v));

    view! {
        <div class="wizard-step">
            <h2 class="wizard-step__title">"Applicant Details"</h2>
            <Field
                label="Full Name"
                value=name
                on_input=set_name
                error=wizard_field_error(wizard, "name")
            />
            <Field
                label="Mobile Number"
                value=phone
                on_input=set_phone
                error=wizard_field_error(wizard, "phone")
                placeholder="10-digit mobile"
            />
            <Field
                label="Email (optional)"
                value=email
                on_input=set_email
                error=wizard_field_error(wizard, "email")
            />
            <Field
                label="PAN"
                value=pan
                on_input=set_pan
                error=wizard_field_error(wizard, "pan")
                placeholder="ABCDE1234F"
            />
            <Field
                label="Date of Birth"
                value=dob
                on_input=set_dob
                error=wizard_field_error(wizard, "date_of_birth")
                input_type="date"
            />
        </div>
    }
}
