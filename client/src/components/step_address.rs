//! Wizard step 2: applicant address.

use leptos::prelude::*;

use crate::components::field::{Field, wizard_field_error};
use crate::net::types::{Address, AddressKind};
use crate::state::wizard::WizardState;

fn kind_from_value(value: &str) -> AddressKind {
    AddressKind::ALL
        .into_iter()
        .find(|k| format!("{k:?}") == value)
        .unwrap_or_default()
}

/// Address form fields, shared by the wizard and the case page's add-address
/// dialog (which passes its own signals).
#[component]
pub fn StepAddress() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();

    let line1 = Signal::derive(move || wizard.get().address.line1.clone());
    let set_line1 = Callback::new(move |v: String| wizard.update(|w| w.address.line1 = v));
    let line2 = Signal::derive(move || wizard.get().address.line2.clone());
    let set_line2 = Callback::new(move |v: String| wizard.update(|w| w.address.line2 = v));
    let city = Signal::derive(move || wizard.get().address.city.clone());
    let set_city = Callback::new(move |v: String| wizard.update(|w| w.address.city = v));
    let state = Signal::derive(move || wizard.get().address.state.clone());
    let set_state = Callback::new(move |v: String| wizard.update(|w| w.address.state = v));
    let pincode = Signal::derive(move || wizard.get().address.pincode.clone());
    let set_pincode = Callback::new(move |v: String| wizard.update(|w| w.address.pincode = v));

    view! {
        <div class="wizard-step">
            <h2 class="wizard-step__title">"Address"</h2>
            <label class="field">
                <span class="field__label">"Address Type"</span>
                <select
                    class="field__input"
                    on:change=move |ev| {
                        wizard.update(|w| w.address.kind = kind_from_value(&event_target_value(&ev)));
                    }
                >
                    {AddressKind::ALL
                        .into_iter()
                        .map(|k| view! { <option value=format!("{k:?}")>{k.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <Field
                label="Line 1"
                value=line1
                on_input=set_line1
                error=wizard_field_error(wizard, "line1")
            />
            <Field
                label="Line 2 (optional)"
                value=line2
                on_input=set_line2
                error=Signal::derive(|| None)
            />
            <Field
                label="City"
                value=city
                on_input=set_city
                error=wizard_field_error(wizard, "city")
            />
            <Field
                label="State"
                value=state
                on_input=set_state
                error=wizard_field_error(wizard, "state")
            />
            <Field
                label="Pincode"
                value=pincode
                on_input=set_pincode
                error=wizard_field_error(wizard, "pincode")
                placeholder="6 digits"
            />
        </div>
    }
}

/// Standalone address inputs for the case page's add-address dialog.
#[component]
pub fn AddressInputs(
    kind: RwSignal<AddressKind>,
    line1: RwSignal<String>,
    line2: RwSignal<String>,
    city: RwSignal<String>,
    state: RwSignal<String>,
    pincode: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="address-inputs">
            <label class="dialog__label">
                "Address Type"
                <select
                    class="dialog__input"
                    on:change=move |ev| kind.set(kind_from_value(&event_target_value(&ev)))
                >
                    {AddressKind::ALL
                        .into_iter()
                        .map(|k| view! { <option value=format!("{k:?}")>{k.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="dialog__label">
                "Line 1"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || line1.get()
                    on:input=move |ev| line1.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Line 2 (optional)"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || line2.get()
                    on:input=move |ev| line2.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "City"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || city.get()
                    on:input=move |ev| city.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "State"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || state.get()
                    on:input=move |ev| state.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Pincode"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || pincode.get()
                    on:input=move |ev| pincode.set(event_target_value(&ev))
                />
            </label>
        </div>
    }
}

/// Assemble and validate an [`Address`] from the dialog's raw inputs.
///
/// # Errors
///
/// Returns a user-facing message for the first failing field.
pub fn build_address(
    kind: AddressKind,
    line1: &str,
    line2: &str,
    city: &str,
    state: &str,
    pincode: &str,
) -> Result<Address, String> {
    models::validate::require("Address line 1", line1)?;
    models::validate::require("City", city)?;
    models::validate::require("State", state)?;
    models::validate::validate_pincode(pincode)?;
    let line2 = line2.trim();
    Ok(Address {
        kind,
        line1: line1.trim().to_owned(),
        line2: if line2.is_empty() { None } else { Some(line2.to_owned()) },
        city: city.trim().to_owned(),
        state: state.trim().to_owned(),
        pincode: pincode.trim().to_owned(),
        geo: None,
    })
}
