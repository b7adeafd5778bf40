//! Labeled form input with an inline validation message.

use leptos::prelude::*;

use crate::state::wizard::WizardState;

/// Text input wrapped with its label and the field's validation message.
#[component]
pub fn Field(
    /// Visible label.
    label: &'static str,
    /// Reactive current value.
    value: Signal<String>,
    /// Receives the raw input value on every keystroke.
    on_input: Callback<String>,
    /// Validation message shown under the input, if any.
    error: Signal<Option<String>>,
    /// HTML input type; defaults to `text`.
    #[prop(optional)]
    input_type: Option<&'static str>,
    /// Placeholder text.
    #[prop(optional)]
    placeholder: Option<&'static str>,
) -> impl IntoView {
    let kind = input_type.unwrap_or("text");
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                class:field__input--invalid=move || error.get().is_some()
                type=kind
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <span class="field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}

/// Reactive lookup of one wizard field's validation message.
pub fn wizard_field_error(wizard: RwSignal<WizardState>, key: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || wizard.get().errors.get(key).map(str::to_owned))
}

/// Reactive lookup of an indexed wizard field's validation message
/// (liability and associate rows).
pub fn wizard_row_error(
    wizard: RwSignal<WizardState>,
    prefix: &'static str,
    index: usize,
    field: &'static str,
) -> Signal<Option<String>> {
    Signal::derive(move || {
        wizard
            .get()
            .errors
            .get(&format!("{prefix}.{index}.{field}"))
            .map(str::to_owned)
    })
}
