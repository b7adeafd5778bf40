//! EMI calculator dialog.
//!
//! Standalone what-if tool: principal, rate, and tenure in; EMI, totals, and
//! an amortization preview out. Pure computation lives in `util::emi`; this
//! component only parses the inputs and renders the result.

#[cfg(test)]
#[path = "emi_calculator_test.rs"]
mod emi_calculator_test;

use leptos::prelude::*;

use crate::util::emi::{self, EmiBreakdown, EmiPeriod};
use crate::util::money::{format_inr, parse_amount};

/// Parse the three inputs and run the calculator.
///
/// # Errors
///
/// Returns the first user-facing parse or calculation error.
pub fn compute(
    principal: &str,
    annual_rate_pct: &str,
    tenure_months: &str,
) -> Result<(EmiBreakdown, Vec<EmiPeriod>), String> {
    let principal = parse_amount(principal)?;
    let rate: f64 = annual_rate_pct
        .trim()
        .parse()
        .map_err(|_| "Enter the annual rate in percent".to_owned())?;
    let months: u32 = tenure_months
        .trim()
        .parse()
        .map_err(|_| "Enter the tenure in months".to_owned())?;
    let breakdown = emi::breakdown(principal, rate, months)?;
    let schedule = emi::schedule(principal, rate, months)?;
    Ok((breakdown, schedule))
}

/// Modal EMI calculator.
#[component]
pub fn EmiCalculatorDialog(on_cancel: Callback<()>) -> impl IntoView {
    let principal = RwSignal::new(String::new());
    let rate = RwSignal::new(String::new());
    let tenure = RwSignal::new(String::new());
    let result = RwSignal::new(None::<(EmiBreakdown, Vec<EmiPeriod>)>);
    let error = RwSignal::new(None::<String>);

    let on_compute = move |_| {
        match compute(&principal.get(), &rate.get(), &tenure.get()) {
            Ok(outcome) => {
                error.set(None);
                result.set(Some(outcome));
            }
            Err(message) => {
                result.set(None);
                error.set(Some(message));
            }
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"EMI Calculator"</h2>
                <div class="emi-calculator__inputs">
                    <label class="dialog__label">
                        "Principal"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="e.g. 1,00,000"
                            prop:value=move || principal.get()
                            on:input=move |ev| principal.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Annual Rate %"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="e.g. 12"
                            prop:value=move || rate.get()
                            on:input=move |ev| rate.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Tenure (months)"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="e.g. 12"
                            prop:value=move || tenure.get()
                            on:input=move |ev| tenure.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <Show when=move || error.get().is_some()>
                    <p class="emi-calculator__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                {move || {
                    result.get().map(|(breakdown, schedule)| {
                        view! {
                            <div class="emi-calculator__result">
                                <div class="emi-calculator__totals">
                                    <span>"EMI: " {format_inr(breakdown.emi)}</span>
                                    <span>"Total payable: " {format_inr(breakdown.total_payable)}</span>
                                    <span>"Total interest: " {format_inr(breakdown.total_interest)}</span>
                                </div>
                                <table class="emi-calculator__schedule">
                                    <thead>
                                        <tr>
                                            <th>"Month"</th>
                                            <th>"Interest"</th>
                                            <th>"Principal"</th>
                                            <th>"Balance"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {schedule
                                            .into_iter()
                                            .map(|period| {
                                                view! {
                                                    <tr>
                                                        <td>{period.month}</td>
                                                        <td>{format_inr(period.interest)}</td>
                                                        <td>{format_inr(period.principal)}</td>
                                                        <td>{format_inr(period.closing)}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            </div>
                        }
                    })
                }}

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Close"
                    </button>
                    <button class="btn btn--primary" on:click=on_compute>
                        "Calculate"
                    </button>
                </div>
            </div>
        </div>
    }
}
