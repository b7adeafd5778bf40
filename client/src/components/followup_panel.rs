//! Follow-up history plus the record-follow-up form.

#[cfg(test)]
#[path = "followup_panel_test.rs"]
mod followup_panel_test;

use leptos::prelude::*;

use crate::net::types::{FollowUp, FollowUpChannel, FollowUpOutcome, RecordFollowUpRequest};
use crate::util::dates::format_date;
use crate::util::money::{format_inr, parse_amount};

/// Build the record payload from raw form inputs.
///
/// # Errors
///
/// Returns a user-facing message when remarks are blank or a promise outcome
/// is missing its amount or date.
pub fn build_followup_request(
    channel: FollowUpChannel,
    outcome: FollowUpOutcome,
    remarks: &str,
    promised_amount: &str,
    promised_date: &str,
) -> Result<RecordFollowUpRequest, String> {
    if remarks.trim().is_empty() {
        return Err("Enter remarks for the follow-up".to_owned());
    }
    let (amount, date) = if outcome.requires_promise() {
        let amount = parse_amount(promised_amount)?;
        if promised_date.trim().is_empty() {
            return Err("Enter the promised payment date".to_owned());
        }
        (Some(amount), Some(promised_date.trim().to_owned()))
    } else {
        (None, None)
    };
    Ok(RecordFollowUpRequest {
        channel,
        outcome,
        remarks: remarks.trim().to_owned(),
        promised_amount: amount,
        promised_date: date,
    })
}

fn channel_from_value(value: &str) -> FollowUpChannel {
    FollowUpChannel::ALL
        .into_iter()
        .find(|c| format!("{c:?}") == value)
        .unwrap_or_default()
}

fn outcome_from_value(value: &str) -> FollowUpOutcome {
    FollowUpOutcome::ALL
        .into_iter()
        .find(|o| format!("{o:?}") == value)
        .unwrap_or_default()
}

/// Follow-up history list plus the inline record form.
#[component]
pub fn FollowupPanel(
    /// Reactive follow-up rows.
    followups: Signal<Vec<FollowUp>>,
    /// Called with a validated record payload on submit.
    on_record: Callback<RecordFollowUpRequest>,
) -> impl IntoView {
    let channel = RwSignal::new(FollowUpChannel::Call);
    let outcome = RwSignal::new(FollowUpOutcome::NoContact);
    let remarks = RwSignal::new(String::new());
    let promised_amount = RwSignal::new(String::new());
    let promised_date = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    let submit = move |_| {
        match build_followup_request(
            channel.get(),
            outcome.get(),
            &remarks.get(),
            &promised_amount.get(),
            &promised_date.get(),
        ) {
            Ok(request) => {
                form_error.set(None);
                remarks.set(String::new());
                promised_amount.set(String::new());
                promised_date.set(String::new());
                on_record.run(request);
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    view! {
        <section class="followup-panel">
            <h3 class="followup-panel__title">"Follow-ups"</h3>

            <div class="followup-panel__form">
                <select
                    class="followup-panel__select"
                    on:change=move |ev| channel.set(channel_from_value(&event_target_value(&ev)))
                >
                    {FollowUpChannel::ALL
                        .into_iter()
                        .map(|c| view! { <option value=format!("{c:?}")>{c.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="followup-panel__select"
                    on:change=move |ev| outcome.set(outcome_from_value(&event_target_value(&ev)))
                >
                    {FollowUpOutcome::ALL
                        .into_iter()
                        .map(|o| view! { <option value=format!("{o:?}")>{o.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    class="followup-panel__input"
                    type="text"
                    placeholder="Remarks"
                    prop:value=move || remarks.get()
                    on:input=move |ev| remarks.set(event_target_value(&ev))
                />
                <Show when=move || outcome.get().requires_promise()>
                    <input
                        class="followup-panel__input"
                        type="text"
                        placeholder="Promised amount"
                        prop:value=move || promised_amount.get()
                        on:input=move |ev| promised_amount.set(event_target_value(&ev))
                    />
                    <input
                        class="followup-panel__input"
                        type="date"
                        prop:value=move || promised_date.get()
                        on:input=move |ev| promised_date.set(event_target_value(&ev))
                    />
                </Show>
                <button class="btn btn--primary" on:click=submit>
                    "Record"
                </button>
            </div>
            <Show when=move || form_error.get().is_some()>
                <p class="followup-panel__error">{move || form_error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !followups.get().is_empty()
                fallback=|| view! { <p class="followup-panel__empty">"No follow-ups yet."</p> }
            >
                <ul class="followup-panel__list">
                    {move || {
                        followups
                            .get()
                            .into_iter()
                            .map(|followup| {
                                view! {
                                    <li class="followup-panel__item">
                                        <span class="followup-panel__meta">
                                            {format_date(&followup.recorded_at)}
                                            " · "
                                            {followup.channel.label()}
                                            " · "
                                            {followup.outcome.label()}
                                        </span>
                                        <span class="followup-panel__remarks">{followup.remarks.clone()}</span>
                                        {followup.promised_amount.map(|amount| {
                                            view! {
                                                <span class="followup-panel__promise">
                                                    "Promised "
                                                    {format_inr(amount)}
                                                    {followup
                                                        .promised_date
                                                        .as_deref()
                                                        .map(|d| format!(" by {}", format_date(d)))
                                                        .unwrap_or_default()}
                                                </span>
                                            }
                                        })}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </section>
    }
}
