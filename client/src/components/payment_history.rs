//! Payment history table for the case detail page.

#[cfg(test)]
#[path = "payment_history_test.rs"]
mod payment_history_test;

use leptos::prelude::*;

use crate::net::types::{Payment, PaymentStatus};
use crate::util::dates::format_date;
use crate::util::money::format_inr;

/// Instrument cell: mode label plus the reference number when one exists.
#[must_use]
pub fn instrument_display(payment: &Payment) -> String {
    match payment.reference_number.as_deref() {
        Some(reference) if !reference.is_empty() => {
            format!("{} · {reference}", payment.mode.label())
        }
        _ => payment.mode.label().to_owned(),
    }
}

/// Badge class for a settlement status cell.
#[must_use]
pub fn payment_status_class(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => "badge badge--pending",
        PaymentStatus::Confirmed => "badge badge--confirmed",
        PaymentStatus::Bounced => "badge badge--bounced",
    }
}

/// Payment rows, newest first as the backend returns them.
#[component]
pub fn PaymentHistory(
    /// Reactive payment rows.
    payments: Signal<Vec<Payment>>,
) -> impl IntoView {
    view! {
        <section class="payment-history">
            <Show
                when=move || !payments.get().is_empty()
                fallback=|| view! { <p class="payment-history__empty">"No payments recorded."</p> }
            >
                <table class="payment-history__table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Amount"</th>
                            <th>"Instrument"</th>
                            <th>"Receipt"</th>
                            <th>"Received By"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            payments
                                .get()
                                .into_iter()
                                .map(|payment| {
                                    view! {
                                        <tr>
                                            <td>{format_date(&payment.paid_at)}</td>
                                            <td class="payment-history__amount">
                                                {format_inr(payment.amount)}
                                            </td>
                                            <td>{instrument_display(&payment)}</td>
                                            <td>
                                                {payment.receipt_number.clone().unwrap_or_else(|| "–".to_owned())}
                                            </td>
                                            <td>{payment.received_by.clone()}</td>
                                            <td>
                                                <span class=payment_status_class(payment.status)>
                                                    {payment.status.label()}
                                                </span>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
