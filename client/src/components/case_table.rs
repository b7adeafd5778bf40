//! Collections case table for the dashboard.

#[cfg(test)]
#[path = "case_table_test.rs"]
mod case_table_test;

use leptos::prelude::*;

use crate::net::types::{CaseStatus, CollectionCase};
use crate::util::dates::format_date;
use crate::util::money::format_inr;

/// Route to a case's detail page.
#[must_use]
pub fn case_href(case_id: &str) -> String {
    format!("/case/{case_id}")
}

/// Severity bucket for a days-past-due cell.
#[must_use]
pub fn dpd_severity(days_past_due: i64) -> &'static str {
    match days_past_due {
        i64::MIN..=30 => "dpd--early",
        31..=90 => "dpd--warn",
        _ => "dpd--critical",
    }
}

/// Badge class for a status cell.
#[must_use]
pub fn status_badge_class(status: CaseStatus) -> String {
    format!("badge badge--{}", status.as_str())
}

/// Case list table; rows link to the case detail page.
#[component]
pub fn CaseTable(
    /// Reactive rows for the current page.
    items: Signal<Vec<CollectionCase>>,
) -> impl IntoView {
    view! {
        <table class="case-table">
            <thead>
                <tr>
                    <th>"Account"</th>
                    <th>"Customer"</th>
                    <th>"Overdue"</th>
                    <th>"Outstanding"</th>
                    <th>"DPD"</th>
                    <th>"Status"</th>
                    <th>"Branch"</th>
                    <th>"Last Payment"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|case| {
                            let href = case_href(&case.id);
                            let flagged = case.flag.is_some();
                            view! {
                                <tr class="case-table__row" class:case-table__row--flagged=flagged>
                                    <td>
                                        <a href=href class="case-table__account">
                                            {case.loan_account_number.clone()}
                                        </a>
                                        <Show when=move || flagged>
                                            <span class="case-table__flag" title="Flagged">"⚑"</span>
                                        </Show>
                                    </td>
                                    <td>
                                        <div>{case.customer.name.clone()}</div>
                                        <div class="case-table__phone">{case.customer.phone.clone()}</div>
                                    </td>
                                    <td class="case-table__amount">{format_inr(case.amount_overdue)}</td>
                                    <td class="case-table__amount">{format_inr(case.principal_outstanding)}</td>
                                    <td class=format!("case-table__dpd {}", dpd_severity(case.days_past_due))>
                                        {case.days_past_due}
                                    </td>
                                    <td>
                                        <span class=status_badge_class(case.status)>
                                            {case.status.label()}
                                        </span>
                                    </td>
                                    <td>{case.branch.clone()}</td>
                                    <td>
                                        {case
                                            .last_payment_date
                                            .as_deref()
                                            .map_or_else(|| "–".to_owned(), format_date)}
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}
