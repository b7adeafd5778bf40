//! Case detail page: one overdue account, its histories, and field actions.
//!
//! ARCHITECTURE
//! ============
//! The page owns the fetch orchestration; `CaseDetailState` holds the data.
//! The case/customer pair and the three histories load independently so a
//! failed history fetch leaves the case header usable. Mutations (flag,
//! location, payment, follow-up, address, upload) post to the backend and
//! refetch the affected slice rather than patching state locally.

#[cfg(test)]
#[path = "case_test.rs"]
mod case_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::followup_panel::FollowupPanel;
use crate::components::payment_history::PaymentHistory;
use crate::components::step_address::{AddressInputs, build_address};
#[cfg(feature = "hydrate")]
use crate::components::toast_host;
use crate::net::types::{
    AddressKind, CollectionCase, DocumentKind, PaymentMode, RecordFollowUpRequest,
    RecordPaymentRequest,
};
use crate::state::case_detail::CaseDetailState;
#[cfg(feature = "hydrate")]
use crate::state::ui::{ToastLevel, UiState};
use crate::util::dates::format_date;
use crate::util::money::{format_inr, parse_amount};

/// "today"/"yesterday"/"n days ago" in the browser; plain date on the server
/// where there is no wall clock worth trusting for the user's timezone.
fn payment_recency(iso: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let today = String::from(js_sys::Date::new_0().to_iso_string());
        crate::util::dates::relative_label(iso, &today)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        format_date(iso)
    }
}

fn mode_from_value(value: &str) -> PaymentMode {
    PaymentMode::ALL
        .into_iter()
        .find(|m| format!("{m:?}") == value)
        .unwrap_or_default()
}

/// Assemble a payment record from the dialog's raw inputs.
///
/// Cheque and bank-transfer payments must carry an instrument reference;
/// cash and UPI may omit it.
///
/// # Errors
///
/// Returns a user-facing message for the first failing field.
fn build_payment_request(
    amount: &str,
    mode: PaymentMode,
    reference: &str,
) -> Result<RecordPaymentRequest, String> {
    let amount = parse_amount(amount)?;
    let reference = reference.trim();
    let reference_number = if reference.is_empty() {
        None
    } else {
        Some(reference.to_owned())
    };
    if reference_number.is_none()
        && matches!(mode, PaymentMode::Cheque | PaymentMode::BankTransfer)
    {
        return Err("Enter the instrument reference".to_owned());
    }
    Ok(RecordPaymentRequest {
        amount,
        mode,
        reference_number,
    })
}

/// Fetch the case and then its borrower file.
fn load_case(detail: RwSignal<CaseDetailState>, case_id: String) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_case(&case_id).await {
                Ok(case) => {
                    let customer_id = case.customer.id.clone();
                    detail.update(|d| {
                        if d.is_showing(&case_id) {
                            d.case = Some(case);
                            d.loading_case = false;
                            d.case_error = None;
                        }
                    });
                    // The customer panel degrades to the embedded summary if
                    // this fetch fails.
                    if let Ok(customer) = crate::net::api::fetch_customer(&customer_id).await {
                        detail.update(|d| {
                            if d.is_showing(&case_id) {
                                d.customer = Some(customer);
                            }
                        });
                    }
                }
                Err(message) => detail.update(|d| {
                    if d.is_showing(&case_id) {
                        d.loading_case = false;
                        d.case_error = Some(message);
                    }
                }),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (detail, case_id);
    }
}

/// Fetch payments, follow-ups, and documents; first failure wins the banner.
fn load_histories(detail: RwSignal<CaseDetailState>, case_id: String) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let payments = crate::net::api::fetch_payments(&case_id).await;
            let followups = crate::net::api::fetch_followups(&case_id).await;
            let documents = crate::net::api::fetch_documents(&case_id).await;
            detail.update(|d| {
                if !d.is_showing(&case_id) {
                    return;
                }
                d.loading_histories = false;
                d.histories_error = None;
                match payments {
                    Ok(items) => d.payments = items,
                    Err(e) => {
                        d.histories_error.get_or_insert(e);
                    }
                }
                match followups {
                    Ok(items) => d.followups = items,
                    Err(e) => {
                        d.histories_error.get_or_insert(e);
                    }
                }
                match documents {
                    Ok(items) => d.documents = items,
                    Err(e) => {
                        d.histories_error.get_or_insert(e);
                    }
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (detail, case_id);
    }
}

/// Case detail page.
#[component]
pub fn CasePage() -> impl IntoView {
    let detail = expect_context::<RwSignal<CaseDetailState>>();
    #[cfg(feature = "hydrate")]
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();

    Effect::new(move || {
        let Some(id) = params.read().get("id") else {
            return;
        };
        if detail.with_untracked(|d| d.is_showing(&id)) {
            return;
        }
        detail.update(|d| d.reset_for(id.clone()));
        load_case(detail, id.clone());
        load_histories(detail, id);
    });

    let show_flag = RwSignal::new(false);
    let show_payment = RwSignal::new(false);
    let show_address = RwSignal::new(false);

    let on_capture_location = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = detail.get_untracked().case_id else {
                return;
            };
            if detail.get_untracked().locating {
                return;
            }
            detail.update(|d| d.locating = true);
            let pending = toast_host::show_pending(ui, "Capturing location...");
            leptos::task::spawn_local(async move {
                let outcome = capture_and_attach(&id).await;
                detail.update(|d| d.locating = false);
                match outcome {
                    Ok(()) => {
                        toast_host::settle(ui, pending, ToastLevel::Success, "Location saved");
                        load_case(detail, id);
                    }
                    Err(message) => toast_host::settle(ui, pending, ToastLevel::Error, message),
                }
            });
        }
    };

    let on_record_followup = Callback::new(move |request: RecordFollowUpRequest| {
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = detail.get_untracked().case_id else {
                return;
            };
            let pending = toast_host::show_pending(ui, "Recording follow-up...");
            leptos::task::spawn_local(async move {
                match crate::net::api::record_followup(&id, request).await {
                    Ok(()) => {
                        toast_host::settle(ui, pending, ToastLevel::Success, "Follow-up recorded");
                        load_histories(detail, id);
                    }
                    Err(message) => toast_host::settle(ui, pending, ToastLevel::Error, message),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    });

    let followups = Signal::derive(move || detail.get().followups);
    let payments = Signal::derive(move || detail.get().payments);

    view! {
        <div class="case-page">
            <Show when=move || detail.get().case_error.is_some()>
                <p class="case-page__error">
                    {move || detail.get().case_error.unwrap_or_default()}
                </p>
            </Show>

            <Show when=move || detail.get().loading_case>
                <p class="case-page__loading">"Loading case..."</p>
            </Show>

            {move || {
                detail.get().case.map(|case| {
                    view! {
                        <CaseHeader
                            case=case
                            locating=Signal::derive(move || detail.get().locating)
                            on_flag=Callback::new(move |()| show_flag.set(true))
                            on_capture=Callback::new(on_capture_location)
                        />
                    }
                })
            }}

            <CustomerPanel on_add_address=Callback::new(move |()| show_address.set(true)) />

            <Show when=move || detail.get().histories_error.is_some()>
                <p class="case-page__error">
                    {move || detail.get().histories_error.unwrap_or_default()}
                </p>
            </Show>

            <section class="case-page__section">
                <header class="case-page__section-header">
                    <h2>"Payments"</h2>
                    <button class="btn btn--primary" on:click=move |_| show_payment.set(true)>
                        "Record Payment"
                    </button>
                </header>
                <PaymentHistory payments=payments />
            </section>

            <section class="case-page__section">
                <FollowupPanel followups=followups on_record=on_record_followup />
            </section>

            <DocumentsPanel />

            <Show when=move || show_flag.get()>
                <FlagCaseDialog on_cancel=Callback::new(move |()| show_flag.set(false)) />
            </Show>
            <Show when=move || show_payment.get()>
                <RecordPaymentDialog on_cancel=Callback::new(move |()| show_payment.set(false)) />
            </Show>
            <Show when=move || show_address.get()>
                <AddAddressDialog on_cancel=Callback::new(move |()| show_address.set(false)) />
            </Show>
        </div>
    }
}

/// Capture a GPS fix, best-effort reverse geocode it, and attach it.
#[cfg(feature = "hydrate")]
async fn capture_and_attach(case_id: &str) -> Result<(), String> {
    let point = crate::util::geo::current_position().await?;
    // Soft failure: the fix still saves without address text.
    let address_text = crate::net::geocode::reverse_geocode(point).await.ok();
    let location = crate::net::types::CaseLocation {
        point,
        address_text,
        captured_at: String::from(js_sys::Date::new_0().to_iso_string()),
    };
    crate::net::api::update_case_location(case_id, location).await
}

#[component]
fn CaseHeader(
    case: CollectionCase,
    locating: Signal<bool>,
    on_flag: Callback<()>,
    on_capture: Callback<()>,
) -> impl IntoView {
    let status = case.status;
    let last_payment = case
        .last_payment_date
        .as_deref()
        .map_or_else(|| "No payments yet".to_owned(), payment_recency);
    let location_line = case.location.as_ref().map(|loc| {
        let text = loc.address_text.clone().unwrap_or_else(|| {
            format!("{:.5}, {:.5}", loc.point.lat, loc.point.lon)
        });
        format!("{} ({})", text, format_date(&loc.captured_at))
    });
    let flag = case.flag.clone();

    view! {
        <header class="case-header">
            <div class="case-header__identity">
                <h1>{case.customer.name.clone()}</h1>
                <span class="case-header__account">{case.loan_account_number.clone()}</span>
                <span class=format!("badge badge--{}", status.as_str())>{status.label()}</span>
                {flag.map(|f| {
                    view! {
                        <span class="case-header__flag" title=f.reason.clone()>
                            "⚑ flagged by " {f.flagged_by}
                        </span>
                    }
                })}
            </div>
            <dl class="case-header__figures">
                <dt>"Overdue"</dt>
                <dd class="case-header__overdue">{format_inr(case.amount_overdue)}</dd>
                <dt>"Principal Outstanding"</dt>
                <dd>{format_inr(case.principal_outstanding)}</dd>
                <dt>"EMI"</dt>
                <dd>{format_inr(case.emi_amount)}</dd>
                <dt>"Days Past Due"</dt>
                <dd>{case.days_past_due}</dd>
                <dt>"Branch"</dt>
                <dd>{case.branch.clone()}</dd>
                <dt>"Last Payment"</dt>
                <dd>{last_payment}</dd>
            </dl>
            {location_line.map(|line| {
                view! { <p class="case-header__location">"Last seen: " {line}</p> }
            })}
            <div class="case-header__actions">
                <button class="btn" on:click=move |_| on_flag.run(())>
                    "Flag Case"
                </button>
                <button class="btn" disabled=move || locating.get() on:click=move |_| on_capture.run(())>
                    {move || if locating.get() { "Capturing..." } else { "Capture Location" }}
                </button>
            </div>
        </header>
    }
}

#[component]
fn CustomerPanel(on_add_address: Callback<()>) -> impl IntoView {
    let detail = expect_context::<RwSignal<CaseDetailState>>();

    view! {
        <section class="case-page__section">
            <header class="case-page__section-header">
                <h2>"Borrower"</h2>
                <button class="btn" on:click=move |_| on_add_address.run(())>
                    "Add Address"
                </button>
            </header>
            {move || {
                let d = detail.get();
                match d.customer {
                    Some(customer) => {
                        let pan = customer.pan.clone().unwrap_or_else(|| "—".to_owned());
                        view! {
                            <div class="customer-panel">
                                <p>
                                    {customer.name.clone()} " · " {customer.phone.clone()}
                                    " · PAN " {pan}
                                </p>
                                <ul class="customer-panel__addresses">
                                    {customer
                                        .addresses
                                        .iter()
                                        .map(|a| {
                                            let line = format!(
                                                "{}: {}, {}, {} {}",
                                                a.kind.label(), a.line1, a.city, a.state, a.pincode
                                            );
                                            view! { <li>{line}</li> }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        let summary = d
                            .case
                            .map(|c| format!("{} · {}", c.customer.name, c.customer.phone))
                            .unwrap_or_default();
                        view! { <p class="customer-panel__summary">{summary}</p> }.into_any()
                    }
                }
            }}
        </section>
    }
}

#[component]
fn DocumentsPanel() -> impl IntoView {
    let detail = expect_context::<RwSignal<CaseDetailState>>();
    #[cfg(feature = "hydrate")]
    let ui = expect_context::<RwSignal<UiState>>();
    let kind = RwSignal::new(DocumentKind::default());

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");
            let Some(id) = detail.get_untracked().case_id else {
                return;
            };
            detail.update(|d| d.uploading = true);
            let pending = toast_host::show_pending(ui, format!("Uploading {}...", file.name()));
            let owner = crate::net::types::DocumentOwner::Case(id.clone());
            let doc_kind = kind.get_untracked();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::upload_document(&owner, doc_kind, &file).await;
                detail.update(|d| d.uploading = false);
                match outcome {
                    Ok(()) => {
                        toast_host::settle(ui, pending, ToastLevel::Success, "Document uploaded");
                        load_histories(detail, id);
                    }
                    Err(message) => toast_host::settle(ui, pending, ToastLevel::Error, message),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <section class="case-page__section">
            <h2>"KYC Documents"</h2>
            <ul class="documents-panel__list">
                {move || {
                    detail
                        .get()
                        .documents
                        .into_iter()
                        .map(|doc| {
                            let line = format!(
                                "{} — {} ({})",
                                doc.kind.label(), doc.file_name, format_date(&doc.uploaded_at)
                            );
                            view! { <li>{line}</li> }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <div class="documents-panel__upload">
                <select
                    class="field__input"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if let Some(k) = DocumentKind::ALL.into_iter().find(|k| format!("{k:?}") == value) {
                            kind.set(k);
                        }
                    }
                >
                    {DocumentKind::ALL
                        .into_iter()
                        .map(|k| view! { <option value=format!("{k:?}")>{k.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    class="documents-panel__file"
                    type="file"
                    accept="image/*,.pdf"
                    disabled=move || detail.get().uploading
                    on:change=on_file_change
                />
            </div>
        </section>
    }
}

#[component]
fn FlagCaseDialog(on_cancel: Callback<()>) -> impl IntoView {
    let detail = expect_context::<RwSignal<CaseDetailState>>();
    #[cfg(feature = "hydrate")]
    let ui = expect_context::<RwSignal<UiState>>();
    let reason = RwSignal::new(String::new());

    let submit = move |_| {
        let text = reason.get().trim().to_owned();
        if text.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = detail.get_untracked().case_id else {
                return;
            };
            detail.update(|d| d.flagging = true);
            let pending = toast_host::show_pending(ui, "Flagging case...");
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::flag_case(&id, &text).await;
                detail.update(|d| d.flagging = false);
                match outcome {
                    Ok(()) => {
                        toast_host::settle(ui, pending, ToastLevel::Success, "Case flagged");
                        load_case(detail, id);
                    }
                    Err(message) => toast_host::settle(ui, pending, ToastLevel::Error, message),
                }
            });
            on_cancel.run(());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Flag Case"</h2>
                <label class="dialog__label">
                    "Reason"
                    <textarea
                        class="dialog__input"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || detail.get().flagging
                        on:click=submit
                    >
                        "Flag"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn RecordPaymentDialog(on_cancel: Callback<()>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let detail = expect_context::<RwSignal<CaseDetailState>>();
    #[cfg(feature = "hydrate")]
    let ui = expect_context::<RwSignal<UiState>>();
    let amount = RwSignal::new(String::new());
    let mode = RwSignal::new(PaymentMode::default());
    let reference = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |_| {
        match build_payment_request(&amount.get(), mode.get(), &reference.get()) {
            Ok(request) => {
                error.set(None);
                #[cfg(feature = "hydrate")]
                {
                    let Some(id) = detail.get_untracked().case_id else {
                        return;
                    };
                    let pending = toast_host::show_pending(ui, "Recording payment...");
                    leptos::task::spawn_local(async move {
                        match crate::net::api::record_payment(&id, request).await {
                            Ok(()) => {
                                toast_host::settle(
                                    ui,
                                    pending,
                                    ToastLevel::Success,
                                    "Payment recorded",
                                );
                                load_histories(detail, id.clone());
                                load_case(detail, id);
                            }
                            Err(message) => {
                                toast_host::settle(ui, pending, ToastLevel::Error, message);
                            }
                        }
                    });
                    on_cancel.run(());
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = request;
                }
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Record Payment"</h2>
                <label class="dialog__label">
                    "Amount"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g. 8,884.88"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Mode"
                    <select
                        class="dialog__input"
                        on:change=move |ev| mode.set(mode_from_value(&event_target_value(&ev)))
                    >
                        {PaymentMode::ALL
                            .into_iter()
                            .map(|m| view! { <option value=format!("{m:?}")>{m.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Reference (UTR / cheque no.)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || reference.get()
                        on:input=move |ev| reference.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=submit>
                        "Record"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AddAddressDialog(on_cancel: Callback<()>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let detail = expect_context::<RwSignal<CaseDetailState>>();
    #[cfg(feature = "hydrate")]
    let ui = expect_context::<RwSignal<UiState>>();
    let kind = RwSignal::new(AddressKind::default());
    let line1 = RwSignal::new(String::new());
    let line2 = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());
    let pincode = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |_| {
        match build_address(
            kind.get(),
            &line1.get(),
            &line2.get(),
            &city.get(),
            &state.get(),
            &pincode.get(),
        ) {
            Ok(address) => {
                error.set(None);
                #[cfg(feature = "hydrate")]
                {
                    let Some(customer_id) =
                        detail.get_untracked().customer.map(|c| c.id)
                    else {
                        return;
                    };
                    let Some(case_id) = detail.get_untracked().case_id else {
                        return;
                    };
                    let pending = toast_host::show_pending(ui, "Adding address...");
                    leptos::task::spawn_local(async move {
                        match crate::net::api::add_customer_address(&customer_id, address).await {
                            Ok(()) => {
                                toast_host::settle(
                                    ui,
                                    pending,
                                    ToastLevel::Success,
                                    "Address added",
                                );
                                load_case(detail, case_id);
                            }
                            Err(message) => {
                                toast_host::settle(ui, pending, ToastLevel::Error, message);
                            }
                        }
                    });
                    on_cancel.run(());
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = address;
                }
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Address"</h2>
                <AddressInputs
                    kind=kind
                    line1=line1
                    line2=line2
                    city=city
                    state=state
                    pincode=pincode
                />
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=submit>
                        "Add"
                    </button>
                </div>
            </div>
        </div>
    }
}
