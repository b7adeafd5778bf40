//! REST API helpers for the external business backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against same-origin
//! `/api/...` paths (deployments proxy those to the backend).
//! Server-side (SSR): stubs returning error strings since these calls are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every function returns `Result<_, String>` with a user-facing message;
//! callers surface failures as toasts. There is no retry or timeout layer —
//! a failed call fails once, visibly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Address, CaseListResponse, CaseLocation, CollectionCase, CollectionQuery, Customer, FollowUp,
    KycDocument, LoanApplicationDraft, Payment, RecordFollowUpRequest, RecordPaymentRequest,
    SubmitResponse,
};
#[cfg(any(test, feature = "hydrate"))]
use super::types::DocumentOwner;
#[cfg(feature = "hydrate")]
use super::types::{Ack, AddCustomerAddressRequest, FlagCaseRequest, UpdateCaseLocationRequest};

/// Percent-encode one query-string value (minimal reserved set).
#[cfg(any(test, feature = "hydrate"))]
fn encode_query_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(any(test, feature = "hydrate"))]
fn collection_endpoint(query: &CollectionQuery) -> String {
    let mut url = format!("/api/collection?page={}", query.page);
    if let Some(status) = query.status {
        url.push_str("&status=");
        url.push_str(status.as_str());
    }
    if !query.search.is_empty() {
        url.push_str("&search=");
        url.push_str(&encode_query_component(&query.search));
    }
    url
}

#[cfg(any(test, feature = "hydrate"))]
fn case_endpoint(case_id: &str) -> String {
    format!("/api/collection/{case_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn case_payments_endpoint(case_id: &str) -> String {
    format!("/api/collection/{case_id}/payments")
}

#[cfg(any(test, feature = "hydrate"))]
fn case_followups_endpoint(case_id: &str) -> String {
    format!("/api/collection/{case_id}/followups")
}

#[cfg(any(test, feature = "hydrate"))]
fn case_flag_endpoint(case_id: &str) -> String {
    format!("/api/collection/{case_id}/flag")
}

#[cfg(any(test, feature = "hydrate"))]
fn case_location_endpoint(case_id: &str) -> String {
    format!("/api/collection/{case_id}/location")
}

#[cfg(any(test, feature = "hydrate"))]
fn customer_endpoint(customer_id: &str) -> String {
    format!("/api/customers/{customer_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn customer_addresses_endpoint(customer_id: &str) -> String {
    format!("/api/customers/{customer_id}/addresses")
}

#[cfg(any(test, feature = "hydrate"))]
const APPLICATIONS_ENDPOINT: &str = "/api/applications";

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, what: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    url: &str,
    body: &B,
    what: &str,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_acked<B: serde::Serialize>(url: &str, body: &B, what: &str) -> Result<(), String> {
    let ack: Ack = post_json(url, body, what).await?;
    if !ack.ok {
        return Err(format!("{what} was rejected"));
    }
    Ok(())
}

/// Fetch the collections case list for the current filters.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not OK.
pub async fn fetch_collection(query: &CollectionQuery) -> Result<CaseListResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&collection_endpoint(query), "case list fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

/// Fetch one case by ID.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not OK.
pub async fn fetch_case(case_id: &str) -> Result<CollectionCase, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&case_endpoint(case_id), "case fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = case_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch a case's payment history.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not OK.
pub async fn fetch_payments(case_id: &str) -> Result<Vec<Payment>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&case_payments_endpoint(case_id), "payment history fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = case_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch a case's follow-up history.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not OK.
pub async fn fetch_followups(case_id: &str) -> Result<Vec<FollowUp>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&case_followups_endpoint(case_id), "follow-up history fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = case_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the KYC documents attached to a case.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not OK.
pub async fn fetch_documents(case_id: &str) -> Result<Vec<KycDocument>, String> {
    #[cfg(feature = "hydrate")]
    {
        let owner = DocumentOwner::Case(case_id.to_owned());
        get_json(&owner.documents_path(), "document list fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = case_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch a borrower's customer file.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not OK.
pub async fn fetch_customer(customer_id: &str) -> Result<Customer, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&customer_endpoint(customer_id), "customer fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = customer_id;
        Err("not available on server".to_owned())
    }
}

/// Raise an escalation flag on a case.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend rejects it.
pub async fn flag_case(case_id: &str, reason: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = FlagCaseRequest {
            reason: reason.to_owned(),
        };
        post_acked(&case_flag_endpoint(case_id), &body, "case flag").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (case_id, reason);
        Err("not available on server".to_owned())
    }
}

/// Attach a captured location to a case.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend rejects it.
pub async fn update_case_location(case_id: &str, location: CaseLocation) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = UpdateCaseLocationRequest { location };
        post_acked(&case_location_endpoint(case_id), &body, "location update").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (case_id, location);
        Err("not available on server".to_owned())
    }
}

/// Add an address to a customer's file.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend rejects it.
pub async fn add_customer_address(customer_id: &str, address: Address) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = AddCustomerAddressRequest { address };
        post_acked(&customer_addresses_endpoint(customer_id), &body, "address add").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (customer_id, address);
        Err("not available on server".to_owned())
    }
}

/// Record a payment against a case; the caller refetches histories after.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend rejects it.
pub async fn record_payment(case_id: &str, request: RecordPaymentRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_acked(&case_payments_endpoint(case_id), &request, "payment record").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (case_id, request);
        Err("not available on server".to_owned())
    }
}

/// Record a follow-up against a case; the caller refetches histories after.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend rejects it.
pub async fn record_followup(case_id: &str, request: RecordFollowUpRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_acked(&case_followups_endpoint(case_id), &request, "follow-up record").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (case_id, request);
        Err("not available on server".to_owned())
    }
}

/// Submit a completed loan application draft.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not OK.
pub async fn submit_application(draft: &LoanApplicationDraft) -> Result<SubmitResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(APPLICATIONS_ENDPOINT, draft, "application submit").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}

/// Upload one KYC document as multipart form data.
///
/// Browser-only: the `File` handle comes straight from the upload input.
///
/// # Errors
///
/// Returns an error string if the form cannot be built or the upload fails.
#[cfg(feature = "hydrate")]
pub async fn upload_document(
    owner: &DocumentOwner,
    kind: super::types::DocumentKind,
    file: &web_sys::File,
) -> Result<(), String> {
    let form = web_sys::FormData::new().map_err(|_| "could not build upload form".to_owned())?;
    form.append_with_str("kind", kind.as_str())
        .map_err(|_| "could not build upload form".to_owned())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "could not build upload form".to_owned())?;

    let resp = gloo_net::http::Request::post(&owner.documents_path())
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("document upload", resp.status()));
    }
    Ok(())
}
