//! Request and response payloads for the backend API.
//!
//! Each struct corresponds to one client action; the backend's response to
//! simple mutations is the [`Ack`] envelope.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use serde::{Deserialize, Serialize};

use crate::case::{CaseLocation, CaseStatus, CollectionCase};
use crate::customer::Address;
use crate::followup::{FollowUpChannel, FollowUpOutcome};
use crate::payment::PaymentMode;

/// Filter parameters for the collections list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionQuery {
    /// Free-text search over name, phone, and loan account number.
    pub search: String,
    /// Restrict to one status; `None` means all open tabs.
    pub status: Option<CaseStatus>,
    /// Zero-based page index.
    pub page: u32,
}

/// Paged collections list response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseListResponse {
    /// Cases for the requested page.
    pub items: Vec<CollectionCase>,
    /// Total matching cases across all pages.
    pub total: i64,
}

/// Raise an escalation flag on a case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagCaseRequest {
    /// Free-text reason shown on the case thereafter.
    pub reason: String,
}

/// Attach a field-captured location to a case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateCaseLocationRequest {
    /// The captured fix with reverse-geocoded text.
    pub location: CaseLocation,
}

/// Add an address to a customer's file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddCustomerAddressRequest {
    /// The new address.
    pub address: Address,
}

/// Record a payment against a case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordPaymentRequest {
    /// Amount received.
    pub amount: f64,
    /// Instrument used.
    pub mode: PaymentMode,
    /// Instrument reference, if any.
    pub reference_number: Option<String>,
}

/// Record a follow-up against a case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordFollowUpRequest {
    /// Contact channel.
    pub channel: FollowUpChannel,
    /// Contact result.
    pub outcome: FollowUpOutcome,
    /// Officer notes.
    pub remarks: String,
    /// Promised amount when the outcome is a promise to pay.
    pub promised_amount: Option<f64>,
    /// Promised ISO 8601 date when the outcome is a promise to pay.
    pub promised_date: Option<String>,
}

/// Generic mutation acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// Whether the backend accepted the mutation.
    pub ok: bool,
}

/// Response to a submitted loan application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Backend-assigned application identifier.
    pub application_id: String,
}
