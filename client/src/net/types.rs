//! Contract types used by the network layer.
//!
//! The DTOs live in the shared `models` crate; this module re-exports them
//! plus the few client-only shapes the API layer needs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

pub use models::{
    Ack, AddCustomerAddressRequest, Address, AddressKind, AssociateRole, CaseFlag,
    CaseListResponse, CaseLocation, CaseStatus, CollectionCase, CollectionQuery, Customer,
    DocumentKind, FlagCaseRequest, FollowUp, FollowUpChannel, FollowUpOutcome, GeoPoint,
    KycDocument, LoanApplicationDraft, Payment, PaymentMode, PaymentStatus,
    RecordFollowUpRequest, RecordPaymentRequest, StagedDocument, SubmitResponse,
    UpdateCaseLocationRequest,
};

/// What a KYC document upload is attached to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentOwner {
    /// A collections case, by case ID.
    Case(String),
    /// An in-flight loan application, by application ID.
    Application(String),
}

impl DocumentOwner {
    /// Backend path for this owner's document collection.
    #[must_use]
    pub fn documents_path(&self) -> String {
        match self {
            Self::Case(id) => format!("/api/collection/{id}/documents"),
            Self::Application(id) => format!("/api/applications/{id}/documents"),
        }
    }
}
