//! Shared backend-contract types for the loan origination and collections UI.
//!
//! DESIGN
//! ======
//! The backend owns every persisted entity; these types are the client-side
//! rendering of its JSON shapes plus the request payloads the client sends.
//! Serde stays tolerant where list rendering must survive unknown values
//! (case status) and strict everywhere else, since the backend owns the
//! vocabulary.

pub mod application;
pub mod case;
pub mod customer;
pub mod followup;
pub mod payment;
pub mod requests;
pub mod validate;

pub use application::{Applicant, Collateral, Liability, LoanApplicationDraft, LoanTerms, StagedDocument};
pub use case::{CaseFlag, CaseLocation, CaseStatus, CollectionCase, CustomerSummary, GeoPoint};
pub use customer::{Address, AddressKind, Associate, AssociateRole, Customer, DocumentKind, KycDocument};
pub use followup::{FollowUp, FollowUpChannel, FollowUpOutcome};
pub use payment::{Payment, PaymentMode, PaymentStatus};
pub use requests::{
    Ack, AddCustomerAddressRequest, CaseListResponse, CollectionQuery, FlagCaseRequest,
    RecordFollowUpRequest, RecordPaymentRequest, SubmitResponse, UpdateCaseLocationRequest,
};
pub use validate::FieldErrors;

/// Error returned when a backend enum string does not match a known variant.
#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    /// Which enum was being parsed (e.g. `"payment mode"`).
    pub kind: &'static str,
    /// The offending string as received.
    pub value: String,
}
