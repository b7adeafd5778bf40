//! Case detail state: one case plus its histories and in-flight actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The case page fetches four backend collections (case, payments,
//! follow-ups, documents) independently; each section carries its own
//! loading/error pair so one failed fetch degrades one panel, not the page.

#[cfg(test)]
#[path = "case_detail_test.rs"]
mod case_detail_test;

use models::{CollectionCase, Customer, FollowUp, KycDocument, Payment};

/// State behind the case detail page.
#[derive(Clone, Debug, Default)]
pub struct CaseDetailState {
    /// Route case ID currently shown; `None` before the first load.
    pub case_id: Option<String>,
    /// The case itself, once fetched.
    pub case: Option<CollectionCase>,
    /// Borrower file, once fetched.
    pub customer: Option<Customer>,
    /// Payment history, newest first as the backend returns it.
    pub payments: Vec<Payment>,
    /// Follow-up history, newest first as the backend returns it.
    pub followups: Vec<FollowUp>,
    /// Uploaded KYC documents.
    pub documents: Vec<KycDocument>,
    /// True while the case fetch is in flight.
    pub loading_case: bool,
    /// True while the histories fetch is in flight.
    pub loading_histories: bool,
    /// Case fetch failure, if any.
    pub case_error: Option<String>,
    /// Histories fetch failure, if any.
    pub histories_error: Option<String>,
    /// True while a flag request is in flight.
    pub flagging: bool,
    /// True while a location capture + update is in flight.
    pub locating: bool,
    /// True while a document upload is in flight.
    pub uploading: bool,
}

impl CaseDetailState {
    /// Reset for a route change to a different case.
    pub fn reset_for(&mut self, case_id: String) {
        *self = Self {
            case_id: Some(case_id),
            loading_case: true,
            loading_histories: true,
            ..Self::default()
        };
    }

    /// Whether `case_id` matches the case currently shown.
    #[must_use]
    pub fn is_showing(&self, case_id: &str) -> bool {
        self.case_id.as_deref() == Some(case_id)
    }
}
