//! Follow-up history DTOs.

#[cfg(test)]
#[path = "followup_test.rs"]
mod followup_test;

use serde::{Deserialize, Serialize};

/// One contact attempt recorded against a case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FollowUp {
    /// Unique follow-up identifier (backend-assigned string).
    pub id: String,
    /// Case this follow-up was recorded against.
    pub case_id: String,
    /// How the borrower was contacted.
    pub channel: FollowUpChannel,
    /// What came of the contact.
    pub outcome: FollowUpOutcome,
    /// Officer's free-text notes.
    pub remarks: String,
    /// Amount the borrower promised to pay, when the outcome is a promise.
    pub promised_amount: Option<f64>,
    /// ISO 8601 date the borrower promised to pay by.
    pub promised_date: Option<String>,
    /// ISO 8601 date the officer scheduled the next action for.
    pub next_action_date: Option<String>,
    /// Officer who recorded the follow-up.
    pub recorded_by: String,
    /// ISO 8601 timestamp of the record.
    pub recorded_at: String,
}

/// Contact channel for a follow-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpChannel {
    #[default]
    Call,
    FieldVisit,
    Sms,
}

impl FollowUpChannel {
    /// Human-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Call => "Call",
            Self::FieldVisit => "Field Visit",
            Self::Sms => "SMS",
        }
    }

    /// All channels offered in the record form, in display order.
    pub const ALL: [Self; 3] = [Self::Call, Self::FieldVisit, Self::Sms];
}

/// Result of a contact attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpOutcome {
    /// Could not reach the borrower.
    #[default]
    NoContact,
    /// Spoke to the borrower, no commitment.
    Contacted,
    /// Borrower committed to an amount and date.
    PromiseToPay,
    /// Borrower disputes the dues.
    Dispute,
    /// Payment collected on the spot.
    PaymentCollected,
}

impl FollowUpOutcome {
    /// Human-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NoContact => "No Contact",
            Self::Contacted => "Contacted",
            Self::PromiseToPay => "Promise to Pay",
            Self::Dispute => "Dispute",
            Self::PaymentCollected => "Payment Collected",
        }
    }

    /// Whether this outcome requires a promised amount and date.
    #[must_use]
    pub fn requires_promise(self) -> bool {
        matches!(self, Self::PromiseToPay)
    }

    /// All outcomes offered in the record form, in display order.
    pub const ALL: [Self; 5] = [
        Self::NoContact,
        Self::Contacted,
        Self::PromiseToPay,
        Self::Dispute,
        Self::PaymentCollected,
    ];
}
