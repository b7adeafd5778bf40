//! Collections case DTOs.
//!
//! SYSTEM CONTEXT
//! ==============
//! A case is an overdue loan account tracked through contact and payment
//! history. The backend assigns, scores, and closes cases; the client only
//! lists them, renders one, and posts flag/location updates.

#[cfg(test)]
#[path = "case_test.rs"]
mod case_test;

use serde::{Deserialize, Serialize};

use crate::UnknownVariant;

/// One overdue loan account in the collections queue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionCase {
    /// Unique case identifier (backend-assigned string).
    pub id: String,
    /// Loan account number as printed on statements.
    pub loan_account_number: String,
    /// Borrower identity for list rendering.
    pub customer: CustomerSummary,
    /// Principal still outstanding on the loan.
    pub principal_outstanding: f64,
    /// Total amount currently overdue (missed EMIs + charges).
    pub amount_overdue: f64,
    /// Days past due of the oldest unpaid installment.
    pub days_past_due: i64,
    /// Contracted EMI amount.
    pub emi_amount: f64,
    /// Collections lifecycle status.
    pub status: CaseStatus,
    /// Branch that originated the loan.
    pub branch: String,
    /// Collections officer the case is assigned to, if any.
    pub assigned_to: Option<String>,
    /// Escalation flag raised on this case, if any.
    pub flag: Option<CaseFlag>,
    /// Last field-captured borrower location, if any.
    pub location: Option<CaseLocation>,
    /// ISO 8601 date of the most recent payment, if any.
    pub last_payment_date: Option<String>,
}

/// Borrower identity embedded in case rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    /// Customer identifier (backend-assigned string).
    pub id: String,
    /// Full name.
    pub name: String,
    /// Primary contact number.
    pub phone: String,
}

/// Collections lifecycle status of a case.
///
/// Carries an `Unknown` fallback so one unrecognized status string from the
/// backend cannot fail deserialization of a whole case list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// Freshly overdue, no contact attempted yet.
    #[default]
    Pending,
    /// Officer is actively following up.
    InFollowUp,
    /// Borrower committed to a payment date.
    PromiseToPay,
    /// Escalated to legal recovery.
    Legal,
    /// Dues cleared or written off.
    Closed,
    /// Any status string this client does not recognize.
    #[serde(other)]
    Unknown,
}

impl CaseStatus {
    /// Wire string for this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InFollowUp => "in_follow_up",
            Self::PromiseToPay => "promise_to_pay",
            Self::Legal => "legal",
            Self::Closed => "closed",
            Self::Unknown => "unknown",
        }
    }

    /// Human-facing label for tabs and badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InFollowUp => "In Follow-up",
            Self::PromiseToPay => "Promise to Pay",
            Self::Legal => "Legal",
            Self::Closed => "Closed",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether the case has left the active collections queue.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// All statuses the UI offers as filter tabs, in display order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::InFollowUp,
        Self::PromiseToPay,
        Self::Legal,
        Self::Closed,
    ];
}

impl std::str::FromStr for CaseStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_follow_up" => Ok(Self::InFollowUp),
            "promise_to_pay" => Ok(Self::PromiseToPay),
            "legal" => Ok(Self::Legal),
            "closed" => Ok(Self::Closed),
            _ => Err(UnknownVariant {
                kind: "case status",
                value: s.to_owned(),
            }),
        }
    }
}

/// Escalation flag raised on a case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseFlag {
    /// Free-text reason entered by the officer.
    pub reason: String,
    /// Officer who raised the flag.
    pub flagged_by: String,
    /// ISO 8601 timestamp of the flag.
    pub flagged_at: String,
}

/// Field-captured borrower location with reverse-geocoded address text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseLocation {
    /// GPS fix.
    pub point: GeoPoint,
    /// Reverse-geocoded display address, if the lookup succeeded.
    pub address_text: Option<String>,
    /// ISO 8601 timestamp of the capture.
    pub captured_at: String,
}

/// A WGS84 coordinate pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}
