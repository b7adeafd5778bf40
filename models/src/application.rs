//! Loan application draft DTOs.
//!
//! DESIGN
//! ======
//! The application wizard assembles one [`LoanApplicationDraft`] from its step
//! forms and posts it whole; the backend owns scoring, sanction, and any
//! server-side re-validation.

#[cfg(test)]
#[path = "application_test.rs"]
mod application_test;

use serde::{Deserialize, Serialize};

use crate::customer::{Address, Associate};

/// Primary applicant identity captured in the wizard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    /// Full name.
    pub name: String,
    /// Contact number.
    pub phone: String,
    /// Email, if given.
    pub email: Option<String>,
    /// PAN (income-tax ID).
    pub pan: String,
    /// ISO 8601 date of birth.
    pub date_of_birth: String,
}

/// Requested loan terms.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Principal requested.
    pub amount: f64,
    /// Tenure in months.
    pub tenure_months: u32,
    /// Quoted annual interest rate in percent.
    pub annual_rate_pct: f64,
    /// Stated purpose of the loan.
    pub purpose: String,
}

/// An existing obligation declared by the applicant.
///
/// The applicant knows the EMI and remaining tenure, rarely the rate; the
/// wizard derives `annual_rate_pct` client-side from the other three fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Liability {
    /// Lender name.
    pub lender: String,
    /// Outstanding principal.
    pub outstanding: f64,
    /// Monthly EMI being paid.
    pub monthly_emi: f64,
    /// Months left on the obligation.
    pub remaining_tenure_months: u32,
    /// Annual rate in percent implied by the three fields above, if derivable.
    pub annual_rate_pct: Option<f64>,
}

/// Security offered against the loan.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Collateral {
    /// Asset category (free text, e.g. "vehicle", "property").
    pub kind: String,
    /// Description of the asset.
    pub description: String,
    /// Applicant-estimated value.
    pub estimated_value: f64,
}

/// Metadata for a document staged during the wizard; the binary is uploaded
/// separately before submit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StagedDocument {
    /// Wire string of the document kind (see `DocumentKind::as_str`).
    pub kind: String,
    /// Original file name.
    pub file_name: String,
}

/// The complete application payload posted on wizard submit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanApplicationDraft {
    /// Primary applicant.
    pub applicant: Applicant,
    /// Addresses captured in the address step.
    pub addresses: Vec<Address>,
    /// Requested terms.
    pub terms: LoanTerms,
    /// Declared existing obligations.
    pub liabilities: Vec<Liability>,
    /// Co-applicants, guarantors, and references.
    pub associates: Vec<Associate>,
    /// Documents staged for this application.
    pub documents: Vec<StagedDocument>,
    /// Offered security, if any.
    pub collateral: Option<Collateral>,
}
