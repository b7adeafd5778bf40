//! Multi-step loan application state machine.
//!
//! ARCHITECTURE
//! ============
//! Seven ordered steps, each backed by its own form struct holding raw input
//! strings. `advance` gates forward movement on the current step's validator;
//! `back` and direct tab jumps never lose entered data. A step can only be
//! entered once every earlier step validates, so Review always summarizes a
//! consistent draft.
//!
//! The loan step previews the EMI (`util::emi`) and each liability row
//! derives its implied annual rate from EMI + outstanding + tenure
//! (`util::irr`).

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use models::validate::{
    require, validate_amount, validate_email, validate_pan, validate_phone, validate_pincode,
    validate_tenure_months,
};
use models::{
    Address, AddressKind, Applicant, Associate, AssociateRole, FieldErrors, Liability,
    LoanApplicationDraft, LoanTerms, StagedDocument,
};

use crate::util::irr;
use crate::util::money::parse_amount;

/// Loan amount bounds offered by the product.
pub const LOAN_AMOUNT_MIN: f64 = 10_000.0;
pub const LOAN_AMOUNT_MAX: f64 = 5_000_000.0;
/// Ceiling for a plausible quoted annual rate.
pub const LOAN_RATE_MAX_PCT: f64 = 60.0;

/// The wizard's ordered steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    Applicant,
    Address,
    Loan,
    Liabilities,
    Associates,
    Documents,
    Review,
}

impl WizardStep {
    /// All steps in order.
    pub const ALL: [Self; 7] = [
        Self::Applicant,
        Self::Address,
        Self::Loan,
        Self::Liabilities,
        Self::Associates,
        Self::Documents,
        Self::Review,
    ];

    /// Zero-based position in the rail.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Rail label.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Applicant => "Applicant",
            Self::Address => "Address",
            Self::Loan => "Loan",
            Self::Liabilities => "Liabilities",
            Self::Associates => "Co-applicants",
            Self::Documents => "Documents",
            Self::Review => "Review",
        }
    }

    /// The following step, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The preceding step, if any.
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Progress through the rail as a whole percentage, 100 at Review.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn progress_pct(self) -> u32 {
        (self.index() * 100 / (Self::ALL.len() - 1)) as u32
    }
}

/// Applicant identity step inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicantForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub pan: String,
    pub date_of_birth: String,
}

/// Address step inputs; one address captured at application time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressForm {
    pub kind: AddressKind,
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

/// Loan terms step inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoanForm {
    pub amount: String,
    pub tenure_months: String,
    pub annual_rate_pct: String,
    pub purpose: String,
}

/// One declared existing obligation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LiabilityRow {
    pub lender: String,
    pub outstanding: String,
    pub monthly_emi: String,
    pub remaining_tenure_months: String,
    /// Annual rate derived from the three numeric fields, once they parse.
    pub derived_rate_pct: Option<f64>,
}

/// One co-applicant/guarantor/reference entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssociateEntry {
    pub name: String,
    pub role: AssociateRole,
    pub phone: String,
    pub relation: String,
}

/// Submission lifecycle of the wizard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Editing,
    Submitting,
    Submitted {
        application_id: String,
    },
    Failed {
        message: String,
    },
}

/// Everything the application wizard holds between steps.
#[derive(Clone, Debug, Default)]
pub struct WizardState {
    pub step: WizardStep,
    /// Furthest step the user has validated into; rail tabs up to here are
    /// clickable.
    pub furthest: WizardStep,
    pub applicant: ApplicantForm,
    pub address: AddressForm,
    pub loan: LoanForm,
    pub liabilities: Vec<LiabilityRow>,
    pub associates: Vec<AssociateEntry>,
    pub documents: Vec<StagedDocument>,
    /// Validation failures for the step the user last tried to leave.
    pub errors: FieldErrors,
    pub submit: SubmitStatus,
}

impl WizardState {
    /// Validate one step against current inputs.
    #[must_use]
    pub fn validate_step(&self, step: WizardStep) -> FieldErrors {
        let mut errors = FieldErrors::new();
        match step {
            WizardStep::Applicant => self.validate_applicant(&mut errors),
            WizardStep::Address => self.validate_address(&mut errors),
            WizardStep::Loan => self.validate_loan(&mut errors),
            WizardStep::Liabilities => self.validate_liabilities(&mut errors),
            WizardStep::Associates => self.validate_associates(&mut errors),
            // Documents are optional at draft time; Review re-runs the rest.
            WizardStep::Documents => {}
            WizardStep::Review => {
                for earlier in WizardStep::ALL {
                    if earlier != WizardStep::Review {
                        self.merge(&mut errors, earlier);
                    }
                }
            }
        }
        errors
    }

    fn merge(&self, into: &mut FieldErrors, step: WizardStep) {
        let step_errors = self.validate_step(step);
        if !step_errors.is_empty() {
            into.insert(
                step.title(),
                format!("{} step has {} unresolved field(s)", step.title(), step_errors.len()),
            );
        }
    }

    fn validate_applicant(&self, errors: &mut FieldErrors) {
        errors.check("name", require("Name", &self.applicant.name));
        errors.check("phone", validate_phone(&self.applicant.phone));
        if !self.applicant.email.trim().is_empty() {
            errors.check("email", validate_email(&self.applicant.email));
        }
        errors.check("pan", validate_pan(&self.applicant.pan));
        errors.check("date_of_birth", require("Date of birth", &self.applicant.date_of_birth));
    }

    fn validate_address(&self, errors: &mut FieldErrors) {
        errors.check("line1", require("Address line 1", &self.address.line1));
        errors.check("city", require("City", &self.address.city));
        errors.check("state", require("State", &self.address.state));
        errors.check("pincode", validate_pincode(&self.address.pincode));
    }

    fn validate_loan(&self, errors: &mut FieldErrors) {
        match parse_amount(&self.loan.amount) {
            Ok(amount) => {
                errors.check("amount", validate_amount(amount, LOAN_AMOUNT_MIN, LOAN_AMOUNT_MAX));
            }
            Err(message) => errors.insert("amount", message),
        }
        match self.loan.tenure_months.trim().parse::<u32>() {
            Ok(months) => errors.check("tenure_months", validate_tenure_months(months)),
            Err(_) => errors.insert("tenure_months", "Enter tenure in months".to_owned()),
        }
        match self.loan.annual_rate_pct.trim().parse::<f64>() {
            Ok(rate) if rate.is_finite() && (0.0..=LOAN_RATE_MAX_PCT).contains(&rate) => {}
            _ => errors.insert(
                "annual_rate_pct",
                format!("Rate must be between 0 and {LOAN_RATE_MAX_PCT:.0}%"),
            ),
        }
        errors.check("purpose", require("Purpose", &self.loan.purpose));
    }

    fn validate_liabilities(&self, errors: &mut FieldErrors) {
        for (i, row) in self.liabilities.iter().enumerate() {
            errors.check(&format!("liability.{i}.lender"), require("Lender", &row.lender));
            if parse_amount(&row.outstanding).is_err() {
                errors.insert(&format!("liability.{i}.outstanding"), "Enter the outstanding amount".to_owned());
            }
            if parse_amount(&row.monthly_emi).is_err() {
                errors.insert(&format!("liability.{i}.monthly_emi"), "Enter the monthly EMI".to_owned());
            }
            match row.remaining_tenure_months.trim().parse::<u32>() {
                Ok(months) => errors.check(
                    &format!("liability.{i}.remaining_tenure_months"),
                    validate_tenure_months(months),
                ),
                Err(_) => errors.insert(
                    &format!("liability.{i}.remaining_tenure_months"),
                    "Enter remaining months".to_owned(),
                ),
            }
        }
    }

    fn validate_associates(&self, errors: &mut FieldErrors) {
        for (i, entry) in self.associates.iter().enumerate() {
            errors.check(&format!("associate.{i}.name"), require("Name", &entry.name));
            errors.check(&format!("associate.{i}.phone"), validate_phone(&entry.phone));
        }
    }

    /// Whether `step` may be entered: every earlier step validates.
    #[must_use]
    pub fn can_enter(&self, step: WizardStep) -> bool {
        WizardStep::ALL
            .iter()
            .take_while(|s| **s != step)
            .all(|s| self.validate_step(*s).is_empty())
    }

    /// Validate the current step and move forward on success.
    ///
    /// Returns `true` if the step changed; on failure the step's errors are
    /// recorded for inline display.
    pub fn advance(&mut self) -> bool {
        let errors = self.validate_step(self.step);
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }
        self.errors.clear();
        if let Some(next) = self.step.next() {
            self.step = next;
            if next > self.furthest {
                self.furthest = next;
            }
            return true;
        }
        false
    }

    /// Move back one step; entered data is retained.
    pub fn back(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
            self.errors.clear();
        }
    }

    /// Jump directly to an already-unlocked step.
    pub fn goto(&mut self, step: WizardStep) -> bool {
        if step <= self.furthest && self.can_enter(step) {
            self.step = step;
            self.errors.clear();
            return true;
        }
        false
    }

    /// Re-derive a liability row's implied annual rate.
    ///
    /// # Errors
    ///
    /// Returns the solver's user-facing message when the row's numbers do not
    /// admit a rate.
    pub fn derive_liability_rate(row: &LiabilityRow) -> Result<f64, String> {
        let outstanding = parse_amount(&row.outstanding)?;
        let emi = parse_amount(&row.monthly_emi)?;
        let months: u32 = row
            .remaining_tenure_months
            .trim()
            .parse()
            .map_err(|_| "Enter remaining months".to_owned())?;
        irr::annual_rate_from_emi(outstanding, emi, months)
    }

    /// Build the submit payload from validated step data.
    ///
    /// # Errors
    ///
    /// Returns the full-draft validation failures when any step is invalid.
    pub fn to_draft(&self) -> Result<LoanApplicationDraft, FieldErrors> {
        let errors = self.validate_step(WizardStep::Review);
        if !errors.is_empty() {
            return Err(errors);
        }
        let email = self.applicant.email.trim();
        Ok(LoanApplicationDraft {
            applicant: Applicant {
                name: self.applicant.name.trim().to_owned(),
                phone: self.applicant.phone.trim().to_owned(),
                email: if email.is_empty() { None } else { Some(email.to_owned()) },
                pan: self.applicant.pan.trim().to_ascii_uppercase(),
                date_of_birth: self.applicant.date_of_birth.trim().to_owned(),
            },
            addresses: vec![Address {
                kind: self.address.kind,
                line1: self.address.line1.trim().to_owned(),
                line2: non_blank(&self.address.line2),
                city: self.address.city.trim().to_owned(),
                state: self.address.state.trim().to_owned(),
                pincode: self.address.pincode.trim().to_owned(),
                geo: None,
            }],
            terms: LoanTerms {
                amount: parse_amount(&self.loan.amount).unwrap_or_default(),
                tenure_months: self.loan.tenure_months.trim().parse().unwrap_or_default(),
                annual_rate_pct: self.loan.annual_rate_pct.trim().parse().unwrap_or_default(),
                purpose: self.loan.purpose.trim().to_owned(),
            },
            liabilities: self
                .liabilities
                .iter()
                .map(|row| Liability {
                    lender: row.lender.trim().to_owned(),
                    outstanding: parse_amount(&row.outstanding).unwrap_or_default(),
                    monthly_emi: parse_amount(&row.monthly_emi).unwrap_or_default(),
                    remaining_tenure_months: row.remaining_tenure_months.trim().parse().unwrap_or_default(),
                    annual_rate_pct: row.derived_rate_pct,
                })
                .collect(),
            associates: self
                .associates
                .iter()
                .map(|entry| Associate {
                    name: entry.name.trim().to_owned(),
                    role: entry.role,
                    phone: entry.phone.trim().to_owned(),
                    relation: non_blank(&entry.relation),
                })
                .collect(),
            documents: self.documents.clone(),
            collateral: None,
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
