use super::*;

fn filled_state() -> WizardState {
    let mut state = WizardState::default();
    state.applicant = ApplicantForm {
        name: "Ravi Kumar".to_owned(),
        phone: "9812345678".to_owned(),
        email: "ravi@example.com".to_owned(),
        pan: "abcde1234f".to_owned(),
        date_of_birth: "1989-04-12".to_owned(),
    };
    state.address = AddressForm {
        kind: AddressKind::Residence,
        line1: "12 MG Road".to_owned(),
        line2: String::new(),
        city: "Indore".to_owned(),
        state: "Madhya Pradesh".to_owned(),
        pincode: "452001".to_owned(),
    };
    state.loan = LoanForm {
        amount: "1,00,000".to_owned(),
        tenure_months: "12".to_owned(),
        annual_rate_pct: "12".to_owned(),
        purpose: "working capital".to_owned(),
    };
    state
}

// =============================================================
// Step ordering
// =============================================================

#[test]
fn steps_are_ordered_and_linked() {
    assert_eq!(WizardStep::Applicant.index(), 0);
    assert_eq!(WizardStep::Review.index(), 6);
    assert_eq!(WizardStep::Applicant.next(), Some(WizardStep::Address));
    assert_eq!(WizardStep::Review.next(), None);
    assert_eq!(WizardStep::Applicant.prev(), None);
    assert_eq!(WizardStep::Review.prev(), Some(WizardStep::Documents));
}

#[test]
fn progress_reaches_100_at_review() {
    assert_eq!(WizardStep::Applicant.progress_pct(), 0);
    assert_eq!(WizardStep::Review.progress_pct(), 100);
    assert_eq!(WizardStep::Loan.progress_pct(), 33);
}

// =============================================================
// Gating
// =============================================================

#[test]
fn advance_blocks_on_invalid_applicant() {
    let mut state = WizardState::default();
    assert!(!state.advance());
    assert_eq!(state.step, WizardStep::Applicant);
    assert!(state.errors.get("name").is_some());
    assert!(state.errors.get("phone").is_some());
    assert!(state.errors.get("pan").is_some());
}

#[test]
fn advance_moves_through_validated_steps() {
    let mut state = filled_state();
    assert!(state.advance());
    assert_eq!(state.step, WizardStep::Address);
    assert!(state.advance());
    assert_eq!(state.step, WizardStep::Loan);
    assert!(state.advance());
    assert_eq!(state.step, WizardStep::Liabilities);
    assert_eq!(state.furthest, WizardStep::Liabilities);
    assert!(state.errors.is_empty());
}

#[test]
fn back_retains_entered_data() {
    let mut state = filled_state();
    assert!(state.advance());
    state.back();
    assert_eq!(state.step, WizardStep::Applicant);
    assert_eq!(state.applicant.name, "Ravi Kumar");
}

#[test]
fn goto_only_unlocks_visited_and_valid_steps() {
    let mut state = filled_state();
    assert!(state.advance());
    assert!(state.advance());
    // Loan is the furthest validated step.
    assert!(state.goto(WizardStep::Applicant));
    assert!(!state.goto(WizardStep::Documents));
    assert_eq!(state.step, WizardStep::Applicant);
}

#[test]
fn breaking_an_earlier_step_blocks_reentry_forward() {
    let mut state = filled_state();
    assert!(state.advance());
    assert!(state.advance());
    state.back();
    state.back();
    state.applicant.phone = "123".to_owned();
    assert!(!state.can_enter(WizardStep::Loan));
    assert!(!state.goto(WizardStep::Loan));
}

#[test]
fn optional_email_is_validated_only_when_present() {
    let mut state = filled_state();
    state.applicant.email = String::new();
    assert!(state.validate_step(WizardStep::Applicant).is_empty());
    state.applicant.email = "not-an-email".to_owned();
    assert!(state.validate_step(WizardStep::Applicant).get("email").is_some());
}

// =============================================================
// Liabilities and associates
// =============================================================

#[test]
fn liability_rows_validate_field_by_field() {
    let mut state = filled_state();
    state.liabilities.push(LiabilityRow {
        lender: String::new(),
        outstanding: "50,000".to_owned(),
        monthly_emi: "abc".to_owned(),
        remaining_tenure_months: "12".to_owned(),
        derived_rate_pct: None,
    });
    let errors = state.validate_step(WizardStep::Liabilities);
    assert!(errors.get("liability.0.lender").is_some());
    assert!(errors.get("liability.0.monthly_emi").is_some());
    assert!(errors.get("liability.0.outstanding").is_none());
}

#[test]
fn derive_liability_rate_matches_solver() {
    let row = LiabilityRow {
        lender: "HDFC".to_owned(),
        outstanding: "1,00,000".to_owned(),
        monthly_emi: "8884.88".to_owned(),
        remaining_tenure_months: "12".to_owned(),
        derived_rate_pct: None,
    };
    let rate = WizardState::derive_liability_rate(&row).unwrap();
    assert!((rate - 12.0).abs() < 0.05, "got {rate}");
}

#[test]
fn derive_liability_rate_surfaces_solver_errors() {
    let row = LiabilityRow {
        lender: "HDFC".to_owned(),
        outstanding: "1,00,000".to_owned(),
        monthly_emi: "100".to_owned(),
        remaining_tenure_months: "12".to_owned(),
        derived_rate_pct: None,
    };
    assert!(WizardState::derive_liability_rate(&row).is_err());
}

#[test]
fn associates_require_name_and_valid_phone() {
    let mut state = filled_state();
    state.associates.push(AssociateEntry {
        name: "Sita".to_owned(),
        role: AssociateRole::Guarantor,
        phone: "12345".to_owned(),
        relation: String::new(),
    });
    let errors = state.validate_step(WizardStep::Associates);
    assert!(errors.get("associate.0.phone").is_some());
    assert!(errors.get("associate.0.name").is_none());
}

// =============================================================
// Draft assembly
// =============================================================

#[test]
fn to_draft_builds_payload_from_step_data() {
    let mut state = filled_state();
    state.liabilities.push(LiabilityRow {
        lender: "HDFC".to_owned(),
        outstanding: "50,000".to_owned(),
        monthly_emi: "4,500".to_owned(),
        remaining_tenure_months: "12".to_owned(),
        derived_rate_pct: Some(14.2),
    });
    state.documents.push(StagedDocument {
        kind: "pan".to_owned(),
        file_name: "pan.jpg".to_owned(),
    });
    let draft = state.to_draft().unwrap();
    assert_eq!(draft.applicant.pan, "ABCDE1234F");
    assert_eq!(draft.applicant.email.as_deref(), Some("ravi@example.com"));
    assert_eq!(draft.terms.amount, 100_000.0);
    assert_eq!(draft.terms.tenure_months, 12);
    assert_eq!(draft.addresses.len(), 1);
    assert_eq!(draft.addresses[0].line2, None);
    assert_eq!(draft.liabilities[0].outstanding, 50_000.0);
    assert_eq!(draft.liabilities[0].annual_rate_pct, Some(14.2));
    assert_eq!(draft.documents.len(), 1);
}

#[test]
fn to_draft_rejects_invalid_state_with_step_summary() {
    let mut state = filled_state();
    state.loan.amount = "99".to_owned();
    let errors = state.to_draft().unwrap_err();
    assert!(errors.get("Loan").is_some());
}

#[test]
fn submit_status_defaults_to_editing() {
    assert_eq!(SubmitStatus::default(), SubmitStatus::Editing);
}
