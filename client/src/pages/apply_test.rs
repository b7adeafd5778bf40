use super::*;

#[test]
fn rail_marks_active_open_and_locked_tabs() {
    let class = rail_class(WizardStep::Loan, WizardStep::Loan, true);
    assert!(class.contains("wizard-rail__tab--active"));

    let class = rail_class(WizardStep::Applicant, WizardStep::Loan, true);
    assert!(class.contains("wizard-rail__tab--open"));
    assert!(!class.contains("--active"));

    let class = rail_class(WizardStep::Review, WizardStep::Applicant, false);
    assert!(class.contains("wizard-rail__tab--locked"));
}
