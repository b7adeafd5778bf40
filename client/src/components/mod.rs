//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render tables, forms, and dialogs while reading/writing shared
//! state from Leptos context providers. Wizard step bodies live here as
//! `step_*` modules; the `/apply` page owns their sequencing.

pub mod case_table;
pub mod emi_calculator;
pub mod field;
pub mod followup_panel;
pub mod payment_history;
pub mod status_tabs;
pub mod step_address;
pub mod step_applicant;
pub mod step_associates;
pub mod step_documents;
pub mod step_liabilities;
pub mod step_loan;
pub mod step_review;
pub mod toast_host;
pub mod toolbar;
