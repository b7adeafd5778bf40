//! Shared client state provided as Leptos context signals.
//!
//! ARCHITECTURE
//! ============
//! Each module is one store: a plain struct with `Default` wrapped in an
//! `RwSignal` by `app::App`. Pages and components mutate through
//! `signal.update(...)`; there is no dispatcher layer between them and the
//! stores.

pub mod case_detail;
pub mod cases;
pub mod ui;
pub mod wizard;
