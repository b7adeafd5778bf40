//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure numeric
//! logic from page and component code to improve reuse and testability.

pub mod dark_mode;
pub mod dates;
pub mod emi;
pub mod geo;
pub mod irr;
pub mod money;
