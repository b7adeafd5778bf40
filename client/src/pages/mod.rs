//! Route-level pages.

pub mod apply;
pub mod case;
pub mod dashboard;
