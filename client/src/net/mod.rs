//! Networking modules for the backend API and third-party lookups.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` maps each user action to one REST call against the external
//! business backend, `geocode` wraps the Nominatim reverse-geocode lookup,
//! and `types` re-exports the shared contract DTOs.

pub mod api;
pub mod geocode;
pub mod types;
