//! # client
//!
//! Leptos + WASM frontend for loan origination and collections. Replaces the
//! React + Redux field-officer UI with a Rust-native layer: a collections
//! dashboard, a case workspace, and a multi-step application wizard.
//!
//! This crate contains pages, components, application state, network helpers
//! for the business backend, and the EMI/IRR financial math used by the
//! wizard and calculator.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
