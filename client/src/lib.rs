//! # client
//!
//! Leptos frontend for the Ventureboard campaign platform, rendered on the
//! server and hydrated in the browser.
//!
//! This crate contains pages, components, application state, and the REST
//! helpers that reach the server's campaign API. Campaign data, payment input
//! formatting, and `ApiError` come from the shared `ventureboard` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating ventureboard client");
    leptos::mount::hydrate_body(app::App);
}
