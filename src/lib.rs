//! # took-client
//!
//! Leptos + WASM frontend for the anonymous team bulletin board
//! ("bamboo forest"): team registration and login, anonymous posts with
//! check/like reactions, and threaded comments.
//!
//! The crate splits into pages and components (views), a session layer
//! owning authentication state and its localStorage persistence, a thin
//! `gloo-net` REST wrapper, and pure helpers for pagination windowing
//! and timestamp formatting.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: set up panic + log forwarding to the console, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
