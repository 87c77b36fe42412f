//! # client
//!
//! Leptos + WASM frontend for the authdesk sign-in flows: login,
//! registration, password reset and the signed-in dashboard.
//!
//! Session handling is split into an HTTP wrapper (`net::http`) that attaches
//! the bearer token and reacts to 401s, an injectable session store
//! (`state::auth`), and a guarded route table (`router`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
