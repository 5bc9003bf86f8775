//! # portfolio
//!
//! Leptos + WASM behaviour layer for a static personal-portfolio page.
//!
//! The root [`app::App`] component renders the page and wires the handlers:
//! theme toggle, scroll-spy navigation, one-shot reveal animations, the
//! contact form, the scroll-to-top button, and toast notifications.
//!
//! Browser-only code is gated behind the `csr` feature so the state machines
//! and helpers in `state` and `util` can be unit-tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
