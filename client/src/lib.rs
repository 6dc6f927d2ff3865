//! # client
//!
//! Leptos + WASM single-page frontend for the course catalog.
//!
//! This crate contains pages, components, view state and the browser
//! bindings (`localStorage` session store, `gloo-net` transport) for the
//! platform-neutral `coursehub` core. Browser-only code is gated behind the
//! `csr` feature so the view logic still compiles and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
