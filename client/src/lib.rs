//! # aeon-client
//!
//! Leptos + WASM front-end for the Aeon console: a full-screen camera feed,
//! a status gem, a clickable sphere, and a single transient notice line fed
//! by a realtime WebSocket link to the server.
//!
//! Browser-only behavior (sockets, camera, timers) is gated behind the
//! `hydrate` feature. The connection state machine itself is plain Rust and
//! is exercised natively by the unit tests.

pub mod app;
pub mod boot;
pub mod components;
pub mod media;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
