//! # venti-client
//!
//! Leptos + WASM frontend for the Venti student club platform. A
//! single-page client over the platform's REST API and websocket chat
//! rooms: JWT session handling with transparent refresh, clubs, events,
//! and realtime chat.
//!
//! This crate contains pages, components, application state, the REST
//! gateway with its refresh/replay flow, and the websocket chat client.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: set up logging and mount the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
