//! # notepad-client
//!
//! Leptos + WASM frontend for the notes application: note list, create form,
//! note detail, and the light/dark/system theme toggle.
//!
//! Notes are stored by an external backend reached over REST (`net::api`).
//! The theme controller (`state::theme`) is pure state; `util::theme` binds it
//! to `localStorage`, `matchMedia`, and the `<html>` class list.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
