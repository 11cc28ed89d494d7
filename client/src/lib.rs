//! # client
//!
//! Leptos + WASM frontend for the NYV Care clinic site.
//!
//! Holds the localization tables, static clinic content, client state
//! models, the assistant API helpers, and the page components. The `server`
//! crate links this with the `ssr` feature for rendering and to share the
//! assistant wire types.

pub mod app;
pub mod components;
pub mod content;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
