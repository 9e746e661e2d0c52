//! # client
//!
//! Leptos + WASM front-end for the GameVault Telegram Mini-App.
//!
//! The app reads Telegram's `initData` from the Mini-App host, exchanges it
//! with the GameVault backend for a user profile, and shows a welcome line
//! with the user's coin balance.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
