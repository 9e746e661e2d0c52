//! Access to the Telegram Mini-App host environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Telegram injects `window.Telegram.WebApp` into the page; its `initData`
//! string is the signed identity claim the backend verifies. Login reads it
//! through the `InitDataSource` trait so tests and SSR can supply their own.

#[cfg(test)]
#[path = "telegram_test.rs"]
mod telegram_test;

/// Provider of the opaque Telegram `initData` token.
pub trait InitDataSource {
    /// Raw value exposed by the host, if any.
    fn raw_init_data(&self) -> Option<String>;

    /// The token, or `None` when the host exposes nothing usable.
    fn init_data(&self) -> Option<String> {
        normalize_init_data(self.raw_init_data())
    }
}

/// An empty `initData` is treated the same as a missing one.
pub fn normalize_init_data(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.is_empty())
}

/// Reads `window.Telegram.WebApp.initData` from the browser.
///
/// Outside the browser (SSR, native tests) there is no host object and the
/// token is always absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct TelegramWebApp;

impl InitDataSource for TelegramWebApp {
    fn raw_init_data(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            use js_sys::Reflect;
            use wasm_bindgen::JsValue;

            let window: JsValue = web_sys::window()?.into();
            // Reflect::get errors on undefined targets, so each missing link
            // in the chain ends as `None`.
            let telegram = Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
            let web_app = Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
            let init_data = Reflect::get(&web_app, &JsValue::from_str("initData")).ok()?;
            init_data.as_string()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// A fixed token, for tests and non-browser hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedInitData(pub Option<String>);

impl FixedInitData {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    pub fn absent() -> Self {
        Self(None)
    }
}

impl InitDataSource for FixedInitData {
    fn raw_init_data(&self) -> Option<String> {
        self.0.clone()
    }
}
