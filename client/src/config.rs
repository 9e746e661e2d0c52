//! Client configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Mini-App talks to a single backend host. Its base URL is fixed per
//! build (`GAMEVAULT_API_BASE` at compile time) and handed to components via
//! Leptos context, so pages never read globals directly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend host used when no build-time override is set.
pub const DEFAULT_API_BASE: &str = "https://gamevault-backend-2adm.onrender.com";

/// Path of the Telegram login exchange on the backend.
pub const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: &str) -> Self {
        Self { api_base: normalize_base(api_base) }
    }

    /// Build config from `GAMEVAULT_API_BASE` as seen by the compiler.
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("GAMEVAULT_API_BASE"))
    }

    fn from_override(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|v| !v.is_empty()) {
            Some(base) => Self::new(base),
            None => Self::new(DEFAULT_API_BASE),
        }
    }

    /// Absolute URL of the login endpoint.
    pub fn login_endpoint(&self) -> String {
        format!("{}{LOGIN_PATH}", self.api_base)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
