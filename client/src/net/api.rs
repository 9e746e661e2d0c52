//! REST transport for the backend login exchange.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: the transport reports
//! `BackendError::Unavailable`, since the exchange only makes sense in the
//! browser where Telegram supplies `initData`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure keeps its diagnostic detail in `BackendError`. Callers decide
//! what the user sees; this module never formats user-facing text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{LoginRequest, LoginResponse};
use crate::config::ClientConfig;

/// Diagnostic failure of one login round-trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("login request failed: {0}")]
    Transport(String),

    #[error("login request failed: {status}")]
    Status { status: u16 },

    #[error("login response parse failed: {0}")]
    Decode(String),

    #[error("login transport not available on server")]
    Unavailable,
}

/// The backend side of the Telegram login handshake.
#[async_trait(?Send)]
pub trait LoginBackend {
    /// Exchange `initData` for the user profile. One call, one request.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, BackendError>;
}

/// Parse a login response body.
///
/// A body without a `user` object, or with mistyped fields, is a decode
/// failure.
pub fn decode_login_response(body: &str) -> Result<LoginResponse, BackendError> {
    serde_json::from_str(body).map_err(|e| BackendError::Decode(e.to_string()))
}

/// Map an HTTP status to a failure; only 2xx passes.
pub fn check_status(status: u16) -> Result<(), BackendError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(BackendError::Status { status })
    }
}

/// `POST {api_base}/api/auth/login` over the browser fetch API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpLoginBackend {
    endpoint: String,
}

impl HttpLoginBackend {
    pub fn new(config: &ClientConfig) -> Self {
        Self { endpoint: config.login_endpoint() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl LoginBackend for HttpLoginBackend {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(request)
                .map_err(|e| BackendError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| BackendError::Transport(e.to_string()))?;
            check_status(resp.status())?;
            let body = resp
                .text()
                .await
                .map_err(|e| BackendError::Transport(e.to_string()))?;
            decode_login_response(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(BackendError::Unavailable)
        }
    }
}
