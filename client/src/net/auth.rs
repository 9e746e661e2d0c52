//! Telegram login handshake.
//!
//! SYSTEM CONTEXT
//! ==============
//! `authenticate` is the whole login flow: read `initData` from the host,
//! exchange it once with the backend, hand the profile to the caller. Both
//! collaborators are injected so the flow runs the same in the browser and
//! under native tests.
//!
//! ERROR HANDLING
//! ==============
//! Only two outcomes reach the user: `MissingToken` and `ServiceError`. The
//! backend's diagnostic error is logged here and then dropped. Nothing is
//! retried; a fresh activation is the only recovery.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;

use super::api::LoginBackend;
use super::telegram::InitDataSource;
use super::types::{LoginRequest, UserProfile};

/// User-visible login failure. `Display` is the exact text shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The host exposed no `initData`; no request was sent.
    #[error("Telegram initData not found")]
    MissingToken,

    /// The exchange failed for any reason (network, status, response shape).
    #[error("Service error. Please try again.")]
    ServiceError,
}

/// Run one login activation.
///
/// `on_login` is called exactly once on success and never on failure. It runs
/// after the response has been fully decoded.
///
/// # Errors
///
/// Returns `LoginError::MissingToken` without touching the backend when the
/// host has no token, and `LoginError::ServiceError` for any backend failure.
pub async fn authenticate<S, B, F>(source: &S, backend: &B, on_login: F) -> Result<(), LoginError>
where
    S: InitDataSource + ?Sized,
    B: LoginBackend + ?Sized,
    F: FnOnce(UserProfile),
{
    let Some(init_data) = source.init_data() else {
        log::warn!("login skipped: Telegram initData not found");
        return Err(LoginError::MissingToken);
    };

    let request = LoginRequest::new(init_data);
    match backend.login(&request).await {
        Ok(response) => {
            log::debug!("login succeeded");
            on_login(response.user);
            Ok(())
        }
        Err(e) => {
            log::error!("Login error: {e}");
            Err(LoginError::ServiceError)
        }
    }
}

/// Delivers a profile to the login callback at most once.
///
/// Late or repeated deliveries (duplicate responses, a response arriving
/// after the view was replaced) are dropped and reported as `false`.
pub struct LoginCompletion<F>
where
    F: FnOnce(UserProfile),
{
    callback: RefCell<Option<F>>,
}

impl<F> LoginCompletion<F>
where
    F: FnOnce(UserProfile),
{
    pub fn new(callback: F) -> Self {
        Self { callback: RefCell::new(Some(callback)) }
    }

    /// Hand `user` to the callback if it has not fired yet.
    pub fn deliver(&self, user: UserProfile) -> bool {
        let callback = self.callback.borrow_mut().take();
        match callback {
            Some(callback) => {
                callback(user);
                true
            }
            None => {
                log::debug!("duplicate login completion dropped");
                false
            }
        }
    }

    pub fn is_spent(&self) -> bool {
        self.callback.borrow().is_none()
    }
}
