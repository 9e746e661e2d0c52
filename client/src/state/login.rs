//! Lifecycle of one login activation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page starts in `Initializing` and settles exactly once into a
//! terminal phase. There is no path back to `Initializing`; a new activation
//! (remounting the page) starts a fresh `LoginState`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::auth::LoginError;

/// Text shown while the handshake is in flight.
pub const INITIALIZING_MESSAGE: &str = "Initializing…";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Initializing,
    Succeeded,
    Failed(LoginError),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub phase: LoginPhase,
}

impl LoginState {
    /// Settle the activation. Only the first outcome counts; later calls
    /// return `false` and leave the phase untouched.
    pub fn resolve(&mut self, outcome: Result<(), LoginError>) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.phase = match outcome {
            Ok(()) => LoginPhase::Succeeded,
            Err(e) => LoginPhase::Failed(e),
        };
        true
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self.phase, LoginPhase::Initializing)
    }

    /// What the login page renders. Success renders nothing; the root shell
    /// takes over with the profile view.
    pub fn message(&self) -> Option<String> {
        match self.phase {
            LoginPhase::Initializing => Some(INITIALIZING_MESSAGE.to_owned()),
            LoginPhase::Succeeded => None,
            LoginPhase::Failed(e) => Some(e.to_string()),
        }
    }
}
