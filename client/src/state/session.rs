//! The single "current user" slot owned by the root component.
//!
//! DESIGN
//! ======
//! The slot is write-once: the login callback fills it and nothing clears or
//! replaces it for the rest of the session. There is no logout path.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserProfile;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// No user yet; the login flow is showing.
    #[default]
    Anonymous,
    /// Login completed; the profile view is showing.
    SignedIn(UserProfile),
}

impl Session {
    /// Store `user` if the slot is empty. Returns `false` (and keeps the
    /// existing user) when someone is already signed in.
    pub fn sign_in(&mut self, user: UserProfile) -> bool {
        match self {
            Self::Anonymous => {
                *self = Self::SignedIn(user);
                true
            }
            Self::SignedIn(_) => false,
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Anonymous => None,
            Self::SignedIn(user) => Some(user),
        }
    }
}

/// Heading line of the profile view.
pub fn welcome_message(user: &UserProfile) -> String {
    format!("Welcome, {}", user.first_name)
}

/// Balance line of the profile view.
pub fn coin_balance_label(user: &UserProfile) -> String {
    format!("Coin Balance: {}", user.coins)
}
