//! Profile view shown once a user is signed in.
//!
//! Read-only: no logout, refresh, or re-authentication control.

#[cfg(all(test, feature = "ssr"))]
#[path = "profile_card_test.rs"]
mod profile_card_test;

use leptos::prelude::*;

use crate::net::types::UserProfile;
use crate::state::session::{coin_balance_label, welcome_message};

/// Welcome heading and coin balance for the signed-in user.
#[component]
pub fn ProfileCard(user: UserProfile) -> impl IntoView {
    view! {
        <div class="profile-card">
            <h1>{welcome_message(&user)}</h1>
            <p class="profile-card__coins">{coin_balance_label(&user)}</p>
        </div>
    }
}
