//! Login page: one Telegram login activation per mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the root shell while no user is signed in. On mount it reads
//! `initData`, runs the backend exchange in a local task, and reports the
//! profile through `on_login`. It renders only a status line; on success it
//! renders nothing and the shell swaps in the profile view.
//!
//! TRADE-OFFS
//! ==========
//! The request is not cancelled on unmount. A liveness flag cleared in
//! `on_cleanup` keeps a late response from touching the discarded view.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

#[cfg(any(test, feature = "hydrate"))]
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::config::ClientConfig;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::LoginBackend;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::auth::{LoginCompletion, authenticate};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::telegram::InitDataSource;
use crate::net::types::UserProfile;
use crate::state::login::LoginState;

/// Drive one activation to its terminal state.
///
/// Returns `None` when the page was torn down before the outcome arrived; in
/// that case `on_login` is not called and the caller must not touch view state.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) async fn activate<S, B, F>(source: &S, backend: &B, alive: &AtomicBool, on_login: F) -> Option<LoginState>
where
    S: InitDataSource + ?Sized,
    B: LoginBackend + ?Sized,
    F: FnOnce(UserProfile),
{
    let completion = LoginCompletion::new(on_login);
    let outcome = authenticate(source, backend, |user| {
        if alive.load(Ordering::Relaxed) {
            completion.deliver(user);
        } else {
            log::debug!("login response arrived after unmount; dropped");
        }
    })
    .await;

    if !alive.load(Ordering::Relaxed) {
        return None;
    }
    let mut state = LoginState::default();
    state.resolve(outcome);
    Some(state)
}

/// Login page. Calls `on_login` at most once, after the backend answers.
#[component]
pub fn LoginPage(on_login: Callback<UserProfile>) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let login = RwSignal::new(LoginState::default());

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;

        use crate::net::api::HttpLoginBackend;
        use crate::net::telegram::TelegramWebApp;

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let backend = HttpLoginBackend::new(&config);
            let settled = activate(&TelegramWebApp, &backend, &alive_task, move |user| on_login.run(user)).await;
            if let Some(state) = settled {
                let _ = login.try_set(state);
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, on_login);
    }

    view! {
        <div class="login-page">
            {move || login.get().message().map(|message| view! { <p class="login-message">{message}</p> })}
        </div>
    }
}
