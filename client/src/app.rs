//! Root application component with routing and context providers.

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::profile_card::ProfileCard;
use crate::config::ClientConfig;
use crate::net::types::UserProfile;
use crate::pages::login::LoginPage;
use crate::state::session::Session;

/// Script Telegram requires for `window.Telegram.WebApp` to exist.
pub const TELEGRAM_WEB_APP_SCRIPT: &str = "https://telegram.org/js/telegram-web-app.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src=TELEGRAM_WEB_APP_SCRIPT></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session slot and the client config, then routes to the home
/// screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ClientConfig::from_build_env());
    provide_context(RwSignal::new(Session::default()));

    view! {
        <Title text="GameVault"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Home/>
            </Routes>
        </Router>
    }
}

/// Login while the session is empty, profile once a user arrives.
#[component]
fn Home() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    // Sole writer of the session slot.
    let on_login = Callback::new(move |user: UserProfile| {
        session.try_update(|s| {
            if !s.sign_in(user) {
                log::debug!("session already holds a user; login result ignored");
            }
        });
    });

    move || match session.get() {
        Session::Anonymous => view! { <LoginPage on_login/> }.into_any(),
        Session::SignedIn(user) => view! { <ProfileCard user/> }.into_any(),
    }
}
