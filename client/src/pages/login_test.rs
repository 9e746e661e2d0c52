use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::net::api::BackendError;
use crate::net::auth::LoginError;
use crate::net::telegram::FixedInitData;
use crate::net::types::{LoginRequest, LoginResponse};
use crate::state::login::LoginPhase;

/// Backend that answers with a fixed result and can flip the page's liveness
/// flag mid-request to simulate an unmount.
struct ScriptedBackend<'a> {
    result: Result<LoginResponse, BackendError>,
    unmount_during_request: Option<&'a AtomicBool>,
    calls: Cell<usize>,
}

impl<'a> ScriptedBackend<'a> {
    fn ok(first_name: &str, coins: i64) -> Self {
        Self {
            result: Ok(LoginResponse { user: UserProfile { first_name: first_name.to_owned(), coins } }),
            unmount_during_request: None,
            calls: Cell::new(0),
        }
    }

    fn failing(status: u16) -> Self {
        Self { result: Err(BackendError::Status { status }), unmount_during_request: None, calls: Cell::new(0) }
    }

    fn unmounting(mut self, alive: &'a AtomicBool) -> Self {
        self.unmount_during_request = Some(alive);
        self
    }
}

#[async_trait(?Send)]
impl LoginBackend for ScriptedBackend<'_> {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, BackendError> {
        self.calls.set(self.calls.get() + 1);
        if let Some(alive) = self.unmount_during_request {
            alive.store(false, Ordering::Relaxed);
        }
        self.result.clone()
    }
}

#[test]
fn activation_success_delivers_user_and_settles() {
    let alive = AtomicBool::new(true);
    let backend = ScriptedBackend::ok("Ana", 42);
    let received = RefCell::new(Vec::new());

    let state = block_on(activate(&FixedInitData::new("abc123"), &backend, &alive, |user| {
        received.borrow_mut().push(user);
    }));

    assert_eq!(state.map(|s| s.phase), Some(LoginPhase::Succeeded));
    assert_eq!(received.borrow().len(), 1);
    assert_eq!(received.borrow()[0].first_name, "Ana");
    assert_eq!(received.borrow()[0].coins, 42);
}

#[test]
fn activation_without_token_shows_missing_token() {
    let alive = AtomicBool::new(true);
    let backend = ScriptedBackend::ok("Ana", 42);

    let state = block_on(activate(&FixedInitData::absent(), &backend, &alive, |_| {
        panic!("callback must not fire");
    }));

    assert_eq!(state.map(|s| s.phase), Some(LoginPhase::Failed(LoginError::MissingToken)));
    assert_eq!(backend.calls.get(), 0);
}

#[test]
fn activation_server_error_shows_service_error() {
    let alive = AtomicBool::new(true);
    let backend = ScriptedBackend::failing(500);
    let fired = Cell::new(false);

    let state = block_on(activate(&FixedInitData::new("abc123"), &backend, &alive, |_| fired.set(true)));

    assert_eq!(
        state.and_then(|s| s.message()).as_deref(),
        Some("Service error. Please try again.")
    );
    assert!(!fired.get());
}

#[test]
fn response_after_unmount_is_not_actioned() {
    let alive = AtomicBool::new(true);
    let backend = ScriptedBackend::ok("Ana", 42).unmounting(&alive);
    let fired = Cell::new(false);

    let state = block_on(activate(&FixedInitData::new("abc123"), &backend, &alive, |_| fired.set(true)));

    assert_eq!(state, None);
    assert!(!fired.get());
    assert_eq!(backend.calls.get(), 1);
}

#[test]
fn failure_after_unmount_is_not_actioned() {
    let alive = AtomicBool::new(true);
    let backend = ScriptedBackend::failing(502).unmounting(&alive);

    let state = block_on(activate(&FixedInitData::new("abc123"), &backend, &alive, |_| {}));

    assert_eq!(state, None);
}
