//! Application state for the Mini-App.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the root component's user slot; `login` tracks one login
//! activation. Both are plain values wrapped in `RwSignal` by components.

pub mod login;
pub mod session;
