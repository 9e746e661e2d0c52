//! Networking and host-environment modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `telegram` reads `initData` from the Mini-App host, `api` carries it to
//! the backend, `auth` ties the two into the login handshake, and `types`
//! defines the wire schema.

pub mod api;
pub mod auth;
pub mod telegram;
pub mod types;
