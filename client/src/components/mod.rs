//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render read-only views of state owned by the root shell.

pub mod profile_card;
