//! Admin identity gate for relaybot commands.
//!
//! Commands are restricted to a single configured Telegram user. When no
//! admin is configured, nobody may run commands.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod admin;

pub use admin::{AdminConfig, AdminDecision, AdminGate};
