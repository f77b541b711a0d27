//! Relaybot - multi-channel chatbot relay
//!
//! Relaybot takes already-validated Telegram and Facebook Messenger events,
//! resolves a reply, and hands it to the channel's sender. Replies come from,
//! in order:
//!
//! - A per-channel response cache
//! - Admin commands (`/gh`, `/help`) on Telegram, answered from GitHub's REST
//!   API behind a per-endpoint TTL cache
//! - Messenger keyword and quick-reply rules, with per-page overrides
//! - Standard greeting/help/farewell/thanks replies
//! - An optional OpenAI-compatible language model
//! - A random default reply
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use relaybot::{Channel, RelayConfig, build_processor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RelayConfig::load()?;
//!     let processor = build_processor(&config)?;
//!
//!     let reply = processor.process_text(Channel::Messenger, "42", "help").await;
//!     println!("{}", reply.text());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `relaybot_error` - Error types
//! - `relaybot_core` - Channels, messages and replies
//! - `relaybot_interface` - Collaborator traits (HTTP, language model, sender)
//! - `relaybot_cache` - TTL cache, GitHub endpoint policy, response cache
//! - `relaybot_replies` - Standard and Messenger reply rules
//! - `relaybot_security` - Admin gate
//! - `relaybot_github` - `/gh` dispatcher
//! - `relaybot_models` - OpenAI client
//! - `relaybot_intent` - Intent pipeline and relay
//!
//! This crate re-exports everything and adds configuration loading.

#![warn(missing_docs)]

mod bootstrap;
mod config;
mod console;
mod observability;

pub use bootstrap::{build_github, build_processor, build_relay};
pub use config::{MASK, MessengerConfig, RelayConfig};
pub use console::ConsoleSender;
pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};

pub use relaybot_cache::*;
pub use relaybot_core::*;
pub use relaybot_error::*;
pub use relaybot_github::*;
pub use relaybot_intent::*;
pub use relaybot_interface::*;
pub use relaybot_models::*;
pub use relaybot_replies::*;
pub use relaybot_security::*;
