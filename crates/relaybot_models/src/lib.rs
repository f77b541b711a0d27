//! Language model fallback for the relay.
//!
//! [`OpenAiClient`] implements [`LanguageModel`](relaybot_interface::LanguageModel)
//! against any OpenAI-compatible chat completions endpoint. It is disabled
//! unless configured, in which case it answers `Ok(None)` without touching
//! the network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::{
    ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage, Message, OpenAiClient,
    OpenAiConfig, OpenAiConfigBuilder, SYSTEM_PROMPT, classify_failure,
};
