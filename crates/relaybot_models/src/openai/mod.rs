//! OpenAI chat completions provider.

mod client;
mod config;
mod dto;

pub use client::{OpenAiClient, SYSTEM_PROMPT, classify_failure};
pub use config::{OpenAiConfig, OpenAiConfigBuilder};
pub use dto::{ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage, Message};
