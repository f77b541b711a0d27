//! `relaybot ask` handler.

use relaybot::{
    Channel, ConfigError, ConsoleSender, InboundEvent, IncomingMessageBuilder, RelayConfig,
    RelayResult, build_relay,
};
use std::sync::Arc;
use tracing::instrument;

/// Resolve one message and print the reply.
///
/// # Errors
///
/// Returns error if the pipeline cannot be built from `config`.
#[instrument(skip(config, text))]
pub async fn run_ask(
    config: &RelayConfig,
    text: &str,
    channel: Channel,
    sender: &str,
    page: Option<String>,
    quick_reply: bool,
) -> RelayResult<()> {
    let relay = build_relay(config, Arc::new(ConsoleSender))?;

    let event = if quick_reply {
        InboundEvent::QuickReply {
            sender_id: sender.to_string(),
            payload: text.to_string(),
        }
    } else {
        let mut builder = IncomingMessageBuilder::default();
        builder.channel(channel).sender_id(sender).text(text);
        if let Some(page) = page {
            builder.page_id(page);
        }
        let message = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid message: {}", e)))?;
        InboundEvent::Message(message)
    };

    relay.handle(event).await?;
    Ok(())
}
