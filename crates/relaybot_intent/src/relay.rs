//! Bridge between channel adapters and the pipeline.

use crate::IntentProcessor;
use relaybot_core::{Channel, InboundEvent, Reply};
use relaybot_error::{CommandError, CommandErrorKind, RelayResult};
use relaybot_interface::ReplySender;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Resolves inbound events and delivers the replies.
///
/// Quick replies and postbacks only exist on Messenger, so their replies go
/// to the Messenger sender.
#[derive(Clone)]
pub struct Relay {
    processor: Arc<IntentProcessor>,
    senders: HashMap<Channel, Arc<dyn ReplySender>>,
}

impl std::fmt::Debug for Relay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relay")
            .field("processor", &self.processor)
            .field("channels", &self.senders.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Relay {
    /// Create a relay with no senders registered.
    pub fn new(processor: Arc<IntentProcessor>) -> Self {
        Self {
            processor,
            senders: HashMap::new(),
        }
    }

    /// Register the sender for `channel`, replacing any previous one.
    pub fn with_sender(mut self, channel: Channel, sender: Arc<dyn ReplySender>) -> Self {
        self.senders.insert(channel, sender);
        self
    }

    /// The pipeline behind this relay.
    pub fn processor(&self) -> &Arc<IntentProcessor> {
        &self.processor
    }

    /// Resolve `event` and send the reply back on its channel.
    ///
    /// # Errors
    ///
    /// Returns an error if no sender is registered for the channel or the
    /// sender fails.
    #[instrument(skip_all, fields(sender_id = %event.sender_id()))]
    pub async fn handle(&self, event: InboundEvent) -> RelayResult<Reply> {
        let (channel, recipient, reply) = match event {
            InboundEvent::Message(message) => {
                let reply = self.processor.process(&message).await;
                (*message.channel(), message.reply_to().to_string(), reply)
            }
            InboundEvent::QuickReply { sender_id, payload } => {
                let reply = self
                    .processor
                    .process_quick_reply(&sender_id, &payload)
                    .await;
                (Channel::Messenger, sender_id, reply)
            }
            InboundEvent::Postback { sender_id, payload } => {
                let reply = Reply::Text(format!("Postback received: {}", payload));
                (Channel::Messenger, sender_id, reply)
            }
        };

        let sender = self.senders.get(&channel).ok_or_else(|| {
            CommandError::new(CommandErrorKind::Delivery {
                recipient: recipient.clone(),
                reason: format!("no sender registered for {}", channel),
            })
        })?;

        debug!(%channel, recipient = %recipient, "Delivering reply");
        sender.send(&recipient, &reply).await?;
        Ok(reply)
    }
}
