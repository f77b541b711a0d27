//! Intent resolution pipeline.

use crate::{
    APOLOGY_MESSAGE, CommandHandler, DEFAULT_REPLIES, INVALID_MESSAGE, QUOTA_MESSAGE,
};
use futures::FutureExt;
use parking_lot::Mutex;
use rand::seq::SliceRandom;
use relaybot_cache::{ResponseCache, ResponseCacheConfig};
use relaybot_core::{Channel, IncomingMessage, Reply, sanitize_input, truncate_chars};
use relaybot_error::RelayResult;
use relaybot_interface::LanguageModel;
use relaybot_replies::{MessengerReplies, standard_reply};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

const LOG_PREVIEW_CHARS: usize = 100;

/// Builder for [`IntentProcessor`].
///
/// Every collaborator is optional; the defaults give a processor that only
/// knows the canned replies.
#[derive(Default)]
pub struct IntentProcessorBuilder {
    commands: CommandHandler,
    messenger: MessengerReplies,
    model: Option<Arc<dyn LanguageModel>>,
    responses: ResponseCacheConfig,
}

impl IntentProcessorBuilder {
    /// Admin command handler.
    pub fn commands(mut self, commands: CommandHandler) -> Self {
        self.commands = commands;
        self
    }

    /// Messenger keyword matcher.
    pub fn messenger(mut self, messenger: MessengerReplies) -> Self {
        self.messenger = messenger;
        self
    }

    /// Language model fallback.
    pub fn model(mut self, model: Arc<dyn LanguageModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Response cache settings.
    pub fn responses(mut self, responses: ResponseCacheConfig) -> Self {
        self.responses = responses;
        self
    }

    /// Build the processor with a fresh response cache.
    pub fn build(self) -> IntentProcessor {
        IntentProcessor {
            commands: self.commands,
            messenger: self.messenger,
            model: self.model,
            responses: Mutex::new(ResponseCache::new(self.responses)),
        }
    }
}

/// Resolves each inbound message to exactly one reply.
///
/// # Example
///
/// ```
/// use relaybot_core::Channel;
/// use relaybot_intent::IntentProcessor;
///
/// let processor = IntentProcessor::builder().build();
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// let reply = runtime.block_on(processor.process_text(Channel::Telegram, "7", "bye"));
/// assert_eq!(reply.text(), "Goodbye! 👋 Come back anytime.");
/// ```
pub struct IntentProcessor {
    commands: CommandHandler,
    messenger: MessengerReplies,
    model: Option<Arc<dyn LanguageModel>>,
    responses: Mutex<ResponseCache>,
}

impl std::fmt::Debug for IntentProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentProcessor")
            .field("commands", &self.commands)
            .field(
                "model",
                &self.model.as_ref().map(|model| model.provider_name()),
            )
            .field("cached_responses", &self.responses.lock().len())
            .finish()
    }
}

impl IntentProcessor {
    /// Start building a processor.
    pub fn builder() -> IntentProcessorBuilder {
        IntentProcessorBuilder::default()
    }

    /// Admin command handler.
    pub fn commands(&self) -> &CommandHandler {
        &self.commands
    }

    /// Messenger keyword matcher.
    pub fn messenger(&self) -> &MessengerReplies {
        &self.messenger
    }

    /// Number of cached replies.
    pub fn cached_responses(&self) -> usize {
        self.responses.lock().len()
    }

    /// Forget every cached reply.
    pub fn clear_responses(&self) {
        self.responses.lock().clear()
    }

    /// Resolve `text` from `sender_id` on `channel`.
    pub async fn process_text(&self, channel: Channel, sender_id: &str, text: &str) -> Reply {
        let message = IncomingMessage::new(channel, sender_id, text);
        self.process(&message).await
    }

    /// Resolve a message. Never fails.
    #[instrument(
        skip_all,
        fields(channel = %message.channel(), sender_id = %message.sender_id())
    )]
    pub async fn process(&self, message: &IncomingMessage) -> Reply {
        let outcome = AssertUnwindSafe(self.resolve(message)).catch_unwind().await;

        let failure = match outcome {
            Ok(Ok(reply)) => return reply,
            Ok(Err(e)) => e.to_string(),
            Err(panic) => format!("panic: {}", panic_message(panic.as_ref())),
        };

        error!(
            sender_id = %message.sender_id(),
            message = truncate_chars(message.text(), LOG_PREVIEW_CHARS),
            channel = %message.channel(),
            error = %failure,
            "Failed to process message"
        );
        Reply::from(APOLOGY_MESSAGE)
    }

    /// Answer a Messenger quick-reply tap.
    ///
    /// Known payload tokens get their fixed reply; anything else is resolved
    /// like a typed message.
    #[instrument(skip(self))]
    pub async fn process_quick_reply(&self, sender_id: &str, payload: &str) -> Reply {
        if let Some(reply) = self.messenger.quick_reply_payload(payload) {
            return reply;
        }
        debug!("Unknown quick reply payload, resolving as text");
        self.process_text(Channel::Messenger, sender_id, payload).await
    }

    async fn resolve(&self, message: &IncomingMessage) -> RelayResult<Reply> {
        let channel = *message.channel();
        let text = sanitize_input(message.text());
        if text.is_empty() {
            return Ok(Reply::from(INVALID_MESSAGE));
        }

        let is_command = CommandHandler::is_command(channel, &text);
        let page_id = if channel.uses_keyword_replies() {
            message.page_id().as_deref()
        } else {
            None
        };
        let cache_key =
            (!is_command).then(|| ResponseCache::key_for_page(channel, page_id, &text));

        if let Some(key) = &cache_key {
            let hit = self.responses.lock().get(key);
            if let Some(reply) = hit {
                debug!(key, "Response cache hit");
                return Ok(reply);
            }
        }

        if is_command {
            let handled = self
                .commands
                .handle(channel, message.sender_id(), &text)
                .await?;
            if let Some(answer) = handled {
                return Ok(Reply::Text(answer));
            }
        }

        let keyword = if channel.uses_keyword_replies() {
            self.messenger.keyword_reply(&text, page_id)
        } else {
            None
        };
        if let Some(reply) = keyword.or_else(|| standard_reply(&text, channel)) {
            return Ok(self.remember(cache_key, reply));
        }

        if let Some(model) = &self.model {
            match model.respond(&text).await {
                Ok(Some(answer)) => return Ok(self.remember(cache_key, Reply::Text(answer))),
                Ok(None) => debug!(provider = model.provider_name(), "Model had no answer"),
                Err(e) if e.is_quota() => {
                    warn!(provider = model.provider_name(), "Model quota exhausted");
                    return Ok(Reply::from(QUOTA_MESSAGE));
                }
                Err(e) => {
                    warn!(
                        provider = model.provider_name(),
                        error = %e,
                        "Model failed, using default reply"
                    )
                }
            }
        }

        let fallback = DEFAULT_REPLIES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(DEFAULT_REPLIES[0]);
        Ok(self.remember(cache_key, Reply::from(fallback)))
    }

    fn remember(&self, key: Option<String>, reply: Reply) -> Reply {
        if let Some(key) = key {
            self.responses.lock().insert(key, reply.clone());
        }
        reply
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
