//! Assemble the pipeline from configuration.

use crate::RelayConfig;
use relaybot_cache::EndpointCache;
use relaybot_core::Channel;
use relaybot_error::RelayResult;
use relaybot_github::{GithubCommandExecutor, ReqwestFetcher};
use relaybot_intent::{CommandHandler, IntentProcessor, Relay};
use relaybot_interface::ReplySender;
use relaybot_models::OpenAiClient;
use relaybot_replies::{MessengerReplies, PageDirectory};
use relaybot_security::AdminGate;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Build the GitHub executor, or `None` when no token is configured.
///
/// # Errors
///
/// Returns error if the HTTP client cannot be built.
pub fn build_github(config: &RelayConfig) -> RelayResult<Option<Arc<GithubCommandExecutor>>> {
    let github = config.github();
    if github.usable_token().is_none() {
        warn!("No GitHub token configured, /gh is unavailable");
        return Ok(None);
    }

    let fetcher = ReqwestFetcher::new(github.timeout())?;
    let cache = EndpointCache::new(config.cache().clone());
    let executor = GithubCommandExecutor::with_cache(github.clone(), Arc::new(fetcher), cache)?;
    Ok(Some(Arc::new(executor)))
}

/// Build the intent processor.
///
/// # Errors
///
/// Returns error if the Messenger page table is invalid or an HTTP client
/// cannot be built.
#[instrument(skip_all)]
pub fn build_processor(config: &RelayConfig) -> RelayResult<IntentProcessor> {
    let pages = PageDirectory::from_entries(config.messenger().pages().clone())?;
    let messenger = MessengerReplies::new(config.messenger().texts().clone(), pages);
    let commands = CommandHandler::new(
        AdminGate::new(config.telegram().clone()),
        build_github(config)?,
    );

    let mut builder = IntentProcessor::builder()
        .commands(commands)
        .messenger(messenger)
        .responses(config.responses().clone());

    if *config.openai().enabled() {
        let model = OpenAiClient::new(config.openai().clone())?;
        builder = builder.model(Arc::new(model));
    }

    let processor = builder.build();
    info!(
        github = processor.commands().github().is_some(),
        model = *config.openai().enabled(),
        "Intent processor ready"
    );
    Ok(processor)
}

/// Build a relay that answers every channel through `sender`.
///
/// # Errors
///
/// Same as [`build_processor`].
pub fn build_relay(config: &RelayConfig, sender: Arc<dyn ReplySender>) -> RelayResult<Relay> {
    let processor = Arc::new(build_processor(config)?);
    let relay = [Channel::Telegram, Channel::Messenger, Channel::Console]
        .into_iter()
        .fold(Relay::new(processor), |relay, channel| {
            relay.with_sender(channel, Arc::clone(&sender))
        });
    Ok(relay)
}
