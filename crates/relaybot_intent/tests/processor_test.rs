//! Pipeline tests with scripted collaborators.

use async_trait::async_trait;
use parking_lot::Mutex;
use relaybot_cache::ResponseCacheConfig;
use relaybot_core::{Channel, IncomingMessage, IncomingMessageBuilder, Reply};
use relaybot_error::{HttpResult, ModelError, ModelErrorKind, ModelResult};
use relaybot_github::{GithubCommandExecutor, GithubConfig};
use relaybot_intent::{
    APOLOGY_MESSAGE, CommandHandler, DEFAULT_REPLIES, HELP_TEXT, INVALID_MESSAGE, IntentProcessor,
    QUOTA_MESSAGE, REFUSAL_MESSAGE,
};
use relaybot_interface::{HttpFetcher, HttpResponse, LanguageModel, RequestHeaders};
use relaybot_replies::{MessengerReplies, MessengerTexts, PageDirectory, PageEntry, PageProfile};
use relaybot_security::{AdminConfig, AdminGate};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const ADMIN: &str = "1001";

/// What the scripted model does on every call.
#[derive(Clone)]
enum Script {
    Answer(&'static str),
    Silent,
    Quota,
    Fail,
    Panic,
}

struct ScriptedModel {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedModel {
    fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn respond(&self, _text: &str) -> ModelResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script {
            Script::Answer(text) => Ok(Some(text.to_string())),
            Script::Silent => Ok(None),
            Script::Quota => Err(ModelError::new(ModelErrorKind::QuotaExceeded(
                "insufficient_quota".to_string(),
            ))),
            Script::Fail => Err(ModelError::new(ModelErrorKind::Http("timeout".to_string()))),
            Script::Panic => panic!("model blew up"),
        }
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}

/// Answers every GitHub call with one workflow run and counts calls.
#[derive(Default)]
struct CountingFetcher {
    urls: Mutex<Vec<String>>,
}

#[async_trait]
impl HttpFetcher for CountingFetcher {
    async fn get_json(&self, url: &str, _headers: &RequestHeaders) -> HttpResult<HttpResponse> {
        self.urls.lock().push(url.to_string());
        Ok(HttpResponse::new(
            200,
            json!({"workflow_runs": [{
                "name": "CI",
                "status": "completed",
                "conclusion": "success",
                "run_started_at": "2024-05-01T12:00:00Z",
                "html_url": "https://github.com/octo/repo/actions/runs/1"
            }]}),
        ))
    }
}

fn commands(fetcher: Option<Arc<CountingFetcher>>) -> CommandHandler {
    let gate = AdminGate::new(AdminConfig::with_admin(ADMIN));
    let github = fetcher.map(|fetcher| {
        let fetcher: Arc<dyn HttpFetcher> = fetcher;
        let config = GithubConfig::default().with_token(Some("ghp_test".to_string()));
        Arc::new(GithubCommandExecutor::new(config, fetcher).unwrap())
    });
    CommandHandler::new(gate, github)
}

fn processor_with(
    model: Arc<ScriptedModel>,
    fetcher: Option<Arc<CountingFetcher>>,
) -> IntentProcessor {
    IntentProcessor::builder()
        .commands(commands(fetcher))
        .model(model)
        .build()
}

#[tokio::test]
async fn test_empty_message_is_rejected() {
    let model = ScriptedModel::new(Script::Answer("unused"));
    let processor = processor_with(model.clone(), None);

    let reply = processor.process_text(Channel::Telegram, "7", "   \n ").await;
    assert_eq!(reply.text(), INVALID_MESSAGE);
    assert_eq!(model.calls(), 0);
    assert_eq!(processor.cached_responses(), 0);
}

#[tokio::test]
async fn test_farewell_is_cached_per_channel() {
    let model = ScriptedModel::new(Script::Answer("unused"));
    let processor = processor_with(model.clone(), None);

    let reply = processor.process_text(Channel::Telegram, "7", "bye").await;
    assert_eq!(reply.text(), "Goodbye! 👋 Come back anytime.");
    assert_eq!(processor.cached_responses(), 1);

    processor.process_text(Channel::Telegram, "8", "BYE").await;
    assert_eq!(processor.cached_responses(), 1);

    processor.process_text(Channel::Messenger, "8", "bye").await;
    assert_eq!(processor.cached_responses(), 2);
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_model_answer_is_cached() {
    let model = ScriptedModel::new(Script::Answer("Rust is a systems language."));
    let processor = processor_with(model.clone(), None);

    let first = processor.process_text(Channel::Telegram, "7", "What is Rust").await;
    let second = processor.process_text(Channel::Telegram, "9", "what is rust").await;

    assert_eq!(first.text(), "Rust is a systems language.");
    assert_eq!(first, second);
    assert_eq!(model.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_cached_reply_expires() {
    let model = ScriptedModel::new(Script::Answer("answer"));
    let processor = IntentProcessor::builder()
        .model(model.clone())
        .responses(ResponseCacheConfig::default().with_ttl_secs(60))
        .build();

    processor.process_text(Channel::Telegram, "7", "question").await;
    tokio::time::advance(Duration::from_secs(61)).await;
    processor.process_text(Channel::Telegram, "7", "question").await;

    assert_eq!(model.calls(), 2);
}

#[tokio::test]
async fn test_non_admin_command_is_refused_without_network() {
    let fetcher = Arc::new(CountingFetcher::default());
    let processor = processor_with(ScriptedModel::new(Script::Silent), Some(fetcher.clone()));

    let reply = processor
        .process_text(Channel::Telegram, "42", "/gh runs octo/repo")
        .await;
    assert_eq!(reply.text(), REFUSAL_MESSAGE);

    let help = processor.process_text(Channel::Telegram, "42", "/help").await;
    assert_eq!(help.text(), REFUSAL_MESSAGE);

    assert!(fetcher.urls.lock().is_empty());
    assert_eq!(processor.cached_responses(), 0);
}

#[tokio::test]
async fn test_admin_runs_command_hits_github_once() {
    let fetcher = Arc::new(CountingFetcher::default());
    let processor = processor_with(ScriptedModel::new(Script::Silent), Some(fetcher.clone()));

    let first = processor
        .process_text(Channel::Telegram, ADMIN, "/gh runs octo/repo")
        .await;
    let second = processor
        .process_text(Channel::Telegram, ADMIN, "/gh@relay_bot runs octo/repo")
        .await;

    assert!(first.text().starts_with("📋 Recent workflow runs for *octo/repo*"));
    assert_eq!(first, second);
    assert_eq!(fetcher.urls.lock().len(), 1);
    assert_eq!(processor.cached_responses(), 0);
}

#[tokio::test]
async fn test_admin_help_command() {
    let processor = processor_with(ScriptedModel::new(Script::Silent), None);
    let reply = processor.process_text(Channel::Telegram, ADMIN, "/help").await;
    assert_eq!(reply.text(), HELP_TEXT);
}

#[tokio::test]
async fn test_gh_without_token_apologises() {
    let processor = processor_with(ScriptedModel::new(Script::Silent), None);
    let reply = processor
        .process_text(Channel::Telegram, ADMIN, "/gh repo octo/repo")
        .await;
    assert_eq!(reply.text(), APOLOGY_MESSAGE);
}

#[tokio::test]
async fn test_unknown_admin_command_falls_through_uncached() {
    let model = ScriptedModel::new(Script::Answer("No idea what /deploy is."));
    let processor = processor_with(model.clone(), None);

    let reply = processor.process_text(Channel::Telegram, ADMIN, "/deploy").await;
    assert_eq!(reply.text(), "No idea what /deploy is.");

    processor.process_text(Channel::Telegram, ADMIN, "/deploy").await;
    assert_eq!(model.calls(), 2);
    assert_eq!(processor.cached_responses(), 0);
}

#[tokio::test]
async fn test_slash_text_on_messenger_is_not_a_command() {
    let processor = processor_with(ScriptedModel::new(Script::Answer("plain text")), None);
    let reply = processor.process_text(Channel::Messenger, "42", "/gh audit").await;
    assert_eq!(reply.text(), "plain text");
}

#[tokio::test]
async fn test_quota_error_is_reported_and_not_cached() {
    let model = ScriptedModel::new(Script::Quota);
    let processor = processor_with(model.clone(), None);

    let reply = processor.process_text(Channel::Telegram, "7", "tell me a joke").await;
    assert_eq!(reply.text(), QUOTA_MESSAGE);
    assert_eq!(processor.cached_responses(), 0);
}

#[tokio::test]
async fn test_model_failure_falls_back_to_default() {
    let model = ScriptedModel::new(Script::Fail);
    let processor = processor_with(model.clone(), None);

    let reply = processor.process_text(Channel::Telegram, "7", "tell me a joke").await;
    assert!(DEFAULT_REPLIES.contains(&reply.text()));
    assert_eq!(processor.cached_responses(), 1);
}

#[tokio::test]
async fn test_silent_model_falls_back_to_default() {
    let processor = processor_with(ScriptedModel::new(Script::Silent), None);
    let reply = processor.process_text(Channel::Messenger, "7", "tell me a joke").await;
    assert!(DEFAULT_REPLIES.contains(&reply.text()));
}

#[tokio::test]
async fn test_panicking_model_becomes_apology() {
    let processor = processor_with(ScriptedModel::new(Script::Panic), None);
    let reply = processor.process_text(Channel::Telegram, "7", "tell me a joke").await;
    assert_eq!(reply.text(), APOLOGY_MESSAGE);
}

#[tokio::test]
async fn test_messenger_keywords_run_before_standard_replies() {
    let processor = processor_with(ScriptedModel::new(Script::Silent), None);

    let messenger = processor.process_text(Channel::Messenger, "7", "help").await;
    assert_eq!(messenger.options().len(), 4);

    let telegram = processor.process_text(Channel::Telegram, "7", "help").await;
    assert!(telegram.options().is_empty());
    assert!(telegram.text().contains("/gh <repo>"));
}

#[tokio::test]
async fn test_page_override_uses_message_page() {
    let pages =
        PageDirectory::from_entries(vec![PageEntry::new("page-9", PageProfile::Collective)])
            .unwrap();
    let processor = IntentProcessor::builder()
        .messenger(MessengerReplies::new(MessengerTexts::default(), pages))
        .build();

    let message = IncomingMessageBuilder::default()
        .channel(Channel::Messenger)
        .sender_id("7")
        .page_id("page-9")
        .text("Who is on the team?")
        .build()
        .unwrap();

    let reply = processor.process(&message).await;
    assert_eq!(reply, Reply::from("Our team is small, creative, and remote-first!"));
}

fn page_message(page_id: Option<&str>, text: &str) -> IncomingMessage {
    let mut builder = IncomingMessageBuilder::default();
    builder.channel(Channel::Messenger).sender_id("7").text(text);
    if let Some(page_id) = page_id {
        builder.page_id(page_id);
    }
    builder.build().unwrap()
}

#[tokio::test]
async fn test_page_overrides_are_cached_per_page() {
    let pages = PageDirectory::from_entries(vec![
        PageEntry::new("page-a", PageProfile::Studio),
        PageEntry::new("page-b", PageProfile::Collective),
    ])
    .unwrap();
    let model = ScriptedModel::new(Script::Silent);
    let processor = IntentProcessor::builder()
        .messenger(MessengerReplies::new(MessengerTexts::default(), pages))
        .model(model.clone())
        .build();

    let studio = processor.process(&page_message(Some("page-a"), "quote")).await;
    assert_eq!(
        studio.text(),
        "📘 Page A says: \"Inspiration comes from within.\""
    );

    let collective = processor.process(&page_message(Some("page-b"), "quote")).await;
    assert_eq!(collective.text(), "📗 Page B reflects: \"Code is poetry.\"");

    // A page without a profile falls back, and that fallback stays on its own key
    let unassigned = processor.process(&page_message(Some("page-c"), "quote")).await;
    assert!(DEFAULT_REPLIES.contains(&unassigned.text()));
    let studio_again = processor.process(&page_message(Some("page-a"), "quote")).await;
    assert_eq!(studio_again, studio);

    let no_page = processor.process(&page_message(None, "quote")).await;
    assert!(DEFAULT_REPLIES.contains(&no_page.text()));
    assert_eq!(processor.cached_responses(), 4);
}

#[tokio::test]
async fn test_quick_reply_payload() {
    let processor = IntentProcessor::builder().build();
    let reply = processor.process_quick_reply("7", "EMAIL").await;
    assert_eq!(reply.text(), MessengerTexts::default().email());
}

#[tokio::test]
async fn test_clear_responses() {
    let processor = IntentProcessor::builder().build();
    processor.process_text(Channel::Telegram, "7", "hello").await;
    assert_eq!(processor.cached_responses(), 1);

    processor.clear_responses();
    assert_eq!(processor.cached_responses(), 0);
}
