//! Tests for standard and Messenger reply matching.

use relaybot_core::Channel;
use relaybot_replies::{
    MessengerReplies, MessengerTexts, PageDirectory, PageEntry, PageProfile, standard_reply,
};

fn messenger_with_pages() -> MessengerReplies {
    let pages = PageDirectory::from_entries(vec![
        PageEntry::new("studio-page", PageProfile::Studio),
        PageEntry::new("collective-page", PageProfile::Collective),
    ])
    .unwrap();
    MessengerReplies::new(MessengerTexts::default(), pages)
}

#[test]
fn test_greeting_reply() {
    let reply = standard_reply("hi there", Channel::Telegram).unwrap();
    assert_eq!(reply.text(), "Hey there! 👋 How can I help you today?");
}

#[test]
fn test_help_reply_adds_command_hint_on_telegram() {
    let telegram = standard_reply("I need help", Channel::Telegram).unwrap();
    let messenger = standard_reply("I need help", Channel::Messenger).unwrap();

    assert!(telegram.text().ends_with("`/gh audit` for org logs."));
    assert_eq!(
        messenger.text(),
        "I can help answer questions, offer basic replies, or just chat."
    );
}

#[test]
fn test_farewell_and_thanks() {
    assert_eq!(
        standard_reply("bye", Channel::Telegram).unwrap().text(),
        "Goodbye! 👋 Come back anytime."
    );
    assert_eq!(
        standard_reply("thank you so much", Channel::Messenger)
            .unwrap()
            .text(),
        "You’re welcome! 😊"
    );
}

#[test]
fn test_no_standard_match() {
    assert!(standard_reply("what is the weather", Channel::Telegram).is_none());
    assert!(standard_reply("", Channel::Telegram).is_none());
}

#[test]
fn test_quick_reply_payloads() {
    let replies = MessengerReplies::default();
    let texts = MessengerTexts::default();

    assert_eq!(replies.quick_reply_payload("SITE").unwrap().text(), texts.site());
    assert_eq!(
        replies.quick_reply_payload("PORTFOLIO").unwrap().text(),
        texts.portfolio()
    );
    assert_eq!(replies.quick_reply_payload("EMAIL").unwrap().text(), texts.email());
    assert_eq!(replies.quick_reply_payload("ABOUT").unwrap().text(), texts.about());
    assert!(replies.quick_reply_payload("UNKNOWN").is_none());
}

#[test]
fn test_keyword_order() {
    let replies = MessengerReplies::default();
    let texts = MessengerTexts::default();

    assert_eq!(
        replies.keyword_reply("Show me your WEBSITE", None).unwrap().text(),
        texts.site()
    );
    assert_eq!(
        replies.keyword_reply("any projects?", None).unwrap().text(),
        texts.portfolio()
    );
    assert_eq!(
        replies.keyword_reply("contact info about you", None).unwrap().text(),
        texts.email()
    );
    assert_eq!(
        replies.keyword_reply("tell me about yourself", None).unwrap().text(),
        texts.about()
    );
}

#[test]
fn test_help_menu_lists_four_options() {
    let reply = MessengerReplies::default().keyword_reply("help", None).unwrap();
    let payloads: Vec<_> = reply.options().iter().map(|o| o.payload.as_str()).collect();
    let titles: Vec<_> = reply.options().iter().map(|o| o.title.as_str()).collect();

    assert_eq!(reply.text(), "Here’s what I can help you with:");
    assert_eq!(payloads, vec!["SITE", "PORTFOLIO", "EMAIL", "ABOUT"]);
    assert_eq!(titles, vec!["Site", "Portfolio", "Email", "About"]);
    assert!(reply.options().iter().all(|o| o.content_type == "text"));
}

#[test]
fn test_page_overrides() {
    let replies = messenger_with_pages();

    assert_eq!(
        replies
            .keyword_reply("what services do you offer", Some("studio-page"))
            .unwrap()
            .text(),
        "Page A offers consulting and creative dev services."
    );
    assert_eq!(
        replies
            .keyword_reply("who is on the team", Some("collective-page"))
            .unwrap()
            .text(),
        "Our team is small, creative, and remote-first!"
    );
    assert!(
        replies
            .keyword_reply("who is on the team", Some("studio-page"))
            .is_none()
    );
    assert!(replies.keyword_reply("a quote please", Some("unknown")).is_none());
    assert!(replies.keyword_reply("a quote please", None).is_none());
}

#[test]
fn test_shared_keywords_beat_page_overrides() {
    let replies = messenger_with_pages();
    let reply = replies
        .keyword_reply("quote from your website", Some("studio-page"))
        .unwrap();
    assert_eq!(reply.text(), MessengerTexts::default().site());
}

#[test]
fn test_texts_load_from_toml_with_defaults() {
    let texts: MessengerTexts = toml::from_str(r#"site = "🌐 https://relay.example""#).unwrap();
    assert_eq!(texts.site(), "🌐 https://relay.example");
    assert_eq!(texts.about(), MessengerTexts::default().about());
}

#[test]
fn test_page_entries_load_from_toml() {
    #[derive(serde::Deserialize)]
    struct Section {
        pages: Vec<PageEntry>,
    }

    let section: Section = toml::from_str(
        r#"
        [[pages]]
        id = "1001"
        profile = "studio"

        [[pages]]
        id = "1002"
        profile = "collective"
        "#,
    )
    .unwrap();
    let directory = PageDirectory::from_entries(section.pages).unwrap();
    assert_eq!(directory.len(), 2);
    assert_eq!(directory.profile_for("1001"), Some(PageProfile::Studio));
}
