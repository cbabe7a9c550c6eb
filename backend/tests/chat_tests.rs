//! Chat assistant integration tests
//!
//! Exercises session lifecycle and the fallback behavior: a missing API key
//! short-circuits before any request, and a failed request degrades to a
//! keyword-matched canned reply. Either way the turn resolves with exactly
//! one appended assistant message.

use agridash_backend::external::AssistantClient;
use agridash_backend::services::chat::{ChatService, GREETING, MISSING_KEY_FALLBACK};
use agridash_backend::services::PreferenceService;
use shared::{ChatApiConfig, ChatRole};

/// Client pointed at a port nothing listens on, so every request fails fast
fn unreachable_client() -> AssistantClient {
    AssistantClient::with_base_url("http://127.0.0.1:9".to_string())
}

fn service_without_key() -> ChatService {
    ChatService::new(unreachable_client(), PreferenceService::in_memory())
}

fn service_with_key() -> ChatService {
    let preferences = PreferenceService::in_memory();
    preferences
        .set_chat_api_config(&ChatApiConfig {
            api_key: "gsk_test".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
        })
        .unwrap();
    ChatService::new(unreachable_client(), preferences)
}

#[tokio::test]
async fn test_new_session_starts_with_greeting() {
    let service = service_without_key();
    let (_, messages) = service.create_session();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, ChatRole::Assistant);
    assert_eq!(messages[0].content, GREETING);
}

#[tokio::test]
async fn test_missing_key_short_circuits() {
    let service = service_without_key();
    let (id, _) = service.create_session();

    let messages = service.send(id, "hello").await.unwrap();

    // Greeting, user turn, fallback reply
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].role, ChatRole::User);
    assert_eq!(messages[2].role, ChatRole::Assistant);
    assert_eq!(messages[2].content, MISSING_KEY_FALLBACK);
}

#[tokio::test]
async fn test_request_failure_falls_back_to_keyword_reply() {
    let service = service_with_key();
    let (id, _) = service.create_session();

    let messages = service.send(id, "How do I improve my crop yield?").await.unwrap();

    assert_eq!(messages.len(), 3);
    let reply = &messages[2].content;
    assert!(reply.starts_with("I apologize"), "unexpected reply: {reply}");
    assert!(reply.contains("rainfall distribution"));
}

#[tokio::test]
async fn test_request_failure_generic_fallback() {
    let service = service_with_key();
    let (id, _) = service.create_session();

    let messages = service.send(id, "tell me a joke").await.unwrap();
    assert!(messages[2].content.contains("agricultural questions"));
}

#[tokio::test]
async fn test_exactly_one_assistant_message_per_turn() {
    let service = service_without_key();
    let (id, _) = service.create_session();

    service.send(id, "first").await.unwrap();
    let messages = service.send(id, "second").await.unwrap();

    let assistant_turns = messages.iter().filter(|m| m.role == ChatRole::Assistant).count();
    let user_turns = messages.iter().filter(|m| m.role == ChatRole::User).count();
    // Greeting plus one reply per user turn
    assert_eq!(user_turns, 2);
    assert_eq!(assistant_turns, 3);
}

#[tokio::test]
async fn test_blank_message_is_ignored() {
    let service = service_without_key();
    let (id, _) = service.create_session();

    let messages = service.send(id, "   ").await.unwrap();
    assert_eq!(messages.len(), 1);
}

#[tokio::test]
async fn test_clear_resets_to_greeting() {
    let service = service_without_key();
    let (id, _) = service.create_session();
    service.send(id, "hello").await.unwrap();

    let messages = service.clear(id).unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, GREETING);
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let service = service_without_key();
    assert!(service.messages(uuid::Uuid::new_v4()).is_err());
    assert!(service.send(uuid::Uuid::new_v4(), "hi").await.is_err());
}
