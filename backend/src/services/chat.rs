//! Conversational assistant bridge
//!
//! Keeps each chat session's message list in memory (append-only, gone on
//! restart) and forwards user turns to the chat-completion API. Failures
//! never reach the caller as errors: a missing key or a failed request each
//! append a canned assistant message instead. One attempt per turn, no
//! retries, no backoff.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use shared::{ChatMessage, ChatRole};

use crate::error::{AppError, AppResult};
use crate::external::AssistantClient;
use crate::services::{Clock, PreferenceService, SystemClock};

/// Fixed first message of every conversation
pub const GREETING: &str = "Hi there! I'm your agricultural AI assistant, ready to help with all \
    your farming questions. Whether you need advice on crop yields, weather impacts, pest \
    management, or sustainable farming practices, I'm here to provide practical, actionable \
    insights. What would you like to know about today?";

/// Shown when no API key is configured; the request is never attempted
pub const MISSING_KEY_FALLBACK: &str = "The assistant API key is not configured. Please add your \
    API key in settings to start chatting.";

const FAILURE_PREFIX: &str = "I apologize, but I'm having trouble connecting to the AI service. \
    Please check your API configuration in settings. Here's a general response: ";

/// Chat assistant service
#[derive(Clone)]
pub struct ChatService {
    sessions: Arc<RwLock<HashMap<Uuid, Vec<ChatMessage>>>>,
    client: AssistantClient,
    preferences: PreferenceService,
    clock: Arc<dyn Clock>,
}

impl ChatService {
    pub fn new(client: AssistantClient, preferences: PreferenceService) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            client,
            preferences,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Start a conversation seeded with the greeting
    pub fn create_session(&self) -> (Uuid, Vec<ChatMessage>) {
        let id = Uuid::new_v4();
        let messages = vec![self.message(ChatRole::Assistant, GREETING.to_string())];
        self.sessions
            .write()
            .expect("session lock poisoned")
            .insert(id, messages.clone());
        (id, messages)
    }

    pub fn messages(&self, id: Uuid) -> AppResult<Vec<ChatMessage>> {
        let sessions = self.sessions.read().expect("session lock poisoned");
        sessions.get(&id).cloned().ok_or_else(not_found)
    }

    /// Reset the conversation to the single greeting message
    pub fn clear(&self, id: Uuid) -> AppResult<Vec<ChatMessage>> {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let messages = sessions.get_mut(&id).ok_or_else(not_found)?;
        *messages = vec![self.message(ChatRole::Assistant, GREETING.to_string())];
        Ok(messages.clone())
    }

    /// Forward one user turn to the assistant and append the reply.
    ///
    /// Always resolves: exactly one assistant message is appended per turn,
    /// whether it is the completion, the missing-configuration fallback, or
    /// the network-failure fallback. Blank input is ignored.
    pub async fn send(&self, id: Uuid, user_text: &str) -> AppResult<Vec<ChatMessage>> {
        let user_text = user_text.trim();
        if user_text.is_empty() {
            return self.messages(id);
        }

        {
            let mut sessions = self.sessions.write().expect("session lock poisoned");
            let messages = sessions.get_mut(&id).ok_or_else(not_found)?;
            messages.push(self.message(ChatRole::User, user_text.to_string()));
        }

        let config = self.preferences.chat_api_config();
        let reply = if !config.has_key() {
            // Distinct from the request-failure path: no request is attempted
            MISSING_KEY_FALLBACK.to_string()
        } else {
            match self.client.complete(&config.api_key, &config.model, user_text).await {
                Ok(content) => content,
                Err(error) => {
                    tracing::warn!(session = %id, %error, "assistant request failed");
                    format!("{}{}", FAILURE_PREFIX, keyword_fallback(user_text))
                }
            }
        };

        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let messages = sessions.get_mut(&id).ok_or_else(not_found)?;
        messages.push(self.message(ChatRole::Assistant, reply));
        Ok(messages.clone())
    }

    fn message(&self, role: ChatRole, content: String) -> ChatMessage {
        ChatMessage {
            id: Uuid::new_v4(),
            role,
            content,
            timestamp: self.clock.now(),
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Chat session".to_string())
}

/// Canned suggestion keyed on substrings of the user's message
fn keyword_fallback(user_text: &str) -> &'static str {
    let lower = user_text.to_lowercase();
    if lower.contains("yield") {
        "Consider factors like rainfall distribution, temperature variations, and soil \
         moisture levels for crop yield predictions."
    } else if lower.contains("weather") {
        "Weather plays a crucial role in agricultural productivity. Monitor precipitation \
         patterns and temperature variations."
    } else {
        "I'm here to help with agricultural questions. Please ensure your API is configured \
         for more detailed responses."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_fallback_yield() {
        assert!(keyword_fallback("How is my crop YIELD looking?").contains("rainfall"));
    }

    #[test]
    fn test_keyword_fallback_weather() {
        assert!(keyword_fallback("will the weather change").contains("precipitation"));
    }

    #[test]
    fn test_keyword_fallback_generic() {
        assert!(keyword_fallback("hello").contains("agricultural questions"));
    }
}
