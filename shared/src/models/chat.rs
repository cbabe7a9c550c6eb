//! Chat assistant models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sender of a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single message in the conversation, append-only and in-memory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Assistant API configuration, persisted via the preference store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatApiConfig {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    pub model: String,
}

impl Default for ChatApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "llama-3.1-8b-instant".to_string(),
        }
    }
}

impl ChatApiConfig {
    pub fn has_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_key() {
        let config = ChatApiConfig::default();
        assert!(!config.has_key());
        assert_eq!(config.model, "llama-3.1-8b-instant");
    }

    #[test]
    fn test_whitespace_key_counts_as_missing() {
        let config = ChatApiConfig { api_key: "   ".to_string(), ..Default::default() };
        assert!(!config.has_key());
    }

    #[test]
    fn test_config_round_trips_with_camel_case_key() {
        let json = r#"{"apiKey":"gsk_test","model":"gemma2-9b-it"}"#;
        let config: ChatApiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.api_key, "gsk_test");
        assert!(config.has_key());
    }
}
