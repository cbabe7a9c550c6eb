//! Preference store service
//!
//! Replaces the browser's ambient local-storage access with an explicit
//! application-context store handed to services at construction. The storage
//! backend is injectable for test isolation; the default is an in-process
//! map, so preferences live for the lifetime of the server only.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use shared::{ChatApiConfig, Theme, UserProfile};

use crate::error::{AppError, AppResult};

/// Storage keys, mirroring the original local-storage layout
pub const KEY_THEME: &str = "theme";
pub const KEY_LOGGED_IN: &str = "isLoggedIn";
pub const KEY_USER: &str = "user";
pub const KEY_CHAT_API_CONFIG: &str = "chatApiConfig";

/// String key-value storage backend
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

/// In-memory store, the default backend
#[derive(Default)]
pub struct InMemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl PreferenceStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().expect("store lock poisoned").get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.values.write().expect("store lock poisoned").insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.values.write().expect("store lock poisoned").remove(key);
    }
}

/// Typed access to the stored preferences
#[derive(Clone)]
pub struct PreferenceService {
    store: Arc<dyn PreferenceStore>,
}

impl PreferenceService {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::default()))
    }

    pub fn theme(&self) -> Theme {
        match self.store.get(KEY_THEME).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.set(KEY_THEME, theme.as_str().to_string());
    }

    /// The login flag is an unguarded boolean: present-and-"true" or absent.
    pub fn is_logged_in(&self) -> bool {
        self.store.get(KEY_LOGGED_IN).as_deref() == Some("true")
    }

    pub fn login(&self, profile: &UserProfile) -> AppResult<()> {
        let serialized = serde_json::to_string(profile)
            .map_err(|e| AppError::Internal(format!("profile serialization failed: {}", e)))?;
        self.store.set(KEY_LOGGED_IN, "true".to_string());
        self.store.set(KEY_USER, serialized);
        Ok(())
    }

    pub fn logout(&self) {
        self.store.remove(KEY_LOGGED_IN);
        self.store.remove(KEY_USER);
    }

    pub fn user_profile(&self) -> Option<UserProfile> {
        let raw = self.store.get(KEY_USER)?;
        serde_json::from_str(&raw).ok()
    }

    /// Stored assistant config; defaults apply when nothing has been saved.
    pub fn chat_api_config(&self) -> ChatApiConfig {
        self.store
            .get(KEY_CHAT_API_CONFIG)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// The key format is deliberately not validated; an invalid key only
    /// surfaces as a request failure at send time.
    pub fn set_chat_api_config(&self, config: &ChatApiConfig) -> AppResult<()> {
        let serialized = serde_json::to_string(config)
            .map_err(|e| AppError::Internal(format!("config serialization failed: {}", e)))?;
        self.store.set(KEY_CHAT_API_CONFIG, serialized);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults_to_light() {
        let prefs = PreferenceService::in_memory();
        assert_eq!(prefs.theme(), Theme::Light);
        prefs.set_theme(Theme::Dark);
        assert_eq!(prefs.theme(), Theme::Dark);
    }

    #[test]
    fn test_login_round_trip() {
        let prefs = PreferenceService::in_memory();
        assert!(!prefs.is_logged_in());

        let profile = UserProfile {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            farm_location: Some("Lucknow".to_string()),
        };
        prefs.login(&profile).unwrap();
        assert!(prefs.is_logged_in());
        assert_eq!(prefs.user_profile(), Some(profile));

        prefs.logout();
        assert!(!prefs.is_logged_in());
        assert!(prefs.user_profile().is_none());
    }

    #[test]
    fn test_chat_config_defaults_until_saved() {
        let prefs = PreferenceService::in_memory();
        assert!(!prefs.chat_api_config().has_key());

        let config = ChatApiConfig {
            api_key: "gsk_test".to_string(),
            model: "gemma2-9b-it".to_string(),
        };
        prefs.set_chat_api_config(&config).unwrap();
        assert_eq!(prefs.chat_api_config(), config);
    }
}
