//! HTTP handlers for settings and account state

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use shared::{ChatApiConfig, Theme, UserProfile};

use crate::error::AppResult;
use crate::AppState;

#[derive(Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    Json(ThemeResponse { theme: state.preferences.theme() })
}

#[derive(Debug, Deserialize)]
pub struct ThemeInput {
    pub theme: Theme,
}

pub async fn set_theme(
    State(state): State<AppState>,
    Json(input): Json<ThemeInput>,
) -> Json<ThemeResponse> {
    state.preferences.set_theme(input.theme);
    Json(ThemeResponse { theme: state.preferences.theme() })
}

#[derive(Serialize)]
pub struct AccountSessionResponse {
    pub logged_in: bool,
    pub user: Option<UserProfile>,
}

/// Current login flag and stored profile
pub async fn get_account_session(State(state): State<AppState>) -> Json<AccountSessionResponse> {
    Json(AccountSessionResponse {
        logged_in: state.preferences.is_logged_in(),
        user: state.preferences.user_profile(),
    })
}

/// Record a login. Credentials are not checked; any profile is accepted.
pub async fn login(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> AppResult<Json<AccountSessionResponse>> {
    state.preferences.login(&profile)?;
    Ok(Json(AccountSessionResponse {
        logged_in: true,
        user: Some(profile),
    }))
}

pub async fn logout(State(state): State<AppState>) -> Json<AccountSessionResponse> {
    state.preferences.logout();
    Json(AccountSessionResponse { logged_in: false, user: None })
}

/// Stored assistant API configuration. The key is echoed back as stored;
/// there is no masking layer here.
pub async fn get_chat_api_config(State(state): State<AppState>) -> Json<ChatApiConfig> {
    Json(state.preferences.chat_api_config())
}

pub async fn set_chat_api_config(
    State(state): State<AppState>,
    Json(config): Json<ChatApiConfig>,
) -> AppResult<Json<ChatApiConfig>> {
    state.preferences.set_chat_api_config(&config)?;
    Ok(Json(state.preferences.chat_api_config()))
}
