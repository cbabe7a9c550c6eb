//! Chat-completion API client for the agricultural assistant
//!
//! Talks to an OpenAI-compatible endpoint (Groq by default). One request per
//! user turn: a fixed system prompt plus the latest user message, awaiting a
//! single non-streaming completion. No retries, no explicit timeout beyond
//! the transport default.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::AssistantConfig;
use crate::error::{AppError, AppResult};

/// System prompt sent with every request
pub const SYSTEM_PROMPT: &str = "You are an AI agricultural assistant specializing in crop yield predictions, weather impact analysis, farming recommendations, and agricultural best practices.

RESPONSE STYLE:
- Be conversational and friendly, like talking to a knowledgeable farming expert
- Keep responses concise but informative (2-4 sentences typically)
- Use natural language, avoid numbered lists unless specifically asked
- Focus on practical, actionable advice
- Ask follow-up questions to continue the conversation
- If the user asks about multiple topics, prioritize the most relevant one and offer to discuss others

EXPERTISE AREAS:
- Crop yield predictions and analysis
- Weather impact on agriculture
- Farming best practices and recommendations
- Pest and disease management
- Soil health and fertility
- Irrigation and water management
- Sustainable farming methods

Always provide specific, practical advice rather than generic information.";

/// Assistant API client
#[derive(Clone)]
pub struct AssistantClient {
    client: Client,
    base_url: String,
    default_model: String,
    max_tokens: u32,
    temperature: f64,
}

/// Chat-completion request body
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat-completion response body
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl AssistantClient {
    /// Create a client from the assistant configuration
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            default_model: config.default_model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            default_model: "llama-3.1-8b-instant".to_string(),
            max_tokens: 1000,
            temperature: 0.7,
        }
    }

    /// Send one user turn and return the completion text.
    ///
    /// Only the latest user message is sent, not the full history. An empty
    /// model name falls back to the configured default.
    pub async fn complete(&self, api_key: &str, model: &str, user_text: &str) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let model = if model.trim().is_empty() { &self.default_model } else { model };
        let body = CompletionRequest {
            model,
            messages: vec![
                RequestMessage { role: "system", content: SYSTEM_PROMPT },
                RequestMessage { role: "user", content: user_text },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::AssistantApiError(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::AssistantApiError(format!("{} - {}", status, body)));
        }

        let data: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::AssistantApiError(format!("invalid response: {}", e)))?;

        Ok(data
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_else(|| "No response received".to_string()))
    }
}
