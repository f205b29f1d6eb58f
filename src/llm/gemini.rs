//! Google Gemini client implementation.
//!
//! Implements the LlmClient trait for the Generative Language
//! `generateContent` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::{IntelliSqlError, Result};
use crate::llm::LlmClient;

/// Generative Language API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini client configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication. Checked on the first request, not here.
    pub api_key: Option<String>,
    /// Model to use (e.g., "gemini-1.5-flash").
    pub model: String,
    /// Request timeout in seconds. `None` leaves the request unbounded.
    pub timeout_secs: Option<u64>,
}

impl GeminiConfig {
    /// Creates a new config with the given API key and model.
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            model: model.into(),
            timeout_secs: None,
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

/// Gemini LLM client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    /// Creates a new Gemini client with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| {
            IntelliSqlError::translation(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.config.model)
    }

    fn build_request(prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }

    /// Maps a non-success HTTP status and body to a translation error.
    fn parse_error(status: reqwest::StatusCode, body: &str) -> IntelliSqlError {
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return IntelliSqlError::translation(
                "Authentication failed. Check your GOOGLE_API_KEY.",
            );
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return IntelliSqlError::translation("Quota exceeded or rate limited. Try again later.");
        }

        if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(body) {
            return IntelliSqlError::translation(format!(
                "Gemini API error: {}",
                error_response.error.message
            ));
        }

        IntelliSqlError::translation(format!("Gemini API error ({}): {}", status, body))
    }

    /// Pulls the text out of a successful response body.
    fn parse_response(body: &str) -> Result<String> {
        let response: GeminiResponse = serde_json::from_str(body).map_err(|e| {
            IntelliSqlError::translation(format!("Failed to parse response: {}", e))
        })?;

        let candidate = response.candidates.into_iter().next().ok_or_else(|| {
            match response.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => {
                    IntelliSqlError::translation(format!("Prompt blocked by Gemini: {}", reason))
                }
                None => IntelliSqlError::translation("No response from Gemini"),
            }
        })?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".into());
            return Err(IntelliSqlError::translation(format!(
                "Gemini returned no text (finish reason: {})",
                reason
            )));
        }

        Ok(text)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            IntelliSqlError::translation("No API key configured. Set GOOGLE_API_KEY.")
        })?;

        debug!("Gemini request to model {}", self.config.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&Self::build_request(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    IntelliSqlError::translation("Request timed out. Try again.")
                } else if e.is_connect() {
                    IntelliSqlError::translation(
                        "Failed to connect to Gemini API. Check your network.",
                    )
                } else {
                    IntelliSqlError::translation(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            IntelliSqlError::translation(format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error(status, &body));
        }

        Self::parse_response(&body)
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiError,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}
