//! Forecast Client
//!
//! One request, one reply: the fixed analyst prompt goes to the
//! chat-completions endpoint and the model's text comes back. Every
//! failure path returns a short human-readable string in place of the
//! forecast body.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};
use crate::message::ChatMessage;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default chat-completions model
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Hard per-request bound so a stalled upstream cannot hold a handler
const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// Shown instead of a forecast when no API key is configured
pub const MISSING_CREDENTIAL_NOTICE: &str = "❌ GROQ_API_KEY не найден";

/// Analyst persona (system message)
const ANALYST_PERSONA: &str = "Ты крипто-аналитик.";

/// The one question the bot ever asks the model (user message)
const FORECAST_PROMPT: &str = "Дай короткий честный прогноз по рынку на 24–48 часов: \
     топ гейнеры, риски, общее настроение. Не больше 150 слов.";

const MAX_TOKENS: u32 = 300;
const TEMPERATURE: f32 = 0.7;

/// How much of an upstream error body makes it into the reply
const STATUS_BODY_LIMIT: usize = 300;
const ERROR_MESSAGE_LIMIT: usize = 200;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Chat-completions client for the market forecast
pub struct ForecastClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl ForecastClient {
    /// `api_key = None` disables the feature gracefully: forecasts are
    /// replaced by [`MISSING_CREDENTIAL_NOTICE`] without a network call.
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_key,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.into(),
        })
    }

    /// Point the client at a different endpoint (tests, proxies)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Request the fixed 24-48h market outlook.
    ///
    /// Infallible by contract: a missing credential or any upstream
    /// failure yields a short explanatory string instead of an error.
    pub async fn request_forecast(&self) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return MISSING_CREDENTIAL_NOTICE.to_string();
        };

        match self.complete(api_key).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "forecast request failed");
                match err {
                    ForecastError::Status { status, body } => {
                        format!("Groq ошибка {}: {}", status, truncate(&body, STATUS_BODY_LIMIT))
                    }
                    other => {
                        format!("Ошибка: {}", truncate(&other.to_string(), ERROR_MESSAGE_LIMIT))
                    }
                }
            }
        }
    }

    async fn complete(&self, api_key: &str) -> Result<String> {
        let request = CompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage::system(ANALYST_PERSONA),
                ChatMessage::user(FORECAST_PROMPT),
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ForecastError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ForecastError::MalformedResponse("no choices in response".into()))
    }
}

/// Truncate on a char boundary; upstream error bodies can be long and
/// are not guaranteed to be ASCII.
fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_credential_short_circuits() {
        // Unroutable base URL proves no request is attempted.
        let client = ForecastClient::new(None, DEFAULT_MODEL)
            .unwrap()
            .with_base_url("http://127.0.0.1:9");

        assert_eq!(client.request_forecast().await, MISSING_CREDENTIAL_NOTICE);
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_error_string() {
        let client = ForecastClient::new(Some("test-key".into()), DEFAULT_MODEL)
            .unwrap()
            .with_base_url("http://127.0.0.1:9");

        let reply = client.request_forecast().await;
        assert!(reply.starts_with("Ошибка: "));
    }

    #[test]
    fn test_parse_completion_response() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": "Рынок спокоен."}}]}"#;
        let parsed: CompletionResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.choices[0].message.content, "Рынок спокоен.");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("привет", 3), "при");
        assert_eq!(truncate("hi", 10), "hi");
    }
}
