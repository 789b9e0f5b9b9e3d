/// LLM Client — the single point of entry for chat-completion calls.
///
/// No other module may call the model API directly; evaluation goes through
/// `screening::evaluation::LlmEvaluator`, which wraps this client.
///
/// Model: gpt-4o-mini at temperature 0.4 (hardcoded so scores stay comparable).
/// Failures are returned once, never retried.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for every evaluation.
pub const MODEL: &str = "gpt-4o-mini";
pub const TEMPERATURE: f32 = 0.4;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl LlmResponse {
    /// Text of the first choice, if the model produced any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_url: String, api_key: String) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    /// Sends one system + one user message and returns the full response object.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = build_request(prompt, system);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            });
        }

        let llm_response: LlmResponse = serde_json::from_str(&response.text().await?)?;

        if let Some(usage) = &llm_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(llm_response)
    }

    /// Calls the model and returns the first choice's text verbatim.
    pub async fn call_text(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let response = self.call(prompt, system).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

fn build_request<'a>(prompt: &'a str, system: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model: MODEL,
        messages: vec![
            ChatMessage {
                role: "system",
                content: system,
            },
            ChatMessage {
                role: "user",
                content: prompt,
            },
        ],
        temperature: TEMPERATURE,
    }
}

/// Pulls `error.message` out of an API error body, falling back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<ApiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_carries_model_temperature_and_roles() {
        let value = serde_json::to_value(build_request("evaluate this", "be an HR assistant"))
            .unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert!((value["temperature"].as_f64().unwrap() - 0.4).abs() < 1e-6);
        assert_eq!(
            value["messages"],
            json!([
                {"role": "system", "content": "be an HR assistant"},
                {"role": "user", "content": "evaluate this"}
            ])
        );
    }

    #[test]
    fn test_response_text_is_first_choice() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "Strong candidate."}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ],
            "usage": {"prompt_tokens": 120, "completion_tokens": 8, "total_tokens": 128}
        }"#;
        let response: LlmResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text(), Some("Strong candidate."));
        assert_eq!(response.usage.unwrap().completion_tokens, 8);
    }

    #[test]
    fn test_response_without_content_has_no_text() {
        let body = r#"{"choices": [{"message": {"content": null}}]}"#;
        let response: LlmResponse = serde_json::from_str(body).unwrap();
        assert!(response.text().is_none());

        let body = r#"{"choices": []}"#;
        let response: LlmResponse = serde_json::from_str(body).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_api_error_message_parsed_from_body() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(
            api_error_message(body.to_string()),
            "Incorrect API key provided"
        );
    }

    #[test]
    fn test_api_error_message_falls_back_to_raw_body() {
        assert_eq!(api_error_message("Bad Gateway".to_string()), "Bad Gateway");
    }
}
