use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::DomainError;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai";
const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
/// Fixed target model; not configurable at runtime.
const MODEL: &str = "qwen/qwen3-32b";
/// Fixed sampling temperature; not configurable at runtime. Kept as f64 so
/// it serializes as exactly `0.3` on the wire.
const TEMPERATURE: f64 = 0.3;

/// OpenAI-style chat completions request payload.
#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    temperature: f64,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// HTTP client for Groq's OpenAI-compatible chat completions endpoint.
///
/// Implements [`ChatClient`] so higher-level components (e.g.
/// [`crate::application::AskQuestionUseCase`]) stay decoupled from
/// transport and serialization details.
///
/// Every call sends the same fixed model identifier and temperature, plus
/// two ordered role-tagged messages (`system`, then `user`). One outbound
/// request per invocation — no retry, no streaming, and no local timeout;
/// the call waits on the remote service's own connection behavior.
///
/// **API key**: required. Use [`GroqChatClient::from_env`] to read it from
/// `GROQ_API_KEY`; absence is a typed configuration error at construction
/// time rather than a failure on the first call.
///
/// **Base URL**: defaults to `https://api.groq.com/openai`. Override with
/// `GROQ_BASE_URL` to target any OpenAI-compatible server, e.g. a locally
/// running inference host.
pub struct GroqChatClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + CHAT_COMPLETIONS_PATH).
    url: String,
}

impl GroqChatClient {
    /// Create a new client with an explicit API key and endpoint base URL.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            url: Self::endpoint_url(&base),
        }
    }

    /// Construct from environment variables:
    /// - `GROQ_API_KEY`  — required; missing or empty is a configuration error
    /// - `GROQ_BASE_URL` — optional; defaults to `https://api.groq.com/openai`
    pub fn from_env() -> Result<Self, DomainError> {
        let key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                DomainError::configuration(
                    "GROQ_API_KEY is not set; export it before starting healthqa",
                )
            })?;
        let base =
            std::env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(key, base))
    }

    /// The model identifier sent with every request.
    pub fn model() -> &'static str {
        MODEL
    }

    fn endpoint_url(base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), CHAT_COMPLETIONS_PATH)
    }

    fn build_request<'a>(system: &'a str, user: &'a str) -> ApiRequest<'a> {
        ApiRequest {
            model: MODEL,
            temperature: TEMPERATURE,
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: system,
                },
                ApiMessage {
                    role: "user",
                    content: user,
                },
            ],
        }
    }

    /// Pull the first generated message's text out of a parsed response.
    fn extract_answer(response: ApiResponse) -> Result<String, DomainError> {
        response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| {
                DomainError::completion("GroqChatClient: response contained no choices")
            })
    }
}

#[async_trait]
impl ChatClient for GroqChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        let request = Self::build_request(system, user);

        debug!("GroqChatClient: POST {} model={MODEL}", self.url);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DomainError::completion(format!("GroqChatClient: request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GroqChatClient: API returned {status}: {body}");
            return Err(DomainError::completion(format!(
                "GroqChatClient: API returned {status}: {body}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::completion(format!(
                "GroqChatClient: failed to parse response: {e}"
            ))
        })?;

        Self::extract_answer(api_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_payload_carries_fixed_model_and_temperature() {
        let request = GroqChatClient::build_request("policy", "question");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "qwen/qwen3-32b");
        assert_eq!(json["temperature"], 0.3);
    }

    #[test]
    fn request_payload_orders_system_before_user() {
        let request = GroqChatClient::build_request("policy", "  padded question  ");
        let json = serde_json::to_value(&request).unwrap();

        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "policy");
        assert_eq!(messages[1]["role"], "user");
        // The user content goes out untrimmed.
        assert_eq!(messages[1]["content"], "  padded question  ");
    }

    #[test]
    fn endpoint_url_trims_trailing_slash() {
        assert_eq!(
            GroqChatClient::endpoint_url("http://localhost:1234/"),
            "http://localhost:1234/v1/chat/completions"
        );
        assert_eq!(
            GroqChatClient::endpoint_url("https://api.groq.com/openai"),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn extract_answer_returns_first_choice_verbatim() {
        let response: ApiResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"- A\n- B"}},{"message":{"content":"ignored"}}]}"#,
        )
        .unwrap();

        let answer = GroqChatClient::extract_answer(response).unwrap();
        assert_eq!(answer, "- A\n- B");
    }

    #[test]
    fn extract_answer_fails_on_empty_choices() {
        let response: ApiResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();

        let err = GroqChatClient::extract_answer(response).unwrap_err();
        assert!(err.is_completion_error());
    }
}
