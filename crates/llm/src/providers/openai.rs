//! OpenAI chat completions provider.
//!
//! Works against api.openai.com or any endpoint speaking the same
//! `/chat/completions` protocol.
//! API reference: https://platform.openai.com/docs/api-reference/chat

use crate::client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
use digibot_core::{ApiError, AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Returned as a successful completion when the provider answers without text.
pub const EMPTY_COMPLETION_TEXT: &str = "Sorry, I could not generate a response.";

/// Chat completions request body.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Chat completions response body. Only the fields DigiBot reads.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

/// OpenAI chat completions client.
pub struct OpenAiClient {
    /// Base URL, without the trailing `/chat/completions`
    base_url: String,

    /// Bearer token; `None` makes every call fail with `MissingCredential`
    api_key: Option<String>,

    /// HTTP client (carries the request timeout)
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a client for the given endpoint.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let base_url: String = base_url.into();

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            client,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn to_wire_request<'a>(&self, request: &'a LlmRequest) -> ChatCompletionRequest<'a> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system.as_deref() {
            messages.push(WireMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(WireMessage {
            role: "user",
            content: &request.prompt,
        });

        ChatCompletionRequest {
            model: &request.model,
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }

    fn convert_response(&self, response: ChatCompletionResponse, requested_model: &str) -> LlmResponse {
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| EMPTY_COMPLETION_TEXT.to_string());

        let usage = response
            .usage
            .map(|u| LlmUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        LlmResponse {
            content,
            model: response.model.unwrap_or_else(|| requested_model.to_string()),
            usage,
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for OpenAiClient {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, ApiError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            tracing::debug!("No OpenAI API key available");
            ApiError::MissingCredential
        })?;

        tracing::info!(model = %request.model, "Sending completion request to OpenAI");
        tracing::debug!("Request: {:?}", request);

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&self.to_wire_request(request))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "OpenAI API responded");

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::MalformedPayload(e.to_string()))?;

        let response = self.convert_response(parsed, &request.model);

        tracing::info!(
            total_tokens = response.usage.total_tokens,
            "Received completion from OpenAI"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, api_key: Option<&str>) -> OpenAiClient {
        OpenAiClient::new(
            server.uri(),
            api_key.map(str::to_string),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn request() -> LlmRequest {
        LlmRequest::new("How do I check my Paytm balance?", "gpt-3.5-turbo")
            .with_system("You are DigiBot.")
            .with_temperature(0.7)
            .with_max_tokens(1024)
    }

    #[test]
    fn test_wire_request_shape() {
        let client =
            OpenAiClient::new("https://api.openai.com/v1/", None, Duration::from_secs(1)).unwrap();
        let req = request();
        let wire = serde_json::to_value(client.to_wire_request(&req)).unwrap();

        assert_eq!(client.completions_url(), "https://api.openai.com/v1/chat/completions");
        assert_eq!(wire["model"], "gpt-3.5-turbo");
        assert_eq!(wire["messages"][0]["role"], "system");
        assert_eq!(wire["messages"][1]["role"], "user");
        assert_eq!(wire["messages"][1]["content"], "How do I check my Paytm balance?");
        assert_eq!(wire["max_tokens"], 1024);
    }

    #[tokio::test]
    async fn test_blank_key_counts_as_missing() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = client_for(&server, Some("   ")).complete(&request()).await;
        assert_eq!(result, Err(ApiError::MissingCredential));
    }

    #[tokio::test]
    async fn test_complete_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({ "model": "gpt-3.5-turbo" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "gpt-3.5-turbo-0125",
                "choices": [{ "message": { "role": "assistant", "content": "Open the Paytm app." } }],
                "usage": { "prompt_tokens": 20, "completion_tokens": 5, "total_tokens": 25 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server, Some("sk-test"))
            .complete(&request())
            .await
            .unwrap();

        assert_eq!(response.content, "Open the Paytm app.");
        assert_eq!(response.model, "gpt-3.5-turbo-0125");
        assert_eq!(response.usage.total_tokens, 25);
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = client_for(&server, None).complete(&request()).await;
        assert_eq!(result, Err(ApiError::MissingCredential));
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let result = client_for(&server, Some("sk-bad")).complete(&request()).await;
        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 401,
                body: "invalid api key".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_malformed_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = client_for(&server, Some("sk-test")).complete(&request()).await;
        assert!(matches!(result, Err(ApiError::MalformedPayload(_))));
    }

    #[tokio::test]
    async fn test_empty_choices_yield_placeholder_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let response = client_for(&server, Some("sk-test"))
            .complete(&request())
            .await
            .unwrap();
        assert_eq!(response.content, EMPTY_COMPLETION_TEXT);
        assert_eq!(response.model, "gpt-3.5-turbo");
    }

    #[tokio::test]
    async fn test_slow_response_times_out_as_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_millis(500))
                    .set_body_json(serde_json::json!({
                        "choices": [{ "message": { "role": "assistant", "content": "late" } }]
                    })),
            )
            .mount(&server)
            .await;

        let client = OpenAiClient::new(
            server.uri(),
            Some("sk-test".to_string()),
            Duration::from_millis(100),
        )
        .unwrap();

        let result = client.complete(&request()).await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP
        let client =
            OpenAiClient::new("http://127.0.0.1:9", Some("sk-test".to_string()), Duration::from_secs(2))
                .unwrap();
        let result = client.complete(&request()).await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
