//! Remote provider factory.
//!
//! Turns the provider named in the configuration into a ready client, or
//! into no client at all when the remote tier is disabled.

use crate::client::LlmClient;
use crate::providers::OpenAiClient;
use digibot_core::{AppError, AppResult, ProviderType};
use std::sync::Arc;
use std::time::Duration;

/// Create the remote client for a provider.
///
/// # Arguments
/// * `provider` - Provider identifier ("openai" or "none")
/// * `endpoint` - Base URL of the API
/// * `api_key` - API key, if one is configured
/// * `timeout` - Per-request timeout
///
/// # Returns
/// `Ok(None)` for the "none" provider. A missing API key is not an error
/// here: the client is still created and each call fails with
/// `ApiError::MissingCredential`, which sends the responder to the FAQ.
///
/// # Errors
/// Returns `AppError::Config` if the provider is unknown or the HTTP client
/// cannot be built.
pub fn create_client(
    provider: &str,
    endpoint: &str,
    api_key: Option<&str>,
    timeout: Duration,
) -> AppResult<Option<Arc<dyn LlmClient>>> {
    let provider_type = ProviderType::parse(provider)
        .ok_or_else(|| AppError::Config(format!("Unknown provider: {}", provider)))?;

    match provider_type {
        ProviderType::None => {
            tracing::debug!("Remote provider disabled, answering from the FAQ only");
            Ok(None)
        }
        ProviderType::OpenAI => {
            tracing::debug!(
                endpoint,
                api_key_set = api_key.is_some(),
                "Creating OpenAI client"
            );
            let client = OpenAiClient::new(endpoint, api_key.map(str::to_string), timeout)?;
            Ok(Some(Arc::new(client)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn test_create_openai_client() {
        let client = create_client("openai", "https://api.openai.com/v1", Some("sk-test"), TIMEOUT)
            .unwrap()
            .expect("openai provider should yield a client");
        assert_eq!(client.provider_name(), "openai");
    }

    #[tokio::test]
    async fn test_openai_without_key_fails_each_call() {
        let client = create_client("openai", "https://api.openai.com/v1", None, TIMEOUT)
            .unwrap()
            .expect("client without key");
        let result = client
            .complete(&crate::LlmRequest::new("hello", "gpt-3.5-turbo"))
            .await;
        assert_eq!(result.unwrap_err(), digibot_core::ApiError::MissingCredential);
    }

    #[test]
    fn test_none_provider_yields_no_client() {
        let client = create_client("none", "https://api.openai.com/v1", Some("sk-test"), TIMEOUT);
        assert!(matches!(client, Ok(None)));
    }

    #[test]
    fn test_unknown_provider() {
        match create_client("ollama", "http://localhost:11434", None, TIMEOUT) {
            Err(AppError::Config(msg)) => assert!(msg.contains("Unknown provider")),
            Err(other) => panic!("Expected config error, got {}", other),
            Ok(_) => panic!("Expected error for unknown provider"),
        }
    }
}
