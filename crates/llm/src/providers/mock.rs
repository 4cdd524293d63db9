//! Mock provider with canned outcomes.

use crate::client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
use digibot_core::ApiError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Provider that returns a fixed outcome and records how it was called.
///
/// Used to exercise the fallback chain without network access.
#[derive(Debug)]
pub struct MockClient {
    outcome: Result<String, ApiError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<LlmRequest>>,
}

impl MockClient {
    /// A provider whose every call succeeds with `content`.
    pub fn succeeding(content: impl Into<String>) -> Self {
        Self::with_outcome(Ok(content.into()))
    }

    /// A provider whose every call fails with `error`.
    pub fn failing(error: ApiError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<String, ApiError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Number of `complete` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<LlmRequest> {
        self.last_request
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or(None)
    }
}

#[async_trait::async_trait]
impl LlmClient for MockClient {
    fn provider_name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request.clone());
        }

        self.outcome.clone().map(|content| LlmResponse {
            content,
            model: request.model.clone(),
            usage: LlmUsage::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_succeeding_mock_counts_calls() {
        let client = MockClient::succeeding("hi there");
        let request = LlmRequest::new("hello", "test-model");

        let first = client.complete(&request).await.unwrap();
        client.complete(&request).await.unwrap();

        assert_eq!(first.content, "hi there");
        assert_eq!(first.model, "test-model");
        assert_eq!(client.call_count(), 2);
        assert_eq!(client.last_request(), Some(request));
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let client = MockClient::failing(ApiError::Transport("connection reset".to_string()));
        let result = client.complete(&LlmRequest::new("hello", "m")).await;

        assert_eq!(
            result,
            Err(ApiError::Transport("connection reset".to_string()))
        );
        assert_eq!(client.call_count(), 1);
    }
}
