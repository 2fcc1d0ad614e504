//! Mock sentiment adapter for testing without API calls.
//!
//! Returns a predetermined result (or error) for development and testing purposes.

use crate::domain::{AnalysisResult, DomainError, Sentiment};
use crate::ports::SentimentPort;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

/// Mock sentiment adapter.
///
/// Simulates network latency with a configurable delay and counts calls so tests can assert
/// that a provider was (or was not) contacted.
pub struct MockSentimentAdapter {
    outcome: Result<AnalysisResult, DomainError>,
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    calls: AtomicUsize,
}

impl MockSentimentAdapter {
    /// Create a mock that answers positive with 0.99 confidence after 100ms.
    pub fn new() -> Self {
        Self::with_result(AnalysisResult::new(Sentiment::Positive, 0.99))
    }

    /// Mock that always answers `result` (stored as given, without clamping).
    pub fn with_result(result: AnalysisResult) -> Self {
        Self {
            outcome: Ok(result),
            delay_ms: 100,
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock that always fails with `error`.
    pub fn failing(error: DomainError) -> Self {
        Self {
            outcome: Err(error),
            delay_ms: 0,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Number of `classify` calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockSentimentAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SentimentPort for MockSentimentAdapter {
    async fn classify(&self, text: &str) -> Result<AnalysisResult, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        info!(text_len = text.len(), "[MOCK] Simulating sentiment analysis");

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        self.outcome.clone()
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_adapter() {
        let adapter = MockSentimentAdapter::new().with_delay(10);

        let result = adapter.classify("Hello").await.unwrap();

        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.confidence, 0.99);
        assert_eq!(adapter.calls(), 1);
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let adapter =
            MockSentimentAdapter::failing(DomainError::ProviderUnavailable("down".to_string()));
        let err = adapter.classify("Hello").await.unwrap_err();
        assert_eq!(err, DomainError::ProviderUnavailable("down".to_string()));
    }
}
