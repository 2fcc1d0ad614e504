//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{AnalysisResult, DomainError, ProviderKind};

/// Sentiment provider. One implementation per external classification service.
///
/// Implementations must return results built with `AnalysisResult::new` and map every
/// transport problem to `ProviderUnavailable` and every unusable payload to
/// `ProviderResponseInvalid`.
#[async_trait::async_trait]
pub trait SentimentPort: Send + Sync {
    /// Classify a single block of text.
    async fn classify(&self, text: &str) -> Result<AnalysisResult, DomainError>;

    /// Short name for logs (e.g. "huggingface", "groq").
    fn name(&self) -> &'static str;
}

/// Analysis API as seen by the presentation client (the `POST /analyze` surface).
#[async_trait::async_trait]
pub trait AnalysisApiPort: Send + Sync {
    /// Submit text for analysis with the given provider.
    async fn analyze(
        &self,
        text: &str,
        provider: ProviderKind,
    ) -> Result<AnalysisResult, DomainError>;

    /// Liveness probe (`GET /health`). Returns the reported status string.
    async fn health(&self) -> Result<String, DomainError>;
}
