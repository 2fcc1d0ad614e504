//! Analysis service. Validates requests and dispatches them to a sentiment provider.
//!
//! Coordinates between the request surface (HTTP or direct callers) and the provider adapters.

use crate::domain::{AnalysisRequest, AnalysisResult, DomainError, ProviderKind};
use crate::ports::SentimentPort;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

pub const TEXT_REQUIRED: &str = "Text is required";
pub const INVALID_MODEL: &str = "Invalid model specified";
pub const INVALID_RESPONSE_FORMAT: &str = "Invalid model response format";

/// Service for sentiment analysis.
///
/// Orchestrates the flow:
/// 1. Validate the request (text first, then provider)
/// 2. Look up the provider adapter in the registry
/// 3. Classify the text (exactly one external call)
/// 4. Re-validate the normalized result before handing it back
///
/// The registry is read-only after construction, so one service can be shared across
/// concurrent requests behind an `Arc`.
pub struct AnalysisService {
    providers: HashMap<ProviderKind, Arc<dyn SentimentPort>>,
}

impl AnalysisService {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register (or replace) the adapter serving `kind`.
    pub fn with_provider(mut self, kind: ProviderKind, adapter: Arc<dyn SentimentPort>) -> Self {
        self.providers.insert(kind, adapter);
        self
    }

    /// Providers that currently have an adapter.
    pub fn registered(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .into_iter()
            .filter(|k| self.providers.contains_key(k))
            .collect()
    }

    /// Analyze one request.
    ///
    /// # Errors
    /// - `Validation` for blank text or an unknown provider identifier
    /// - `ProviderUnavailable` / `ProviderResponseInvalid` from the adapter
    /// - `ProviderResponseInvalid` if the adapter returned an unusable result
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, DomainError> {
        let (text, kind) = Self::validate(request)?;

        let adapter = self.providers.get(&kind).ok_or_else(|| {
            DomainError::ProviderUnavailable(format!("No adapter configured for '{}'", kind))
        })?;

        info!(
            provider = %kind,
            adapter = adapter.name(),
            text_len = text.len(),
            "dispatching analysis"
        );

        let result = adapter.classify(text).await.inspect_err(|e| {
            warn!(provider = %kind, kind = e.kind(), error = %e, "provider failed");
        })?;

        Self::check_result(&result)?;

        info!(
            provider = %kind,
            sentiment = %result.sentiment,
            confidence = result.confidence,
            "analysis result"
        );
        Ok(result)
    }

    /// Fail fast: text is checked before the provider.
    fn validate(request: &AnalysisRequest) -> Result<(&str, ProviderKind), DomainError> {
        if request.text.trim().is_empty() {
            return Err(DomainError::Validation(TEXT_REQUIRED.to_string()));
        }
        let kind = request
            .provider
            .parse::<ProviderKind>()
            .map_err(|_| DomainError::Validation(INVALID_MODEL.to_string()))?;
        Ok((request.text.as_str(), kind))
    }

    /// Adapters added later may not use `AnalysisResult::new`; catch what they let through.
    fn check_result(result: &AnalysisResult) -> Result<(), DomainError> {
        if !result.confidence.is_finite() || !(0.0..=1.0).contains(&result.confidence) {
            warn!(confidence = result.confidence, "adapter returned malformed result");
            return Err(DomainError::ProviderResponseInvalid(
                INVALID_RESPONSE_FORMAT.to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new()
    }
}
