//! Hugging Face inference adapter for the custom fine-tuned classifier.
//!
//! The model emits two fixed categories: `LABEL_1` (positive) and `LABEL_0` (negative).

use crate::domain::{AnalysisResult, DomainError, Sentiment};
use crate::ports::SentimentPort;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Category identifier the fine-tuned model uses for positive text.
pub const POSITIVE_LABEL: &str = "LABEL_1";

/// Hosted text-classification adapter.
pub struct HuggingFaceAdapter {
    client: reqwest::Client,
    endpoint: String,
    api_token: String,
    model: String,
}

impl HuggingFaceAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `api_url` - Inference base URL; the model id is appended as a path segment
    /// * `api_token` - Hugging Face access token
    /// * `model` - Model id (e.g., "arashghsz/my-finetuned-model")
    pub fn new(api_url: String, api_token: String, model: String) -> Self {
        let endpoint = format!("{}/{}", api_url.trim_end_matches('/'), model);
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_token,
            model,
        }
    }
}

/// Fixed two-way label mapping: `LABEL_1` is positive, anything else negative.
pub fn label_to_sentiment(label: &str) -> Sentiment {
    if label == POSITIVE_LABEL {
        Sentiment::Positive
    } else {
        Sentiment::Negative
    }
}

/// Pick the top-scoring prediction from a classification reply and normalize it.
pub fn normalize_predictions(reply: ClassificationReply) -> Result<AnalysisResult, DomainError> {
    let predictions = match reply {
        ClassificationReply::Nested(batches) => batches.into_iter().next().unwrap_or_default(),
        ClassificationReply::Flat(predictions) => predictions,
        ClassificationReply::Error { error } => {
            return Err(DomainError::ProviderUnavailable(format!(
                "Custom model error: {}",
                error
            )));
        }
    };

    let best = predictions
        .into_iter()
        .filter(|p| p.score.is_finite())
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or_else(|| {
            DomainError::ProviderResponseInvalid(
                "Classification response missing label/score".to_string(),
            )
        })?;

    Ok(AnalysisResult::new(
        label_to_sentiment(&best.label),
        best.score,
    ))
}

#[derive(Serialize)]
struct ClassificationRequest<'a> {
    inputs: &'a str,
}

/// One label/score pair.
#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

/// The inference API answers `[[{label, score}, ...]]` for a single input; some deployments
/// flatten it to `[{label, score}, ...]`. Errors come back as `{"error": "..."}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ClassificationReply {
    Nested(Vec<Vec<Prediction>>),
    Flat(Vec<Prediction>),
    Error { error: String },
}

#[async_trait::async_trait]
impl SentimentPort for HuggingFaceAdapter {
    async fn classify(&self, text: &str) -> Result<AnalysisResult, DomainError> {
        info!(
            model = %self.model,
            text_len = text.len(),
            "sending text to custom classifier"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&ClassificationRequest { inputs: text })
            .send()
            .await
            .map_err(|e| {
                DomainError::ProviderUnavailable(format!("Custom model error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "inference API returned error");
            return Err(DomainError::ProviderUnavailable(format!(
                "Custom model error: API error {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let raw = response.text().await.map_err(|e| {
            DomainError::ProviderUnavailable(format!("Custom model error: {}", e))
        })?;
        debug!(raw = %raw, "raw classification reply");

        let reply: ClassificationReply = serde_json::from_str(&raw).map_err(|e| {
            DomainError::ProviderResponseInvalid(format!(
                "Failed to parse classification response: {}",
                e
            ))
        })?;

        let result = normalize_predictions(reply)?;
        info!(
            sentiment = %result.sentiment,
            confidence = result.confidence,
            "custom model analysis complete"
        );
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "huggingface"
    }
}
