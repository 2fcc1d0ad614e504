//! HTTP client for the analysis API. Implements AnalysisApiPort for the terminal client.

use crate::domain::{AnalysisRequest, AnalysisResult, DomainError, ProviderKind};
use crate::ports::AnalysisApiPort;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Client for `POST /analyze` and `GET /health` on a running server.
pub struct HttpAnalysisClient {
    client: Client,
    base_url: String,
}

impl HttpAnalysisClient {
    /// # Arguments
    /// * `base_url` - Server root (e.g., "http://localhost:3000")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Error body returned by the server (400 and 500 shapes).
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ErrorBody {
    /// `error`, followed by `message` when the server sent one.
    fn describe(self) -> Option<String> {
        match (self.error, self.message) {
            (Some(error), Some(message)) => Some(format!("{}: {}", error, message)),
            (Some(error), None) => Some(error),
            (None, Some(message)) => Some(message),
            (None, None) => None,
        }
    }
}

#[derive(Deserialize)]
struct HealthBody {
    status: String,
}

#[async_trait::async_trait]
impl AnalysisApiPort for HttpAnalysisClient {
    async fn analyze(
        &self,
        text: &str,
        provider: ProviderKind,
    ) -> Result<AnalysisResult, DomainError> {
        let url = format!("{}/analyze", self.base_url);
        let request = AnalysisRequest::new(text, provider.as_str());

        let res = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Api(format!("Failed to reach analysis server: {}", e)))?;

        let status = res.status();
        if !status.is_success() {
            let body: ErrorBody = res.json().await.unwrap_or_default();
            debug!(status = %status, "analysis server returned error");
            return Err(DomainError::Api(
                body.describe()
                    .unwrap_or_else(|| "Analysis failed".to_string()),
            ));
        }

        res.json::<AnalysisResult>()
            .await
            .map_err(|e| DomainError::Api(format!("Unexpected response from server: {}", e)))
    }

    async fn health(&self) -> Result<String, DomainError> {
        let url = format!("{}/health", self.base_url);
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Api(format!("Health check failed: {}", e)))?;

        if !res.status().is_success() {
            return Err(DomainError::Api(format!(
                "Health check returned {}",
                res.status()
            )));
        }

        let body: HealthBody = res
            .json()
            .await
            .map_err(|e| DomainError::Api(format!("Health check failed: {}", e)))?;
        Ok(body.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_describe() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"Text is required"}"#).unwrap();
        assert_eq!(body.describe().as_deref(), Some("Text is required"));

        let body: ErrorBody = serde_json::from_str(
            r#"{"error":"Internal server error","message":"Invalid JSON response from model"}"#,
        )
        .unwrap();
        assert_eq!(
            body.describe().as_deref(),
            Some("Internal server error: Invalid JSON response from model")
        );

        assert_eq!(ErrorBody::default().describe(), None);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = HttpAnalysisClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }
}
