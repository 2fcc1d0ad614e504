//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/provider types here — adapters map their wire shapes into these.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical sentiment label. Every provider vocabulary is mapped onto these two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            other => Err(format!("unknown sentiment label '{}'", other)),
        }
    }
}

/// Normalized result of one analysis.
///
/// Build through [`AnalysisResult::new`] so confidence is always clamped into `[0, 1]`,
/// whichever provider produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub confidence: f64,
}

impl AnalysisResult {
    pub fn new(sentiment: Sentiment, confidence: f64) -> Self {
        Self {
            sentiment,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Confidence as a percentage string with two decimals (e.g. "97.25%").
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}

/// External classification provider selectable by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    /// Hosted fine-tuned text-classification model.
    #[serde(rename = "custom")]
    Custom,
    /// General-purpose chat-completion model (Llama on Groq).
    #[serde(rename = "llama", alias = "chat")]
    Chat,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::Custom, ProviderKind::Chat];

    /// Identifier used on the wire (`model` field of `POST /analyze`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Custom => "custom",
            ProviderKind::Chat => "llama",
        }
    }

    /// Human-readable label for menus.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Custom => "Custom Model",
            ProviderKind::Chat => "Llama 3",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    /// Exact match on the wire identifiers; "chat" is accepted as an alias of "llama".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "custom" => Ok(ProviderKind::Custom),
            "llama" | "chat" => Ok(ProviderKind::Chat),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

/// Raw analysis request as submitted by a caller. Validated by the dispatcher.
///
/// Missing fields deserialize to empty strings so that validation (not the JSON layer)
/// decides which error the caller sees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "model", alias = "provider")]
    pub provider: String,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            provider: provider.into(),
        }
    }
}

/// One past analysis kept by the presentation client for the current session.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub text: String,
    pub provider: ProviderKind,
    pub result: AnalysisResult,
    pub timestamp: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(AnalysisResult::new(Sentiment::Positive, 1.5).confidence, 1.0);
        assert_eq!(AnalysisResult::new(Sentiment::Negative, -0.2).confidence, 0.0);
        assert_eq!(AnalysisResult::new(Sentiment::Negative, 0.42).confidence, 0.42);
    }

    #[test]
    fn test_sentiment_parse_case_insensitive() {
        assert_eq!("POSITIVE".parse::<Sentiment>(), Ok(Sentiment::Positive));
        assert_eq!(" Negative ".parse::<Sentiment>(), Ok(Sentiment::Negative));
        assert!("neutral".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_provider_identifiers() {
        assert_eq!("custom".parse::<ProviderKind>(), Ok(ProviderKind::Custom));
        assert_eq!("llama".parse::<ProviderKind>(), Ok(ProviderKind::Chat));
        assert_eq!("chat".parse::<ProviderKind>(), Ok(ProviderKind::Chat));
        assert!("unknown".parse::<ProviderKind>().is_err());
        assert!("Custom".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_result_serializes_lowercase() {
        let json = serde_json::to_value(AnalysisResult::new(Sentiment::Positive, 0.9)).unwrap();
        assert_eq!(json["sentiment"], "positive");
        assert_eq!(json["confidence"], 0.9);
    }

    #[test]
    fn test_request_reads_model_field() {
        let req: AnalysisRequest =
            serde_json::from_str(r#"{"text": "great", "model": "custom"}"#).unwrap();
        assert_eq!(req, AnalysisRequest::new("great", "custom"));

        let empty: AnalysisRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.text.is_empty());
        assert!(empty.provider.is_empty());
    }

    #[test]
    fn test_confidence_percent() {
        let r = AnalysisResult::new(Sentiment::Positive, 0.97254);
        assert_eq!(r.confidence_percent(), "97.25%");
    }
}
