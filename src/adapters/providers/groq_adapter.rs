//! Chat-completion adapter for sentiment analysis.
//!
//! Talks to any OpenAI-compatible chat endpoint (Groq by default), asks for a JSON verdict
//! and normalizes whatever the model writes back.

use super::json_extract::extract_json_object;
use crate::domain::{AnalysisResult, DomainError, Sentiment};
use crate::ports::SentimentPort;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

const SYSTEM_PROMPT: &str = "You are a sentiment analysis expert. Always respond with valid JSON.";

const INSTRUCTION_PROMPT: &str = "You are a sentiment analysis expert. Analyze the following text and return only a JSON object with two fields: 'sentiment' (must be exactly \"positive\" or \"negative\") and 'confidence' (a number between 0 and 1). Text to analyze: ";

const TEMPERATURE: f32 = 0.1;
const MAX_TOKENS: u32 = 150;

pub const INVALID_ENDPOINT_MESSAGE: &str = "Invalid model name or API endpoint";

/// Chat-completion sentiment adapter.
///
/// Works with Groq, OpenAI, or any OpenAI-compatible API.
pub struct GroqAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl GroqAdapter {
    /// Create a new chat-completion adapter.
    ///
    /// # Arguments
    /// * `api_url` - Full chat completions endpoint
    /// * `api_key` - Bearer key
    /// * `model` - Model name (e.g., "llama-3.3-70b-versatile")
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
        }
    }

    fn user_prompt(text: &str) -> String {
        format!("{}{}", INSTRUCTION_PROMPT, text)
    }

    fn build_request(&self, text: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Self::user_prompt(text),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

/// Turn the model's message content into a normalized result.
///
/// The first embedded JSON object must carry `sentiment` and `confidence`. The sentiment is
/// lower-cased before matching; confidence may be a number or a numeric string.
pub fn normalize_reply(content: &str) -> Result<AnalysisResult, DomainError> {
    let object = extract_json_object(content.trim()).ok_or_else(|| {
        DomainError::ProviderResponseInvalid("Invalid JSON response from model".to_string())
    })?;
    let verdict = LlmVerdict::from_object(&object)?;

    let sentiment: Sentiment = verdict
        .sentiment
        .to_lowercase()
        .parse()
        .map_err(DomainError::ProviderResponseInvalid)?;

    Ok(AnalysisResult::new(sentiment, verdict.confidence))
}

/// Required fields of the model's JSON verdict.
struct LlmVerdict {
    sentiment: String,
    confidence: f64,
}

impl LlmVerdict {
    fn from_object(object: &Map<String, Value>) -> Result<Self, DomainError> {
        let missing =
            || DomainError::ProviderResponseInvalid("Response missing required fields".to_string());

        let sentiment = object
            .get("sentiment")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(missing)?
            .to_string();

        let confidence = match object.get("confidence") {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|c| c.is_finite())
        .ok_or_else(missing)?;

        Ok(Self {
            sentiment,
            confidence,
        })
    }
}

/// OpenAI-compatible request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI-compatible response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait::async_trait]
impl SentimentPort for GroqAdapter {
    async fn classify(&self, text: &str) -> Result<AnalysisResult, DomainError> {
        info!(
            model = %self.model,
            text_len = text.len(),
            "sending text to chat model"
        );

        let request = self.build_request(text);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DomainError::ProviderUnavailable(format!("Llama model error: {}", e))
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!(url = %self.api_url, model = %self.model, "chat API returned 404");
            return Err(DomainError::ProviderUnavailable(
                INVALID_ENDPOINT_MESSAGE.to_string(),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "chat API returned error");
            return Err(DomainError::ProviderUnavailable(format!(
                "Llama model error: API error {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            DomainError::ProviderResponseInvalid(format!("Failed to parse API response: {}", e))
        })?;

        let raw_content = chat_response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| {
                DomainError::ProviderResponseInvalid("No response choices returned".to_string())
            })?;

        debug!(raw = %raw_content, "raw chat model reply");

        let result = normalize_reply(&raw_content).inspect_err(|e| {
            warn!(
                error = %e,
                reply = %raw_content.chars().take(200).collect::<String>(),
                "failed to normalize chat model reply"
            );
        })?;

        info!(
            sentiment = %result.sentiment,
            confidence = result.confidence,
            "chat model analysis complete"
        );

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}
