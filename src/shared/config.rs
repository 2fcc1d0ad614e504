//! Application configuration. API credentials, endpoints, server settings.

use serde::Deserialize;

pub const DEFAULT_HF_API_URL: &str = "https://router.huggingface.co/hf-inference/models";
pub const DEFAULT_HF_MODEL: &str = "arashghsz/my-finetuned-model";
pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3001";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Custom classification model (Hugging Face inference)
    // ─────────────────────────────────────────────────────────────────────────
    /// Hugging Face API token. Read from SENTIMENT_HUB_HF_API_TOKEN or HUGGINGFACE_API_TOKEN.
    #[serde(default)]
    pub hf_api_token: Option<String>,

    /// Base URL of the inference endpoint; the model id is appended as a path.
    #[serde(default)]
    pub hf_api_url: Option<String>,

    #[serde(default)]
    pub hf_model: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Chat-completion model (Groq, OpenAI-compatible)
    // ─────────────────────────────────────────────────────────────────────────
    /// Groq API key. Read from SENTIMENT_HUB_GROQ_API_KEY or GROQ_API_KEY.
    #[serde(default)]
    pub groq_api_key: Option<String>,

    #[serde(default)]
    pub groq_api_url: Option<String>,

    #[serde(default)]
    pub groq_model: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // HTTP server
    // ─────────────────────────────────────────────────────────────────────────
    #[serde(default)]
    pub host: Option<String>,

    /// Listen port. Read from SENTIMENT_HUB_PORT or PORT.
    #[serde(default)]
    pub port: Option<u16>,

    /// Origin allowed by CORS (the browser front-end).
    #[serde(default)]
    pub cors_origin: Option<String>,

    /// "development" exposes error details in 500 responses.
    #[serde(default)]
    pub environment: Option<String>,

    /// Register mock providers instead of the hosted ones (offline development).
    #[serde(default)]
    pub mock_providers: Option<bool>,

    // ─────────────────────────────────────────────────────────────────────────
    // Client
    // ─────────────────────────────────────────────────────────────────────────
    /// Analysis server used by the interactive client.
    #[serde(default)]
    pub server_url: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("SENTIMENT_HUB"));
        if let Ok(path) = std::env::var("SENTIMENT_HUB_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // PORT is read directly (no prefix) so hosting platforms can inject it
        if cfg.port.is_none() {
            if let Ok(s) = std::env::var("PORT") {
                if let Ok(port) = s.parse::<u16>() {
                    cfg.port = Some(port);
                }
            }
        }
        Ok(cfg)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Provider helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the Hugging Face token from config or HUGGINGFACE_API_TOKEN env.
    pub fn hf_api_token(&self) -> Option<String> {
        self.hf_api_token
            .clone()
            .or_else(|| std::env::var("HUGGINGFACE_API_TOKEN").ok())
            .filter(|t| !t.is_empty())
    }

    pub fn hf_api_url_or_default(&self) -> String {
        self.hf_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_HF_API_URL.to_string())
    }

    pub fn hf_model_or_default(&self) -> String {
        self.hf_model
            .clone()
            .unwrap_or_else(|| DEFAULT_HF_MODEL.to_string())
    }

    /// Returns the Groq key from config or GROQ_API_KEY env.
    pub fn groq_api_key(&self) -> Option<String> {
        self.groq_api_key
            .clone()
            .or_else(|| std::env::var("GROQ_API_KEY").ok())
            .filter(|k| !k.is_empty())
    }

    pub fn groq_api_url_or_default(&self) -> String {
        self.groq_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_GROQ_API_URL.to_string())
    }

    pub fn groq_model_or_default(&self) -> String {
        self.groq_model
            .clone()
            .unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string())
    }

    pub fn use_mock_providers(&self) -> bool {
        self.mock_providers.unwrap_or(false)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Server helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns "host:port". Defaults to 127.0.0.1:3000.
    pub fn bind_addr(&self) -> String {
        format!(
            "{}:{}",
            self.host.as_deref().unwrap_or("127.0.0.1"),
            self.port.unwrap_or(DEFAULT_PORT)
        )
    }

    pub fn cors_origin_or_default(&self) -> String {
        self.cors_origin
            .clone()
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string())
    }

    /// True when running in development mode (error details are exposed).
    pub fn is_development(&self) -> bool {
        self.environment
            .as_deref()
            .is_some_and(|e| e.eq_ignore_ascii_case("development"))
    }

    /// Returns the analysis server URL for the client. Defaults to http://localhost:{port}.
    pub fn server_url_or_default(&self) -> String {
        self.server_url.clone().unwrap_or_else(|| {
            format!("http://localhost:{}", self.port.unwrap_or(DEFAULT_PORT))
        })
    }
}
