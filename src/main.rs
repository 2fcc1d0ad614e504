//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run server or client.
//! No business logic here; validation and dispatch live in AnalysisService.

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use sentiment_hub::adapters::api_client::HttpAnalysisClient;
use sentiment_hub::adapters::http::{self, AppState};
use sentiment_hub::adapters::providers::{GroqAdapter, HuggingFaceAdapter, MockSentimentAdapter};
use sentiment_hub::adapters::ui::tui::TuiInputPort;
use sentiment_hub::domain::ProviderKind;
use sentiment_hub::ports::{AnalysisApiPort, InputPort, SentimentPort};
use sentiment_hub::shared::config::AppConfig;
use sentiment_hub::usecases::AnalysisService;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sentiment-hub")]
#[command(about = "Route text to hosted sentiment classifiers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Run the HTTP analysis server (default)
    Serve,

    /// Run the interactive terminal client against a running server
    Client {
        /// Server root URL (defaults to SENTIMENT_HUB_SERVER_URL or http://localhost:PORT)
        #[arg(long)]
        server_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let env_loaded = dotenv();
    let command = cli.command.unwrap_or(Command::Serve);

    // Client logs stay quiet by default so they do not tear through the prompts.
    let default_filter = match command {
        Command::Serve => "info",
        Command::Client { .. } => "warn",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;

    match command {
        Command::Serve => serve(&cfg).await,
        Command::Client { server_url } => {
            let url = server_url.unwrap_or_else(|| cfg.server_url_or_default());
            client(url).await
        }
    }
}

async fn serve(cfg: &AppConfig) -> anyhow::Result<()> {
    let service = Arc::new(build_service(cfg));
    info!(
        providers = ?service.registered(),
        development = cfg.is_development(),
        "analysis service ready"
    );

    let state = AppState::new(service, cfg.is_development());
    http::run(cfg, state).await
}

/// Register one adapter per provider. Missing credentials only warn: the provider then
/// answers with a 500 carrying the upstream auth error.
fn build_service(cfg: &AppConfig) -> AnalysisService {
    if cfg.use_mock_providers() {
        warn!("SENTIMENT_HUB_MOCK_PROVIDERS set, using mock adapters");
        return AnalysisService::new()
            .with_provider(ProviderKind::Custom, Arc::new(MockSentimentAdapter::new()))
            .with_provider(ProviderKind::Chat, Arc::new(MockSentimentAdapter::new()));
    }

    let hf_token = cfg.hf_api_token().unwrap_or_else(|| {
        warn!("HUGGINGFACE_API_TOKEN not set, custom model requests will fail");
        String::new()
    });
    let custom: Arc<dyn SentimentPort> = Arc::new(HuggingFaceAdapter::new(
        cfg.hf_api_url_or_default(),
        hf_token,
        cfg.hf_model_or_default(),
    ));
    info!(
        model = %cfg.hf_model_or_default(),
        url = %cfg.hf_api_url_or_default(),
        "custom model adapter configured"
    );

    let groq_key = cfg.groq_api_key().unwrap_or_else(|| {
        warn!("GROQ_API_KEY not set, llama model requests will fail");
        String::new()
    });
    let chat: Arc<dyn SentimentPort> = Arc::new(GroqAdapter::new(
        cfg.groq_api_url_or_default(),
        groq_key,
        cfg.groq_model_or_default(),
    ));
    info!(
        model = %cfg.groq_model_or_default(),
        url = %cfg.groq_api_url_or_default(),
        "chat model adapter configured"
    );

    AnalysisService::new()
        .with_provider(ProviderKind::Custom, custom)
        .with_provider(ProviderKind::Chat, chat)
}

async fn client(server_url: String) -> anyhow::Result<()> {
    sentiment_hub::adapters::ui::init_ui(&server_url);

    let api: Arc<dyn AnalysisApiPort> = Arc::new(HttpAnalysisClient::new(server_url.clone()));
    match api.health().await {
        Ok(status) => info!(status = %status, "analysis server reachable"),
        Err(e) => warn!(url = %server_url, error = %e, "analysis server not reachable"),
    }

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(api));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
