//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Collects text and a provider, calls the analysis API and keeps the session history.

use super::render;
use crate::domain::{DomainError, ProviderKind};
use crate::ports::{AnalysisApiPort, InputPort};
use crate::usecases::AnalysisHistory;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::error::{CustomUserError, InquireError};
use inquire::validator::Validation;
use inquire::{Select, Text};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Analyze,
    History,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 3] = [MenuAction::Analyze, MenuAction::History, MenuAction::Quit];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MenuAction::Analyze => "Analyze Sentiment",
            MenuAction::History => "Show History",
            MenuAction::Quit => "Quit",
        })
    }
}

/// Menu label wrapper for providers.
#[derive(Debug, Clone, Copy)]
struct ProviderChoice(ProviderKind);

impl fmt::Display for ProviderChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", render::provider_icon(self.0), self.0.display_name())
    }
}

fn analyzing_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message("Analyzing...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn non_blank(input: &str) -> Result<Validation, CustomUserError> {
    if input.trim().is_empty() {
        Ok(Validation::Invalid("Enter some text to analyze".into()))
    } else {
        Ok(Validation::Valid)
    }
}

/// True when the user backed out of a prompt (Esc / Ctrl-C).
fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    api: Arc<dyn AnalysisApiPort>,
    history: Mutex<AnalysisHistory>,
}

impl TuiInputPort {
    pub fn new(api: Arc<dyn AnalysisApiPort>) -> Self {
        Self {
            api,
            history: Mutex::new(AnalysisHistory::new()),
        }
    }

    /// One submission. Awaits the response before returning, so there is never more than
    /// one request in flight per client.
    async fn analyze_once(&self) -> Result<(), DomainError> {
        let text = match Text::new("Text to analyze:")
            .with_placeholder("Enter your text here for analysis...")
            .with_validator(non_blank)
            .prompt()
        {
            Ok(text) => text,
            Err(e) if is_cancel(&e) => return Ok(()),
            Err(e) => return Err(DomainError::Input(e.to_string())),
        };

        let choices: Vec<ProviderChoice> =
            ProviderKind::ALL.into_iter().map(ProviderChoice).collect();
        let provider = match Select::new("Model:", choices).prompt() {
            Ok(choice) => choice.0,
            Err(e) if is_cancel(&e) => return Ok(()),
            Err(e) => return Err(DomainError::Input(e.to_string())),
        };

        let spinner = analyzing_spinner();
        let outcome = self.api.analyze(&text, provider).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(result) => {
                render::print_result(&result);
                let mut history = self.history.lock().await;
                history.record(&text, provider, result);
                render::print_history(&history);
            }
            Err(e) => render::print_error(&e.to_string()),
        }
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let action = match Select::new("What would you like to do?", MenuAction::ALL.to_vec())
                .prompt()
            {
                Ok(action) => action,
                Err(e) if is_cancel(&e) => MenuAction::Quit,
                Err(e) => return Err(DomainError::Input(e.to_string())),
            };

            match action {
                MenuAction::Analyze => self.analyze_once().await?,
                MenuAction::History => render::print_history(&*self.history.lock().await),
                MenuAction::Quit => return Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_validator() {
        assert!(matches!(non_blank("  "), Ok(Validation::Invalid(_))));
        assert!(matches!(non_blank("great"), Ok(Validation::Valid)));
    }

    #[test]
    fn test_provider_choice_labels() {
        assert_eq!(ProviderChoice(ProviderKind::Custom).to_string(), "🤖 Custom Model");
        assert_eq!(ProviderChoice(ProviderKind::Chat).to_string(), "🦙 Llama 3");
    }
}
