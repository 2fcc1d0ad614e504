//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Caller input was rejected before any provider was contacted.
    #[error("{0}")]
    Validation(String),

    /// Transport, auth or HTTP-level failure talking to the provider.
    #[error("{0}")]
    ProviderUnavailable(String),

    /// The provider replied but the payload could not be normalized.
    #[error("{0}")]
    ProviderResponseInvalid(String),

    /// The analysis server answered with an error or could not be reached (client side).
    #[error("{0}")]
    Api(String),

    #[error("Input error: {0}")]
    Input(String),
}

impl DomainError {
    /// True for failures caused by the caller's request rather than by a provider.
    pub fn is_client_error(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }

    /// Short machine-friendly kind, used in logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "validation",
            DomainError::ProviderUnavailable(_) => "provider_unavailable",
            DomainError::ProviderResponseInvalid(_) => "provider_response_invalid",
            DomainError::Api(_) => "api",
            DomainError::Input(_) => "input",
        }
    }
}
