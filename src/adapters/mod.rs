//! Infrastructure adapters. Implement ports.
//!
//! Sentiment providers, the HTTP request surface, the API client and the terminal UI.
//! Map errors to DomainError.

pub mod api_client;
pub mod http;
pub mod providers;
pub mod ui;
