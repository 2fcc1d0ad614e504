//! HTTP request surface (axum). Exposes the analysis service over JSON.

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, app, router, run};
