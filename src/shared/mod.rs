//! Cross-cutting configuration shared by all layers.

pub mod config;
