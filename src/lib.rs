//! sentiment-hub: route text to hosted sentiment classifiers and normalize their replies,
//! with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
