//! # UltraViab
//!
//! Non-invasive organ viability assessment.
//!
//! This crate provides:
//! - A pure, deterministic scoring engine mapping twelve clinical and
//!   ultrasound measurements to a 0-100 viability score
//! - Banded classification (Decline / Marginal / Accept) with rule-based
//!   risk-factor detection
//! - An HTTP gateway exposing the engine to the interactive client
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (OrganAssessment, ViabilityResult)
//! - `ports`: Trait definitions at the engine boundary
//! - `application`: The scoring engine and its configuration tables
//! - `adapters`: The HTTP gateway (axum)

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::ScoringEngine;
pub use domain::{Classification, OrganAssessment, ViabilityResult};

/// Result type for UltraViab operations
pub type Result<T> = std::result::Result<T, UltraviabError>;

/// Main error type for UltraViab
#[derive(Debug, thiserror::Error)]
pub enum UltraviabError {
    #[error("Invalid assessment: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
