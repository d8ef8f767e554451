//! Generative model provider abstractions and implementations.
//!
//! The answer pipeline only sees the [`TextProvider`] trait, so the Gemini
//! backend can be swapped for the mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Provider-neutral result of one generation call.
#[derive(Debug, Clone, Default)]
pub struct GenerateResponse {
    pub candidates: Vec<Candidate>,
}

/// One proposed answer.
#[derive(Debug, Clone, Default)]
pub struct Candidate {
    pub parts: Vec<Part>,

    /// Raw finish reason as reported by the backend (e.g. `STOP`).
    pub finish_reason: Option<String>,
}

/// A fragment of generated content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    InlineData { mime_type: String, data: String },
}

impl Candidate {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::Text(text.into())],
            finish_reason: Some("STOP".to_string()),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Text(text) => f.write_str(text),
            Part::InlineData { mime_type, data } => {
                write!(f, "[{} data, {} bytes]", mime_type, data.len())
            }
        }
    }
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send a single prompt and wait for the full response.
    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, ProviderError>;
}
