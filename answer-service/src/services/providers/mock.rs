//! Mock provider implementation for testing.

use super::{Candidate, GenerateResponse, ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// What the mock does when asked to generate.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// One candidate with a single text part.
    Answer(String),
    /// A response with no candidates at all.
    NoCandidates,
    /// One candidate whose content has no parts.
    NoParts,
    /// The call itself fails.
    Fail(String),
}

/// Mock text provider for testing.
pub struct MockTextProvider {
    behavior: MockBehavior,
    last_prompt: Mutex<Option<String>>,
}

impl MockTextProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            last_prompt: Mutex::new(None),
        }
    }

    pub fn answering(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Answer(text.into()))
    }

    /// The prompt passed to the most recent `generate` call.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, ProviderError> {
        *self
            .last_prompt
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(prompt.to_string());

        match &self.behavior {
            MockBehavior::Answer(text) => Ok(GenerateResponse {
                candidates: vec![Candidate::text(text.clone())],
            }),
            MockBehavior::NoCandidates => Ok(GenerateResponse::default()),
            MockBehavior::NoParts => Ok(GenerateResponse {
                candidates: vec![Candidate::default()],
            }),
            MockBehavior::Fail(msg) => Err(ProviderError::ApiError(msg.clone())),
        }
    }
}
