//! Prompt construction and answer extraction.

use crate::services::providers::{ProviderError, TextProvider};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnswerError {
    #[error("failed to generate content: {0}")]
    Generate(#[from] ProviderError),

    #[error("no candidates returned")]
    NoCandidates,

    #[error("no parts returned")]
    NoParts,
}

impl AnswerError {
    /// Short label for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            AnswerError::Generate(_) => "provider_error",
            AnswerError::NoCandidates => "no_candidates",
            AnswerError::NoParts => "no_parts",
        }
    }
}

pub fn build_prompt(document: &str, question: &str) -> String {
    format!(
        "Given the following document:\n\n{}\n\nAnswer the question: {}",
        document, question
    )
}

/// Ask the provider one question about `document` and return the first
/// part of the first candidate as text.
pub async fn get_answer(
    provider: &dyn TextProvider,
    document: &str,
    question: &str,
) -> Result<String, AnswerError> {
    let prompt = build_prompt(document, question);

    let response = provider.generate(&prompt).await?;

    let candidate = response
        .candidates
        .first()
        .ok_or(AnswerError::NoCandidates)?;
    let part = candidate.parts.first().ok_or(AnswerError::NoParts)?;

    Ok(part.to_string())
}
