//! Gemini AI provider implementation.
//!
//! Implements single-shot text generation using Google's Gemini REST API.

use super::{Candidate, GenerateResponse, Part, ProviderError, TextProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gemini provider configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ProviderError::NetworkError(format!("failed to build client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build the API URL for the given model and method.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.config.api_base.trim_end_matches('/'),
            self.config.model,
            method,
            self.config.api_key
        )
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![ContentPart::Text {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url("generateContent"))
            .json(&request)
            .send()
            .await
            // without_url keeps the API key out of the message
            .map_err(|e| ProviderError::NetworkError(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response.json().await.map_err(|e| {
            ProviderError::ApiError(format!("Failed to parse response: {}", e.without_url()))
        })?;

        if let Some(usage) = &api_response.usage_metadata {
            tracing::debug!(
                input_tokens = usage.prompt_token_count.unwrap_or(0),
                output_tokens = usage.candidates_token_count.unwrap_or(0),
                candidates = api_response.candidates.len(),
                "Gemini API responded"
            );
        }

        Ok(api_response.into_generate_response())
    }
}

impl GenerateContentResponse {
    fn into_generate_response(self) -> GenerateResponse {
        let candidates = self
            .candidates
            .into_iter()
            .map(|c| Candidate {
                parts: c
                    .content
                    .map(|content| content.parts.into_iter().map(ContentPart::into_part).collect())
                    .unwrap_or_default(),
                finish_reason: c.finish_reason,
            })
            .collect();

        GenerateResponse { candidates }
    }
}

impl ContentPart {
    fn into_part(self) -> Part {
        match self {
            ContentPart::Text { text } => Part::Text(text),
            ContentPart::InlineData { inline_data } => Part::InlineData {
                mime_type: inline_data.mime_type,
                data: inline_data.data,
            },
            ContentPart::Other(value) => Part::Text(value.to_string()),
        }
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum ContentPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    /// Function calls, code execution results and other part kinds.
    Other(serde_json::Value),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    // Absent when the candidate was blocked.
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<i32>,
    candidates_token_count: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(api_base: &str) -> GeminiTextProvider {
        GeminiTextProvider::new(GeminiConfig {
            api_key: "secret".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_base: api_base.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn api_url_includes_model_method_and_key() {
        let p = provider("https://example.test/v1beta/");
        assert_eq!(
            p.api_url("generateContent"),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent?key=secret"
        );
    }

    #[test]
    fn request_serializes_in_gemini_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![ContentPart::Text {
                    text: "hi".to_string(),
                }],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contents": [{"role": "user", "parts": [{"text": "hi"}]}]})
        );
    }

    #[test]
    fn response_maps_text_and_inline_parts() {
        let raw = serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "Paris"},
                        {"inlineData": {"mimeType": "image/png", "data": "AAAA"}}
                    ]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 1}
        });

        let parsed: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        let response = parsed.into_generate_response();

        assert_eq!(response.candidates.len(), 1);
        let candidate = &response.candidates[0];
        assert_eq!(candidate.finish_reason.as_deref(), Some("STOP"));
        assert_eq!(candidate.parts[0], Part::Text("Paris".to_string()));
        assert_eq!(
            candidate.parts[1],
            Part::InlineData {
                mime_type: "image/png".to_string(),
                data: "AAAA".to_string()
            }
        );
    }

    #[test]
    fn blocked_candidate_has_no_parts() {
        let raw = serde_json::json!({
            "candidates": [{"finishReason": "SAFETY"}]
        });

        let parsed: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        let response = parsed.into_generate_response();

        assert_eq!(response.candidates.len(), 1);
        assert!(response.candidates[0].parts.is_empty());
    }

    #[test]
    fn missing_candidates_yield_empty_response() {
        let parsed: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(parsed.into_generate_response().candidates.is_empty());
    }
}
