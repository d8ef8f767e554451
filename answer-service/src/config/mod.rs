use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Public Gemini REST endpoint.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub models: ModelConfig,
    pub google: GoogleConfig,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model used for answering (e.g., gemini-1.5-flash)
    pub text_model: String,
    /// Base URL of the Gemini REST API
    pub api_base: String,
}

#[derive(Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
}

impl std::fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl AnswerConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(AnswerConfig {
            common: common_config,
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL))?,
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_API_BASE))?,
            },
            google: GoogleConfig {
                api_key: get_env("GOOGLE_API_KEY", None)?,
            },
            log_level: get_env("LOG_LEVEL", Some("info"))?,
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
        })
    }
}

/// Empty values count as unset.
fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(AppError::ConfigError(anyhow::anyhow!(
                "{} environment variable not set",
                key
            ))),
        },
    }
}
