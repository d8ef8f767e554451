use answer_service::config::{AnswerConfig, GoogleConfig, ModelConfig, DEFAULT_API_BASE};
use answer_service::services::providers::TextProvider;
use answer_service::startup::{build_router, AppState};
use axum::Router;
use std::sync::Arc;

pub fn test_config() -> AnswerConfig {
    AnswerConfig {
        common: service_core::config::Config { port: 0 },
        models: ModelConfig {
            text_model: "gemini-1.5-flash".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        },
        google: GoogleConfig {
            api_key: "test-api-key".to_string(),
        },
        log_level: "error".to_string(),
        otlp_endpoint: None,
    }
}

#[allow(dead_code)]
pub fn router_with(provider: Arc<dyn TextProvider>) -> Router {
    build_router(AppState {
        config: test_config(),
        text_provider: provider,
    })
}
