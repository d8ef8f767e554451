//! Startup configuration tests. Kept to a single test so that environment
//! mutation cannot race with other tests in the same binary.

use answer_service::config::AnswerConfig;
use service_core::error::AppError;

#[test]
fn google_api_key_is_required() {
    std::env::remove_var("GOOGLE_API_KEY");
    std::env::set_var("PORT", "9191");

    let err = AnswerConfig::load().expect_err("config must not load without an API key");
    assert!(matches!(err, AppError::ConfigError(_)));
    assert!(err.to_string().contains("GOOGLE_API_KEY"));

    std::env::set_var("GOOGLE_API_KEY", "");
    assert!(AnswerConfig::load().is_err(), "empty key counts as unset");

    std::env::set_var("GOOGLE_API_KEY", "test-api-key");
    let config = AnswerConfig::load().expect("config loads once the key is set");
    assert_eq!(config.common.port, 9191);
    assert_eq!(config.google.api_key, "test-api-key");
}
