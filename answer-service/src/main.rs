use answer_service::config::AnswerConfig;
use answer_service::services::metrics::init_metrics;
use answer_service::startup::Application;
use service_core::error::AppError;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Fail fast: nothing is served without a usable configuration.
    let config = AnswerConfig::load().map_err(|e| {
        eprintln!("{}", e);
        e
    })?;

    init_tracing(
        "answer-service",
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );

    init_metrics().map_err(AppError::ConfigError)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.common.port,
        model = %config.models.text_model,
        "Starting answer service"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}
