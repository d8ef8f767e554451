use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Load base settings from `configuration.*`, `APP__*` and finally `PORT`.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let port = std::env::var("PORT").ok().filter(|p| !p.is_empty());
        if port.is_none() {
            tracing::debug!("PORT not set, falling back to configuration sources");
        }

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", port)?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
