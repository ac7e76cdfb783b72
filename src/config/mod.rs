//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `MINGUS`
//! prefix and nested sections use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use mingus_assessment::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod features;
mod forecasting;
mod scoring;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use forecasting::ForecastingConfig;
pub use scoring::ScoringConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has working defaults; deployments override through the
/// environment, e.g. `MINGUS__SCORING__ADVANCED_MIN=85`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Level threshold configuration
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Forecast engine configuration
    #[serde(default)]
    pub forecasting: ForecastingConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present (development), then reads variables with
    /// the `MINGUS` prefix using `__` to separate nested values.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MINGUS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scoring.validate()?;
        self.forecasting.validate()?;
        Ok(())
    }
}
