//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the policy core
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub policy: PolicyConfig,
    pub logging: LoggingConfig,
}

/// Tunable knobs of the policy engine
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PolicyConfig {
    /// Half-width of the uniform coordinate jitter, in degrees per axis
    pub jitter_degrees: f64,
    /// Assumed duration of events that carry no explicit end time
    pub default_event_duration_hours: u32,
    /// Cadence at which the embedding scheduler sweeps stale statuses
    pub status_sweep_interval_minutes: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily-rolling log file; stdout only when absent
    pub file_path: Option<String>,
}

impl PolicyConfig {
    /// Default event duration as a chrono `Duration`
    pub fn default_event_duration(&self) -> Duration {
        Duration::hours(i64::from(self.default_event_duration_hours))
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SOIREO"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::SoireoError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: PolicyConfig {
                jitter_degrees: 0.01,
                default_event_duration_hours: 3,
                status_sweep_interval_minutes: 5,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
