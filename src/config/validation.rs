//! Configuration validation module
//!
//! This module provides validation functions for the policy-core
//! configuration to ensure all settings carry usable values.

use super::Settings;
use crate::utils::errors::{Result, SoireoError};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_policy_config(&settings.policy)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate policy engine configuration
fn validate_policy_config(config: &super::PolicyConfig) -> Result<()> {
    if !(config.jitter_degrees > 0.0 && config.jitter_degrees <= 1.0) {
        return Err(SoireoError::Config(format!(
            "Jitter must be in (0, 1] degrees, got {}",
            config.jitter_degrees
        )));
    }

    if config.default_event_duration_hours == 0 {
        return Err(SoireoError::Config(
            "Default event duration must be at least 1 hour".to_string(),
        ));
    }

    if config.status_sweep_interval_minutes == 0 {
        return Err(SoireoError::Config(
            "Status sweep interval must be at least 1 minute".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(SoireoError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(SoireoError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
