//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for applications embedding the policy core.

use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// Returns the appender worker guard when a file path is configured; the
/// caller must hold it for the lifetime of the process or buffered log lines
/// are dropped on exit.
pub fn init_logging(
    config: &LoggingConfig,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout));

    let guard = match &config.file_path {
        Some(path) => {
            let file_appender = tracing_appender::rolling::daily(path, "soireo-core.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
                .init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a permissions computation with structured data
pub fn log_permissions_computed(event_id: &str, viewer_id: Option<&str>, role: &str) {
    debug!(
        event_id = event_id,
        viewer_id = viewer_id,
        role = role,
        "Permissions computed"
    );
}

/// Log an address-masking decision
pub fn log_address_masked(event_id: &str, viewer_id: Option<&str>) {
    debug!(
        event_id = event_id,
        viewer_id = viewer_id,
        "Address masked for unauthorized viewer"
    );
}

/// Log a lifecycle status write-back decision
pub fn log_status_refresh(event_id: &str, from: Option<&str>, to: &str) {
    info!(
        event_id = event_id,
        from = from,
        to = to,
        "Event status refreshed"
    );
}

/// Log a location document that predates the jitter migration
pub fn log_missing_jitter(city: &str) {
    warn!(
        city = city,
        "Location has no precomputed approximate coordinates"
    );
}
