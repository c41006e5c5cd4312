//! Tracing initialization

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Initialize JSON tracing from the configured log level
///
/// Falls back to `info` if the configured level does not parse as an
/// `EnvFilter` directive.
pub fn init_tracing(config: &Config) {
    let log_level = config.service.log_level.clone();

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(
        "Tracing initialized for service: {} ({})",
        config.service.name,
        config.service.environment
    );
}
