//! Structured logging with tracing
//!
//! Centralized logging configuration using the tracing ecosystem:
//! level selection from configuration, `CDV_LOG` environment override,
//! and optional JSON output.

use cdv_domain::error::{Error, Result};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize logging with the provided configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env("CDV_LOG").unwrap_or_else(|_| EnvFilter::new(&config.level));

    // json/plain layers have different types, so separate branches
    if config.json_format {
        let stdout = fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        Registry::default().with(filter).with(stdout).init();
    } else {
        let stdout = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        Registry::default().with(filter).with(stdout).init();
    }

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &std::path::Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
