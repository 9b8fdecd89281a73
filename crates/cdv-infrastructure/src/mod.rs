//! # Contract Diff Validator - Infrastructure Layer
//!
//! Cross-cutting technical concerns: configuration loading and validation,
//! structured logging, error-context utilities, and the factory that wires
//! configuration into a concrete generation provider.

/// Configuration loading, types, and validation
pub mod config;
/// Error extension utilities
pub mod error_ext;
/// Provider factory - configuration to concrete adapters
pub mod factory;
/// Structured logging with tracing
pub mod logging;

pub use config::{AnalysisConfig, AppConfig, ConfigLoader, GenerationConfig, LoggingConfig};
pub use factory::GenerationProviderFactory;
pub use logging::{init_logging, parse_log_level};
