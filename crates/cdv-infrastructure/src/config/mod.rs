//! Configuration
//!
//! Serde configuration types plus the figment-based loader that merges
//! defaults, an optional TOML file, and `CDV_`-prefixed environment
//! variables, then validates the result at load time.

/// Configuration loader
pub mod loader;
/// Configuration types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AnalysisConfig, AppConfig, GenerationConfig, LoggingConfig};
