//! Configuration types

use cdv_domain::constants::{
    DEFAULT_CHUNK_SIZE, GENERATION_MAX_TOKENS, GENERATION_TEMPERATURE, LARGE_INPUT_THRESHOLD,
};
use serde::{Deserialize, Serialize};

/// Default generation request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Text-generation provider configuration
    pub generation: GenerationConfig,

    /// Analysis pipeline configuration
    pub analysis: AnalysisConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Text-generation provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Provider name ("groq" or "null")
    pub provider: String,

    /// API key for the provider. Required for providers that call an
    /// external service; validated at load time, never looked up lazily.
    pub api_key: Option<String>,

    /// Optional custom base URL
    pub base_url: Option<String>,

    /// Optional model name override
    pub model: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Output token budget per generation call
    pub max_tokens: u32,

    /// Sampling temperature for every call
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            api_key: None,
            base_url: None,
            model: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_tokens: GENERATION_MAX_TOKENS,
            temperature: GENERATION_TEMPERATURE,
        }
    }
}

/// Analysis pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Difference lines per generation-facing chunk
    pub chunk_size: usize,

    /// Difference-line count above which the chunked path is taken
    pub large_input_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            large_input_threshold: LARGE_INPUT_THRESHOLD,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}
