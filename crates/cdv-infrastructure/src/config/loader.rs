//! Configuration loader
//!
//! Handles loading configuration from defaults, a TOML file, and
//! environment variables, using figment for source merging. Validation
//! runs at load time so a misconfigured provider fails fast with a
//! descriptive error instead of surfacing mid-analysis.

use crate::config::types::AppConfig;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use cdv_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "CDV";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cdv.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cdv";

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources
    /// override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with prefix and double-underscore
    ///    separator (e.g., `CDV_GENERATION__API_KEY`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nesting levels so field names may
        // themselves contain underscores (CDV_GENERATION__API_KEY)
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("__"));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config)
            .config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .config_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find a default configuration file, trying common locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections; called on every load.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_generation_config(config)?;
    validate_analysis_config(config)?;
    validate_logging_config(config)?;
    Ok(())
}

fn validate_generation_config(config: &AppConfig) -> Result<()> {
    let generation = &config.generation;

    match generation.provider.as_str() {
        "groq" => {
            // Credential absence fails here, at construction time, not on
            // the first generation call
            if generation
                .api_key
                .as_deref()
                .is_none_or(|key| key.trim().is_empty())
            {
                return Err(Error::configuration(
                    "generation API key is required for the groq provider \
                     (set CDV_GENERATION__API_KEY or generation.api_key)",
                ));
            }
        }
        "null" => {}
        other => {
            return Err(Error::configuration(format!(
                "Unknown generation provider: {other}"
            )));
        }
    }

    if generation.timeout_secs == 0 {
        return Err(Error::configuration("Generation timeout cannot be 0"));
    }
    if generation.max_tokens == 0 {
        return Err(Error::configuration("Generation max_tokens cannot be 0"));
    }
    if !(0.0..=2.0).contains(&generation.temperature) {
        return Err(Error::configuration(format!(
            "Generation temperature must be within [0.0, 2.0], got {}",
            generation.temperature
        )));
    }
    Ok(())
}

fn validate_analysis_config(config: &AppConfig) -> Result<()> {
    if config.analysis.chunk_size == 0 {
        return Err(Error::configuration("Analysis chunk size cannot be 0"));
    }
    if config.analysis.large_input_threshold == 0 {
        return Err(Error::configuration(
            "Analysis large-input threshold cannot be 0",
        ));
    }
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(|_| ())
}
