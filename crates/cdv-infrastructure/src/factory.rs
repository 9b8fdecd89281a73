//! Provider Factory
//!
//! Factory for creating generation providers based on configuration.
//! Follows the Factory pattern to abstract provider instantiation.
//!
//! All provider implementations come from the cdv-providers crate; this
//! factory only handles wiring and dependency injection.

use std::sync::Arc;
use std::time::Duration;

use cdv_application::ports::{GenerationProvider, SharedGenerationProvider};
use cdv_domain::error::{Error, Result};
use cdv_providers::generation::{GroqGenerationProvider, NullGenerationProvider};
use reqwest::Client;

use crate::config::GenerationConfig;

/// Known generation provider names
pub mod generation_providers {
    pub const GROQ: &str = "groq";
    pub const NULL: &str = "null";
}

/// Factory for creating generation providers
pub struct GenerationProviderFactory;

impl GenerationProviderFactory {
    /// Create a generation provider based on configuration
    ///
    /// The `http_client` parameter is optional. If not provided, a default
    /// client will be created for providers that need HTTP access.
    pub fn create(
        config: &GenerationConfig,
        http_client: Option<Client>,
    ) -> Result<SharedGenerationProvider> {
        let provider_name = config.provider.to_lowercase();

        match provider_name.as_str() {
            generation_providers::NULL => Ok(Arc::new(NullGenerationProvider::new())),
            generation_providers::GROQ => Self::create_groq(config, http_client),
            _ => Err(Error::Configuration {
                message: format!("Unknown generation provider: {}", config.provider),
                source: None,
            }),
        }
    }

    fn create_groq(
        config: &GenerationConfig,
        http_client: Option<Client>,
    ) -> Result<SharedGenerationProvider> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Self::require_http_client(http_client, timeout)?;
        let api_key = Self::require_api_key(config, "Groq")?;
        Ok(Arc::new(GroqGenerationProvider::new(
            api_key,
            config.base_url.clone(),
            config.model.clone(),
            timeout,
            client,
        )))
    }

    fn require_http_client(client: Option<Client>, timeout: Duration) -> Result<Client> {
        match client {
            Some(client) => Ok(client),
            None => Self::create_default_http_client(timeout),
        }
    }

    fn require_api_key(config: &GenerationConfig, provider: &str) -> Result<String> {
        config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Configuration {
                message: format!("API key required for {} provider", provider),
                source: None,
            })
    }

    /// Create a default null provider (for testing/development)
    pub fn create_null() -> Arc<dyn GenerationProvider> {
        Arc::new(NullGenerationProvider::new())
    }

    /// Create default HTTP client for providers that need it
    fn create_default_http_client(timeout: Duration) -> Result<Client> {
        Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(Box::new(e)),
            })
    }
}
