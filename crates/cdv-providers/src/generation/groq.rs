//! Groq Generation Provider
//!
//! Implements the GenerationProvider port against Groq's OpenAI-compatible
//! chat-completions API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use cdv_application::ports::{GenerationProvider, GenerationRequest};
use cdv_domain::error::{Error, Result};

use crate::constants::{
    CONTENT_TYPE_JSON, ERROR_MSG_REQUEST_TIMEOUT, GROQ_DEFAULT_BASE_URL, GROQ_DEFAULT_MODEL,
};

/// Groq generation provider
///
/// Implements the `GenerationProvider` port using Groq's chat-completions
/// API. Receives HTTP client and credentials via constructor injection;
/// there is no ambient global client or lazy environment lookup.
///
/// ## Example
///
/// ```rust,no_run
/// use cdv_providers::generation::GroqGenerationProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let provider = GroqGenerationProvider::new(
///         "gsk-your-api-key".to_string(),
///         None,
///         None,
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct GroqGenerationProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl GroqGenerationProvider {
    /// Create a new Groq generation provider
    ///
    /// # Arguments
    /// * `api_key` - Groq API key
    /// * `base_url` - Optional custom base URL (defaults to the Groq API)
    /// * `model` - Optional model name (defaults to the contract-analysis model)
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key,
            base_url: base_url.filter(|url| !url.trim().is_empty()),
            model: model.unwrap_or_else(|| GROQ_DEFAULT_MODEL.to_string()),
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(GROQ_DEFAULT_BASE_URL)
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a chat-completions request and get the response body
    async fn fetch_completion(&self, request: &GenerationRequest) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "messages": [
                { "role": "system", "content": request.system_role },
                { "role": "user", "content": request.prompt }
            ],
            "model": self.model,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        debug!(
            model = %self.model,
            prompt_chars = request.prompt.len(),
            "Sending generation request"
        );

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url()))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::generation(format!("{ERROR_MSG_REQUEST_TIMEOUT} {:?}", self.timeout))
                } else {
                    Error::generation_with_source(format!("HTTP request failed: {e}"), e)
                }
            })?;

        Self::check_and_parse(response).await
    }

    /// Check the response status and parse the body as JSON
    async fn check_and_parse(response: reqwest::Response) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = Self::error_detail(&body);
            let code = status.as_u16();

            return Err(match code {
                401 => Error::generation(format!("Groq authentication failed: {detail}")),
                429 => Error::generation(format!("Groq rate limit exceeded: {detail}")),
                500..=599 => Error::generation(format!("Groq server error ({code}): {detail}")),
                _ => Error::generation(format!("Groq request failed ({code}): {detail}")),
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::generation_with_source("Groq response parse failed".to_string(), e))
    }

    /// Pull the human-readable message out of a Groq failure body.
    ///
    /// Groq reports failures as `{"error": {"message": ..., "type": ...}}`;
    /// anything else falls back to the raw body text.
    fn error_detail(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(str::to_owned))
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    "no response body".to_string()
                } else {
                    body.to_string()
                }
            })
    }

    /// Extract the generated text from a chat-completions response body
    fn parse_content(response: &serde_json::Value) -> Result<String> {
        response["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| {
                Error::generation("Invalid response format: missing message content".to_string())
            })
    }
}

#[async_trait]
impl GenerationProvider for GroqGenerationProvider {
    async fn generate(&self, request: GenerationRequest) -> Result<String> {
        let response = self.fetch_completion(&request).await?;
        Self::parse_content(&response)
    }

    fn provider_name(&self) -> &str {
        "groq"
    }
}
