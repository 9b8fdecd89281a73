use async_trait::async_trait;
use cdv_domain::error::Result;
use std::sync::Arc;

/// A single request to the text-generation service.
///
/// Carries everything one call needs: the system role framing the task,
/// the user prompt, and the sampling budget. Built fresh per call and
/// never reused across invocations.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// System role content framing the model's task
    pub system_role: String,
    /// User prompt content
    pub prompt: String,
    /// Maximum output tokens for this call
    pub max_tokens: u32,
    /// Sampling temperature; the pipeline fixes this low for reproducibility
    pub temperature: f32,
}

/// Text-Generation Service Interface
///
/// Defines the business contract for providers that turn a prompt into
/// generated text. The pipeline treats the service as a black box: one
/// request in, one text blob out, any failure surfaced as a domain error.
/// Implementations receive their HTTP client and credentials by
/// constructor injection; there is no ambient global client.
///
/// # Example
///
/// ```ignore
/// use cdv_application::ports::{GenerationProvider, GenerationRequest};
///
/// async fn call(provider: &dyn GenerationProvider) -> cdv_domain::Result<String> {
///     provider
///         .generate(GenerationRequest {
///             system_role: "You are a legal document analyzer.".into(),
///             prompt: "Summarize the changes.".into(),
///             max_tokens: 2048,
///             temperature: 0.1,
///         })
///         .await
/// }
/// ```
#[async_trait]
pub trait GenerationProvider: Send + Sync + std::fmt::Debug {
    /// Issue one generation call and return the generated text
    async fn generate(&self, request: GenerationRequest) -> Result<String>;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "groq", "null")
    fn provider_name(&self) -> &str;
}

/// Shared generation provider for constructor injection
pub type SharedGenerationProvider = Arc<dyn GenerationProvider>;
