//! Text-Generation Provider Adapters

/// Groq chat-completions provider
pub mod groq;
/// Offline provider for development and tests
pub mod null;

pub use groq::GroqGenerationProvider;
pub use null::NullGenerationProvider;
