//! Provider Ports

/// Text-generation provider port
pub mod generation;

pub use generation::{GenerationProvider, GenerationRequest, SharedGenerationProvider};
