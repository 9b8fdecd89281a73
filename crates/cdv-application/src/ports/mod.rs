//! Application Ports
//!
//! Abstractions the application layer depends on. Concrete adapters are
//! provided by the providers crate and wired in by infrastructure.

/// Provider ports for external services
pub mod providers;

pub use providers::{GenerationProvider, GenerationRequest, SharedGenerationProvider};
