//! # Contract Diff Validator - Providers
//!
//! Adapter implementations of the application-layer ports. Currently the
//! text-generation port has two adapters: the Groq chat-completions client
//! ([`generation::GroqGenerationProvider`]) and a deterministic offline
//! provider for development and tests
//! ([`generation::NullGenerationProvider`]).
//!
//! All adapters receive their HTTP client and credentials by constructor
//! injection; wiring from configuration happens in `cdv-infrastructure`.

/// Provider-level constants
pub mod constants;
/// Text-generation provider adapters
pub mod generation;

pub use generation::{GroqGenerationProvider, NullGenerationProvider};
