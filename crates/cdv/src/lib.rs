//! # Contract Diff Validator
//!
//! Line-level comparison of contract document versions with LLM-backed
//! analysis of the resulting differences.
//!
//! This crate provides the main public API for the Contract Diff
//! Validator. It re-exports the layered crates and the most commonly
//! used types at the root.
//!
//! ## Features
//!
//! - **Line Diff**: Three-way line classification (kept, deleted, inserted)
//!   with a character-level similarity ratio
//! - **Side-by-Side Alignment**: Opcode-driven pairing of old and new lines
//! - **Chunked Analysis**: Large difference sets are split into fixed-size
//!   chunks, analyzed per chunk, then synthesized into one summary
//! - **Clean Architecture**: Domain-driven design with constructor injection
//!
//! ## Example
//!
//! ```ignore
//! use cdv::{AnalysisService, DiffEngine, EntityMap};
//! use cdv::infrastructure::{ConfigLoader, GenerationProviderFactory};
//!
//! # async fn example() -> cdv::Result<()> {
//! let config = ConfigLoader::new().load()?;
//! let provider = GenerationProviderFactory::create(&config.generation, None)?;
//! let service = AnalysisService::new(provider);
//!
//! let comparison = DiffEngine::compare(old_contract, new_contract);
//! let report = service
//!     .analyze(&comparison.difference_lines(), &EntityMap::new())
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The codebase follows Clean Architecture principles:
//!
//! - `domain` - Diff engine, value objects, and domain errors
//! - `application` - Analysis pipeline, chunking policy, and provider ports
//! - `providers` - Generation provider adapters (Groq, null)
//! - `infrastructure` - Configuration, logging, and provider wiring

/// Domain layer - diff engine, value objects, and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cdv_domain::*;
}

/// Application layer - analysis pipeline and ports
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use cdv_application::*;
}

/// Provider adapters - generation backends
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use cdv_providers::*;
}

/// Infrastructure layer - config, logging, and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use cdv_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the analysis pipeline entry points
pub use application::use_cases::{AnalysisOptions, AnalysisService};

// Re-export the generation port for custom provider implementations
pub use application::ports::{GenerationProvider, GenerationRequest, SharedGenerationProvider};
