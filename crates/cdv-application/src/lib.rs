//! # Contract Diff Validator - Application Layer
//!
//! Use cases and business-logic orchestration. Defines the port for the
//! external text-generation service ([`ports::GenerationProvider`]), the
//! pure domain services for chunking, routing, and prompt construction
//! ([`domain_services`]), and the chunked analysis pipeline use case
//! ([`use_cases::AnalysisService`]).
//!
//! Provider implementations live in `cdv-providers`; configuration and
//! wiring live in `cdv-infrastructure`.

/// Pure domain services - chunking, routing, prompts
pub mod domain_services;
/// Ports - abstractions over external collaborators
pub mod ports;
/// Use cases - orchestration of ports and domain services
pub mod use_cases;

pub use ports::{GenerationProvider, GenerationRequest, SharedGenerationProvider};
pub use use_cases::{AnalysisOptions, AnalysisService};
