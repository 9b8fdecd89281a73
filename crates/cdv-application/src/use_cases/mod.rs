//! Application Use Cases

/// Chunked analysis pipeline
pub mod analysis_service;

pub use analysis_service::{AnalysisOptions, AnalysisService};
