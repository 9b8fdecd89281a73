//! Pure Domain Services
//!
//! Side-effect-free building blocks of the analysis pipeline: partitioning
//! difference lines into chunks, the routing decision between the direct
//! and chunked paths, and prompt construction.

/// Chunk partitioning and route selection
pub mod chunking;
/// Prompt templates and system roles
pub mod prompts;

pub use chunking::{chunk_lines, select_route, AnalysisRoute};
