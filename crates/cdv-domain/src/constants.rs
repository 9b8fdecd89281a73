//! Domain layer constants
//!
//! Constants that are part of the analysis domain logic and are used by
//! the application layer. Provider-specific constants (endpoints, model
//! names) live in the providers crate.

// ============================================================================
// CHUNKING DOMAIN CONSTANTS
// ============================================================================

/// Default number of difference lines per generation-facing chunk
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// Difference-line count above which the chunked (map-then-synthesize)
/// path is taken instead of a single direct call
pub const LARGE_INPUT_THRESHOLD: usize = 1500;

// ============================================================================
// GENERATION DOMAIN CONSTANTS
// ============================================================================

/// Conservative per-call output token budget for the generation service
pub const GENERATION_MAX_TOKENS: u32 = 2048;

/// Fixed low temperature for reproducible, low-creativity analysis output
pub const GENERATION_TEMPERATURE: f32 = 0.1;
