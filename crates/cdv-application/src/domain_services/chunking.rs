//! Chunk Partitioning and Route Selection
//!
//! Pure functions deciding how a difference list flows through the
//! pipeline. The routing decision is deliberately separated from the
//! side-effecting generation calls so it can be tested on its own.

/// Which path an analysis invocation takes. Selected once at entry by a
/// single threshold check; there are no further transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisRoute {
    /// Build one prompt from the full difference list, issue exactly one
    /// generation call, return its text verbatim
    Direct,
    /// Partition into fixed-size chunks, one call per chunk in order, then
    /// exactly one synthesis call over the collected outputs
    Chunked,
}

/// Select the route for a difference list of the given length.
///
/// Inputs at or below the threshold go direct; only strictly larger
/// inputs are chunked.
pub fn select_route(difference_count: usize, large_input_threshold: usize) -> AnalysisRoute {
    if difference_count > large_input_threshold {
        AnalysisRoute::Chunked
    } else {
        AnalysisRoute::Direct
    }
}

/// Partition lines into consecutive chunks of at most `size` elements.
///
/// Order and content are preserved, chunks never overlap, and the final
/// chunk may be shorter than `size`. An empty input yields no chunks.
pub fn chunk_lines(lines: &[String], size: usize) -> Vec<Vec<String>> {
    debug_assert!(size > 0, "chunk size must be positive");
    lines.chunks(size.max(1)).map(<[String]>::to_vec).collect()
}
