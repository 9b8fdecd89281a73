//! Analysis Service Use Case
//!
//! Produces one natural-language analysis of a difference list plus an
//! entity map. Large inputs are routed through a map-then-synthesize
//! strategy to respect the generation service's per-call budget: one call
//! per fixed-size chunk in order, then exactly one synthesis call over the
//! collected outputs. Small inputs take a single direct call.
//!
//! Generation calls are strictly sequential. The first failure aborts the
//! invocation; partial chunk outputs are discarded and never returned.

use crate::domain_services::chunking::{chunk_lines, select_route, AnalysisRoute};
use crate::domain_services::prompts::{
    analysis_prompt, synthesis_prompt, ANALYSIS_SYSTEM_ROLE, SYNTHESIS_SYSTEM_ROLE,
};
use crate::ports::{GenerationRequest, SharedGenerationProvider};
use cdv_domain::constants::{
    DEFAULT_CHUNK_SIZE, GENERATION_MAX_TOKENS, GENERATION_TEMPERATURE, LARGE_INPUT_THRESHOLD,
};
use cdv_domain::error::{Error, Result};
use cdv_domain::value_objects::EntityMap;
use tracing::{debug, info};

/// Tuning options for the analysis pipeline
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    /// Difference lines per generation-facing chunk
    pub chunk_size: usize,
    /// Difference-line count above which the chunked path is taken
    pub large_input_threshold: usize,
    /// Output token budget per generation call
    pub max_tokens: u32,
    /// Sampling temperature for every call
    pub temperature: f32,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            large_input_threshold: LARGE_INPUT_THRESHOLD,
            max_tokens: GENERATION_MAX_TOKENS,
            temperature: GENERATION_TEMPERATURE,
        }
    }
}

/// Analysis service - routes difference lists through the generation service
pub struct AnalysisService {
    provider: SharedGenerationProvider,
    options: AnalysisOptions,
}

impl AnalysisService {
    /// Create a new analysis service with an injected generation provider
    /// and default options
    pub fn new(provider: SharedGenerationProvider) -> Self {
        Self::with_options(provider, AnalysisOptions::default())
    }

    /// Create a new analysis service with explicit options
    pub fn with_options(provider: SharedGenerationProvider, options: AnalysisOptions) -> Self {
        Self { provider, options }
    }

    /// Analyze a difference list against the extracted entities.
    ///
    /// Implements the two-state machine: inputs at or below the large-input
    /// threshold take one direct call whose output is returned verbatim;
    /// larger inputs are chunked, analyzed chunk by chunk in order, and
    /// merged by exactly one synthesis call whose output is returned
    /// verbatim. Any provider failure is re-signaled as
    /// [`Error::Analysis`] carrying the original message; no partial
    /// results survive.
    pub async fn analyze(&self, differences: &[String], entities: &EntityMap) -> Result<String> {
        let route = select_route(differences.len(), self.options.large_input_threshold);
        debug!(
            differences = differences.len(),
            route = ?route,
            provider = self.provider.provider_name(),
            "Routing analysis"
        );

        let result = match route {
            AnalysisRoute::Direct => self.analyze_chunk(differences, entities).await,
            AnalysisRoute::Chunked => self.analyze_chunked(differences, entities).await,
        };

        result.map_err(|e| Error::analysis(format!("error analyzing differences: {e}")))
    }

    /// Loosely-typed boundary entry for callers holding untyped JSON.
    ///
    /// Validates that `differences` is an array of strings and rejects
    /// anything else with [`Error::InvalidInput`] before any generation
    /// call is attempted.
    pub async fn analyze_value(
        &self,
        differences: &serde_json::Value,
        entities: &EntityMap,
    ) -> Result<String> {
        let items = differences.as_array().ok_or_else(|| {
            Error::invalid_input("differences must be an ordered sequence of strings")
        })?;

        let lines = items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_owned).ok_or_else(|| {
                    Error::invalid_input("differences must contain only string elements")
                })
            })
            .collect::<Result<Vec<String>>>()?;

        self.analyze(&lines, entities).await
    }

    /// One generation call over a set of difference lines. Used for the
    /// direct path and for every chunk of the chunked path.
    async fn analyze_chunk(&self, chunk: &[String], entities: &EntityMap) -> Result<String> {
        self.provider
            .generate(GenerationRequest {
                system_role: ANALYSIS_SYSTEM_ROLE.to_string(),
                prompt: analysis_prompt(chunk, entities),
                max_tokens: self.options.max_tokens,
                temperature: self.options.temperature,
            })
            .await
    }

    /// Chunked path: per-chunk calls in order, then one synthesis call.
    async fn analyze_chunked(&self, differences: &[String], entities: &EntityMap) -> Result<String> {
        let chunks = chunk_lines(differences, self.options.chunk_size);
        info!(
            chunks = chunks.len(),
            chunk_size = self.options.chunk_size,
            "Large input, analyzing in chunks"
        );

        let mut chunk_analyses = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            let analysis = self.analyze_chunk(chunk, entities).await?;
            chunk_analyses.push(analysis);
        }

        self.synthesize(&chunk_analyses).await
    }

    /// Synthesis call merging the per-chunk analyses into one report.
    async fn synthesize(&self, chunk_analyses: &[String]) -> Result<String> {
        self.provider
            .generate(GenerationRequest {
                system_role: SYNTHESIS_SYSTEM_ROLE.to_string(),
                prompt: synthesis_prompt(chunk_analyses),
                max_tokens: self.options.max_tokens,
                temperature: self.options.temperature,
            })
            .await
    }
}
