//! Prompt Templates
//!
//! Deterministic prompt construction for the generation service. The same
//! analysis template serves both the direct path and every per-chunk call;
//! the synthesis template merges per-chunk outputs into one report.

use cdv_domain::value_objects::EntityMap;

/// System role for direct and per-chunk analysis calls
pub const ANALYSIS_SYSTEM_ROLE: &str =
    "You are a legal document analyzer. Analyze the differences between contract versions.";

/// System role for the synthesis call
pub const SYNTHESIS_SYSTEM_ROLE: &str =
    "Synthesize multiple contract analysis chunks into a coherent summary.";

/// Build the analysis prompt for a set of difference lines and the
/// extracted entities. Deterministic: identical inputs produce identical
/// prompts.
pub fn analysis_prompt(differences: &[String], entities: &EntityMap) -> String {
    format!(
        "Analyze these contract differences:\n\
         \n\
         Changes:\n\
         {changes}\n\
         \n\
         Named Entities Found:\n\
         {entities}\n\
         \n\
         Please provide:\n\
         1. Summary of key changes\n\
         2. Any suspicious modifications\n\
         3. Analysis of added/removed clauses",
        changes = differences.join("\n"),
        entities = entities.render(),
    )
}

/// Build the synthesis prompt over the collected per-chunk analyses,
/// newline-joined in chunk order.
pub fn synthesis_prompt(chunk_analyses: &[String]) -> String {
    format!(
        "Synthesize these analysis chunks into a coherent summary:\n\
         \n\
         {analyses}\n\
         \n\
         Provide:\n\
         1. Overall summary of key changes\n\
         2. Major suspicious modifications\n\
         3. Critical clause changes",
        analyses = chunk_analyses.join("\n"),
    )
}
