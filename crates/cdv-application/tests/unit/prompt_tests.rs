//! Unit tests for prompt construction

use cdv_application::domain_services::prompts::{
    analysis_prompt, synthesis_prompt, ANALYSIS_SYSTEM_ROLE, SYNTHESIS_SYSTEM_ROLE,
};
use cdv_domain::value_objects::EntityMap;

fn sample_entities() -> EntityMap {
    let mut entities = EntityMap::new();
    entities.insert("MONEY", "$50,000");
    entities.insert("MONEY", "$60,000");
    entities.insert("ORG", "ACME Corp");
    entities.insert("PERSON", "John Doe");
    entities
}

#[test]
fn test_analysis_prompt_embeds_changes_and_entities() {
    let differences = vec![
        "- Original: Salary of $50,000".to_string(),
        "+ Modified: Salary of $60,000".to_string(),
    ];
    let prompt = analysis_prompt(&differences, &sample_entities());

    assert!(prompt.contains("Changes:"));
    assert!(prompt.contains("- Original: Salary of $50,000"));
    assert!(prompt.contains("+ Modified: Salary of $60,000"));
    assert!(prompt.contains("Named Entities Found:"));
    assert!(prompt.contains("MONEY: $50,000, $60,000"));
    assert!(prompt.contains("Summary of key changes"));
}

#[test]
fn test_analysis_prompt_is_deterministic() {
    let differences = vec!["- removed clause".to_string()];
    let entities = sample_entities();
    assert_eq!(
        analysis_prompt(&differences, &entities),
        analysis_prompt(&differences, &entities)
    );
}

#[test]
fn test_analysis_prompt_empty_differences() {
    let prompt = analysis_prompt(&[], &EntityMap::new());
    assert!(prompt.contains("Changes:"));
    assert!(prompt.contains("Named Entities Found:"));
}

#[test]
fn test_synthesis_prompt_joins_chunk_outputs_in_order() {
    let analyses = vec!["Analysis 1".to_string(), "Analysis 2".to_string()];
    let prompt = synthesis_prompt(&analyses);

    assert!(prompt.contains("Analysis 1\nAnalysis 2"));
    assert!(prompt.contains("Overall summary of key changes"));
    assert!(prompt.contains("Major suspicious modifications"));
    assert!(prompt.contains("Critical clause changes"));
}

#[test]
fn test_system_roles_differ_between_phases() {
    assert_ne!(ANALYSIS_SYSTEM_ROLE, SYNTHESIS_SYSTEM_ROLE);
    assert!(ANALYSIS_SYSTEM_ROLE.contains("legal document analyzer"));
    assert!(SYNTHESIS_SYSTEM_ROLE.contains("Synthesize"));
}
