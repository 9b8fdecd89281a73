//! Provider factory tests

use cdv_domain::error::Error;
use cdv_infrastructure::{GenerationConfig, GenerationProviderFactory};

fn null_config() -> GenerationConfig {
    GenerationConfig {
        provider: "null".to_string(),
        ..GenerationConfig::default()
    }
}

#[test]
fn creates_null_provider() {
    let provider =
        GenerationProviderFactory::create(&null_config(), None).expect("null provider created");
    assert_eq!(provider.provider_name(), "null");
}

#[test]
fn provider_name_matching_is_case_insensitive() {
    let config = GenerationConfig {
        provider: "NULL".to_string(),
        ..GenerationConfig::default()
    };
    assert!(GenerationProviderFactory::create(&config, None).is_ok());
}

#[test]
fn creates_groq_provider_with_api_key() {
    let config = GenerationConfig {
        api_key: Some("gsk-test-key".to_string()),
        ..GenerationConfig::default()
    };
    let provider =
        GenerationProviderFactory::create(&config, None).expect("groq provider created");
    assert_eq!(provider.provider_name(), "groq");
}

#[test]
fn groq_without_api_key_is_a_configuration_error() {
    let config = GenerationConfig::default();
    let err = GenerationProviderFactory::create(&config, None).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("API key required"));
}

#[test]
fn groq_with_blank_api_key_is_rejected() {
    let config = GenerationConfig {
        api_key: Some("  ".to_string()),
        ..GenerationConfig::default()
    };
    assert!(GenerationProviderFactory::create(&config, None).is_err());
}

#[test]
fn unknown_provider_is_a_configuration_error() {
    let config = GenerationConfig {
        provider: "openai".to_string(),
        ..GenerationConfig::default()
    };
    let err = GenerationProviderFactory::create(&config, None).unwrap_err();
    assert!(err.to_string().contains("Unknown generation provider"));
}

#[test]
fn accepts_injected_http_client() {
    let config = GenerationConfig {
        api_key: Some("gsk-test-key".to_string()),
        ..GenerationConfig::default()
    };
    let client = reqwest::Client::new();
    assert!(GenerationProviderFactory::create(&config, Some(client)).is_ok());
}

#[test]
fn create_null_helper_returns_null_provider() {
    let provider = GenerationProviderFactory::create_null();
    assert_eq!(provider.provider_name(), "null");
}
