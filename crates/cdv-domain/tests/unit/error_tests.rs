//! Unit tests for the domain error type

use cdv_domain::error::Error;

#[test]
fn test_invalid_input_display() {
    let err = Error::invalid_input("differences must be a sequence of strings");
    assert_eq!(
        err.to_string(),
        "Invalid input: differences must be a sequence of strings"
    );
}

#[test]
fn test_analysis_error_carries_message() {
    let err = Error::analysis("error analyzing differences: rate limit exceeded");
    assert!(err.to_string().contains("rate limit exceeded"));
}

#[test]
fn test_generation_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
    let err = Error::generation_with_source("request failed", io);
    assert_eq!(err.to_string(), "Generation provider error: request failed");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_configuration_error_display() {
    let err = Error::configuration("generation API key is required");
    assert_eq!(
        err.to_string(),
        "Configuration error: generation API key is required"
    );
}

#[test]
fn test_from_string_conversions() {
    let err: Error = "plain failure".into();
    assert_eq!(err.to_string(), "String error: plain failure");

    let err: Error = String::from("owned failure").into();
    assert_eq!(err.to_string(), "String error: owned failure");
}
