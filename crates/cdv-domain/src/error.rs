//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Contract Diff Validator
#[derive(Error, Debug)]
pub enum Error {
    /// Caller supplied input that is not a sequence of strings.
    /// Raised at the pipeline boundary before any external call.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the invalid input
        message: String,
    },

    /// The analysis pipeline failed. Wraps any error surfaced by the
    /// text-generation service during direct analysis, a per-chunk call,
    /// or the synthesis call; carries the original failure's message.
    #[error("Analysis failed: {message}")]
    Analysis {
        /// Description including the original failure text
        message: String,
    },

    /// Text-generation provider operation error
    #[error("Generation provider error: {message}")]
    Generation {
        /// Description of the provider error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Generic string-based error
    #[error("String error: {0}")]
    String(String),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an analysis error
    pub fn analysis<S: Into<String>>(message: S) -> Self {
        Self::Analysis {
            message: message.into(),
        }
    }

    /// Create a generation provider error
    pub fn generation<S: Into<String>>(message: S) -> Self {
        Self::Generation {
            message: message.into(),
            source: None,
        }
    }

    /// Create a generation provider error with source
    pub fn generation_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Generation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
