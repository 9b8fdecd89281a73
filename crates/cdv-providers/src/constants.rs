//! Provider constants

/// Content-Type header value for JSON request bodies
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Default Groq API base URL (OpenAI-compatible surface)
pub const GROQ_DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default Groq model used for contract analysis
pub const GROQ_DEFAULT_MODEL: &str = "llama-3.2-90b-vision-preview";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "request timed out after";
