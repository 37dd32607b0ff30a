//! Error types for remote generation
//!
//! Every variant is recovered by the assembler, which falls back to the
//! local generator. They only surface in logs.

use std::time::Duration;
use thiserror::Error;

/// Error raised while asking the generation collaborator for slot content
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No credential configured
    #[error("Credential not configured: {env_var} is not set")]
    MissingCredential { env_var: String },

    /// Request timed out
    #[error("Request timed out after {duration:?}")]
    Timeout { duration: Duration },

    /// Network error occurred
    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// API returned a non-success status
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Response carried no text content
    #[error("Empty response from {provider}")]
    EmptyResponse { provider: String },

    /// Response text contained no JSON object
    #[error("No JSON object found in response")]
    MissingJson,

    /// Parsing or deserialization error
    #[error("Parsing error: {message}")]
    ParseError { message: String },
}

impl GenerationError {
    /// Create a missing credential error
    pub fn missing_credential(env_var: impl Into<String>) -> Self {
        Self::MissingCredential { env_var: env_var.into() }
    }

    /// Create a timeout error
    pub fn timeout(duration: Duration) -> Self {
        Self::Timeout { duration }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError { message: message.into() }
    }

    /// Create an API error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError { status, message: message.into() }
    }

    /// Create an empty response error
    pub fn empty_response(provider: impl Into<String>) -> Self {
        Self::EmptyResponse { provider: provider.into() }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError { message: message.into() }
    }
}

/// Result type for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Convert from JSON errors
impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError { message: err.to_string() }
    }
}

/// Convert from transport errors
impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::ParseError { message: err.to_string() }
        } else {
            Self::NetworkError { message: err.to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GenerationError::missing_credential("ANTHROPIC_API_KEY");
        assert_eq!(err.to_string(), "Credential not configured: ANTHROPIC_API_KEY is not set");

        let err = GenerationError::api(529, "overloaded");
        assert_eq!(err.to_string(), "API error (status 529): overloaded");

        let err = GenerationError::timeout(Duration::from_secs(5));
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: GenerationError = json_err.into();
        assert!(matches!(err, GenerationError::ParseError { .. }));
    }
}
