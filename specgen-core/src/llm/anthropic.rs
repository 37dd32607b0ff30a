//! Anthropic Messages API client
//!
//! Exactly one request per call. There is no retry loop and no rate
//! limiting: a failed call is handed back to the assembler, which falls back
//! to the local generator.

use super::errors::{GenerationError, GenerationResult};
use super::traits::GenerationClient;
use crate::config::GenerationConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Generation client for Anthropic's models
pub struct AnthropicClient {
    client: Client,
    config: GenerationConfig,
    api_key: String,
}

impl AnthropicClient {
    pub fn new(config: GenerationConfig, api_key: impl Into<String>) -> GenerationResult<Self> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;

        Ok(Self { client, config, api_key: api_key.into() })
    }

    /// Build a client from the credential named by `config.api_key_env`.
    /// An unset or blank variable is a [`GenerationError::MissingCredential`].
    pub fn from_env(config: &GenerationConfig) -> GenerationResult<Self> {
        match std::env::var(&config.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Self::new(config.clone(), key.trim()),
            _ => Err(GenerationError::missing_credential(&config.api_key_env)),
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn transport_error(&self, err: reqwest::Error) -> GenerationError {
        if err.is_timeout() {
            GenerationError::timeout(Duration::from_secs(self.config.timeout_secs))
        } else {
            GenerationError::network(err.to_string())
        }
    }
}

#[async_trait]
impl GenerationClient for AnthropicClient {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        let request = MessageRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            messages: vec![Message { role: "user", content: prompt }],
        };

        debug!("Sending {} prompt bytes to {}", prompt.len(), self.config.endpoint);

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.config.api_version)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerationError::api(status.as_u16(), error_text));
        }

        let result: MessageResponse =
            response.json().await.map_err(|err| GenerationError::parse(err.to_string()))?;

        result
            .content
            .into_iter()
            .find_map(|block| match block {
                Content::Text { text } => Some(text),
                Content::Other => None,
            })
            .ok_or_else(|| GenerationError::empty_response(self.name()))
    }
}

/// Message structure for the Messages API
#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

/// Messages API request
#[derive(Debug, Serialize)]
struct MessageRequest<'a> {
    model: &'a str,
    max_tokens: usize,
    messages: Vec<Message<'a>>,
}

/// Messages API response
#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: Vec<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Content {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = MessageRequest {
            model: "claude-3-5-sonnet-20241022",
            max_tokens: 8000,
            messages: vec![Message { role: "user", content: "hello" }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "claude-3-5-sonnet-20241022");
        assert_eq!(json["max_tokens"], 8000);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_response_takes_text_blocks() {
        let body = r#"{"content":[{"type":"thinking","thinking":"..."},{"type":"text","text":"{}"}]}"#;
        let response: MessageResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.content.len(), 2);
        assert!(matches!(&response.content[1], Content::Text { text } if text == "{}"));
    }

    #[test]
    fn test_missing_credential() {
        let config = GenerationConfig {
            api_key_env: "SPECGEN_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..GenerationConfig::default()
        };

        let err = AnthropicClient::from_env(&config).err().unwrap();
        assert!(matches!(err, GenerationError::MissingCredential { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_network_error() {
        let config = GenerationConfig {
            endpoint: "http://127.0.0.1:9/v1/messages".to_string(),
            timeout_secs: 5,
            ..GenerationConfig::default()
        };
        let client = AnthropicClient::new(config, "test-key").unwrap();

        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::NetworkError { .. } | GenerationError::Timeout { .. }
        ));
    }
}
