//! Mock generation client for testing
//!
//! Only compiled for unit tests.

#![cfg(test)]

use super::errors::{GenerationError, GenerationResult};
use super::traits::GenerationClient;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock client returning queued responses and errors in order
#[derive(Clone, Default)]
pub struct MockGenerationClient {
    outcomes: Arc<Mutex<VecDeque<GenerationResult<String>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock whose first call answers with `text`
    pub fn answering(text: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.push_response(text);
        mock
    }

    /// Mock whose first call fails with `error`
    pub fn failing(error: GenerationError) -> Self {
        let mock = Self::new();
        mock.push_error(error);
        mock
    }

    pub fn push_response(&self, text: impl Into<String>) {
        self.outcomes.lock().unwrap().push_back(Ok(text.into()));
    }

    pub fn push_error(&self, error: GenerationError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::network("mock transport has no queued response")))
    }
}
