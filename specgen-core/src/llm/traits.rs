//! Seam between the assembler and whatever produces slot text

use super::errors::GenerationResult;
use async_trait::async_trait;

/// A text-generation collaborator. One call, one prompt, one answer.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Send `prompt` as a single user message and return the generated text
    async fn generate(&self, prompt: &str) -> GenerationResult<String>;
}
