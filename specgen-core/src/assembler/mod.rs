//! Document assembly: record in, complete [`SlotSet`] out
//!
//! One remote attempt when a client is configured, then the local fallback.
//! Remote failures are logged and swallowed, so assembly itself never fails.

pub mod fallback;

use crate::config::GenerationConfig;
use crate::layout::StyleReference;
use crate::llm::{AnthropicClient, GenerationClient, GenerationError, GenerationResult};
use crate::prompts::SpecPrompt;
use crate::record::NormalizedRecord;
use crate::slots::SlotSet;
use regex_utils::json_payload;
use tracing::{debug, info, warn};

/// Where the slots of an assembled document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSource {
    Remote,
    Fallback,
}

pub struct Assembler {
    client: Option<Box<dyn GenerationClient>>,
}

impl Assembler {
    pub fn new(client: Option<Box<dyn GenerationClient>>) -> Self {
        Self { client }
    }

    /// Assembler that never calls out
    pub fn local() -> Self {
        Self { client: None }
    }

    /// Anthropic-backed assembler, or a local one when generation is
    /// disabled or no credential is available
    pub fn from_config(config: &GenerationConfig) -> Self {
        if !config.enabled {
            info!("Remote generation disabled, using local generator");
            return Self::local();
        }

        match AnthropicClient::from_env(config) {
            Ok(client) => {
                debug!("Using {} model {}", client.name(), client.model());
                Self::new(Some(Box::new(client)))
            }
            Err(err) => {
                warn!("{}; using local generator", err);
                Self::local()
            }
        }
    }

    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    pub async fn assemble(&self, record: &NormalizedRecord) -> SlotSet {
        self.assemble_with(record, None).await.0
    }

    /// Assemble slots, passing an optional style reference into the prompt
    pub async fn assemble_with(
        &self,
        record: &NormalizedRecord,
        reference: Option<&StyleReference>,
    ) -> (SlotSet, SlotSource) {
        let Some(client) = &self.client else {
            return (fallback::generate(record), SlotSource::Fallback);
        };

        let prompt = SpecPrompt::build(record, reference);
        info!("Requesting document content from {}", client.name());

        match request_slots(client.as_ref(), &prompt).await {
            Ok(slots) => (slots, SlotSource::Remote),
            Err(err) => {
                warn!("Remote generation failed ({}), using local generator", err);
                (fallback::generate(record), SlotSource::Fallback)
            }
        }
    }
}

async fn request_slots(client: &dyn GenerationClient, prompt: &str) -> GenerationResult<SlotSet> {
    let text = client.generate(prompt).await?;
    let payload = json_payload::locate(&text).ok_or(GenerationError::MissingJson)?;
    Ok(SlotSet::from_json(payload)?)
}
