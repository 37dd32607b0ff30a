//! Remote text generation
//!
//! The assembler talks to a [`GenerationClient`]. [`AnthropicClient`] is the
//! production implementation; tests use a mock.

pub mod anthropic;
pub mod errors;
pub mod mock;
pub mod traits;

pub use anthropic::AnthropicClient;
pub use errors::{GenerationError, GenerationResult};
pub use traits::GenerationClient;
