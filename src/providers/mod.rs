/*!
 * Provider implementations for the translation completion service.
 *
 * This module contains the client used to reach the remote LLM endpoint:
 * - OpenAI: OpenAI-compatible chat completions client (GitHub Models endpoint)
 *
 * A mock provider is included for tests.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for completion providers
///
/// The orchestrator only ever needs one capability: turn a prompt into the
/// first completion's text content. Keeping the trait object-safe lets tests
/// inject a scripted provider in place of the real client.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Complete a single-turn prompt using this provider
    ///
    /// # Arguments
    /// * `prompt` - The full prompt to submit
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The first completion's text content, verbatim
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

pub mod mock;
pub mod openai;
