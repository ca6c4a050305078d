/*!
 * Mock provider implementation for testing.
 *
 * This module provides a scripted provider that simulates different behaviors:
 * - `MockProvider::working()` - Always succeeds with translated text
 * - `MockProvider::failing()` - Always fails with an error
 * - `MockProvider::fail_after(n)` - Succeeds n times, then fails
 *
 * Every received prompt is recorded so tests can assert exactly what was
 * submitted, and how many times.
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a canned translation
    Working,
    /// Always fails with an error
    Failing,
    /// Succeeds for the first `succeed` requests, then fails
    FailAfter {
        /// Number of requests that succeed before the failure
        succeed: usize,
    },
}

/// Mock provider for testing orchestration behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter
    request_count: Arc<AtomicUsize>,
    /// Prompts received so far, in order
    prompts: Arc<Mutex<Vec<String>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&str) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
            custom_response: None,
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock provider that succeeds `succeed` times and then fails
    pub fn fail_after(succeed: usize) -> Self {
        Self::new(MockBehavior::FailAfter { succeed })
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Handle to the request counter, usable after the provider is boxed
    pub fn request_count(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.request_count)
    }

    /// Handle to the recorded prompt log, usable after the provider is boxed
    pub fn prompt_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }

    fn respond(&self, prompt: &str) -> String {
        match self.custom_response {
            Some(generator) => generator(prompt),
            None => format!("[translated] {}", prompt),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut log) = self.prompts.lock() {
            log.push(prompt.to_string());
        }

        match self.behavior {
            MockBehavior::Working => Ok(self.respond(prompt)),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock provider failure".to_string(),
            )),
            MockBehavior::FailAfter { succeed } => {
                if count < succeed {
                    Ok(self.respond(prompt))
                } else {
                    Err(ProviderError::RequestFailed(format!(
                        "mock provider failure on request {}",
                        count + 1
                    )))
                }
            }
        }
    }
}
