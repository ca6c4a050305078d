use async_trait::async_trait;
use log::error;
use reqwest::{Client, header};
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::Provider;

/// OpenAI-compatible client for chat completion requests
///
/// Talks to any endpoint implementing the OpenAI chat completions wire
/// format; the default configuration points it at the GitHub Models
/// inference endpoint.
#[derive(Debug)]
pub struct OpenAI {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL
    endpoint: String,
    /// Model name used for requests
    model: String,
}

/// Chat completion request
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    /// The model to use
    model: String,

    /// The messages for the conversation
    messages: Vec<ChatMessage>,

    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Chat message format
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct TokenUsage {
    /// Number of prompt tokens
    pub prompt_tokens: u32,
    /// Number of completion tokens
    pub completion_tokens: u32,
    /// Total number of tokens
    pub total_tokens: u32,
}

/// Chat completion response
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    /// The returned completion choices
    pub choices: Vec<ChatChoice>,
    /// Token usage information, when the endpoint reports it
    pub usage: Option<TokenUsage>,
}

/// Individual completion choice in a chat response
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    /// The completion message
    pub message: ChatMessage,
}

impl ChatRequest {
    /// Create a new chat request for the given model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage {
            role: role.into(),
            content: content.into(),
        });
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of tokens to generate
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

impl OpenAI {
    /// Create a new client
    ///
    /// The underlying HTTP client carries no request timeout: a completion
    /// call blocks until the provider answers or the connection drops.
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    /// Complete a chat request
    pub async fn complete_chat(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        let api_url = format!("{}/chat/completions", self.endpoint.trim_end_matches('/'));

        let response = self
            .client
            .post(&api_url)
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Completion API error ({}): {}", status, error_text);

            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(ProviderError::AuthenticationError(error_text));
            }

            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }

    /// Extract the first completion's text from a chat response
    pub fn extract_text_from_response(response: &ChatResponse) -> Option<String> {
        response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
    }
}

#[async_trait]
impl Provider for OpenAI {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = ChatRequest::new(&self.model).add_message("user", prompt);
        let response = self.complete_chat(request).await?;

        Self::extract_text_from_response(&response).ok_or_else(|| {
            ProviderError::ParseError("completion response contained no choices".to_string())
        })
    }
}
