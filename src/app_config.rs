use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::AppError;

/// Application configuration module
/// This module handles the process-wide configuration: the provider
/// credential, the inference endpoint and the model name. The environment
/// is read exactly once, in `Config::from_env`; everything downstream
/// receives an immutable `Config` value.
/// Name of the environment variable holding the provider credential
pub const CREDENTIAL_ENV_VAR: &str = "GITHUB_TOKEN";

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Provider access credential
    pub api_key: String,

    /// Inference endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name used for completion requests
    #[serde(default = "default_model")]
    pub model: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// Fails fast when the credential is absent or blank, before any
    /// network activity takes place.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var(CREDENTIAL_ENV_VAR).map_err(|_| {
            AppError::Config(format!(
                "{} not found in the environment",
                CREDENTIAL_ENV_VAR
            ))
        })?;

        if api_key.trim().is_empty() {
            return Err(AppError::Config(format!(
                "{} is set but empty",
                CREDENTIAL_ENV_VAR
            )));
        }

        Ok(Self {
            api_key,
            endpoint: default_endpoint(),
            model: default_model(),
            log_level: LogLevel::default(),
        })
    }

    /// Validate the configuration after CLI overrides have been applied
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::Config("API key must not be empty".to_string()));
        }

        if self.endpoint.trim().is_empty() {
            return Err(AppError::Config("Endpoint must not be empty".to_string()));
        }

        if self.model.trim().is_empty() {
            return Err(AppError::Config("Model name must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_endpoint() -> String {
    "https://models.inference.ai.azure.com".to_string()
}

fn default_model() -> String {
    "o1-mini".to_string()
}
