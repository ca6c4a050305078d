/*!
 * Error types for the yatwai application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when working with the completion provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while reading a paragraph-structured document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be opened or read
    #[error("Failed to open document: {0}")]
    Open(String),

    /// The file extension is not one the reader understands
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The file exists but its contents are not a valid document
    #[error("Malformed document: {0}")]
    Malformed(String),
}

/// Errors that can occur while fetching a web page
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level failure (DNS, connect, timeout)
    #[error("Failed to reach site: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status
    #[error("Site responded with HTTP {status_code} for {url}")]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// The URL that was requested
        url: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or invalid process configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the completion provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from document reading
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from fetching a web page
    #[error("Network error: {0}")]
    Fetch(#[from] FetchError),

    /// Error while parsing page structure
    #[error("Parse error: {0}")]
    Parse(String),
}

// Utility conversion for IO failures surfaced outside the typed readers
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Document(DocumentError::Open(error.to_string()))
    }
}
