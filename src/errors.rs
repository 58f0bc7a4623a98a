/*!
 * Error types for the wordglance application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to a translation or dictionary API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// The API answered successfully but carried no usable translation
    #[error("Provider returned an empty translation")]
    EmptyTranslation,
}

/// Errors that can occur when building a lookup request
#[derive(Error, Debug)]
pub enum LookupError {
    /// Input text was empty or whitespace-only
    #[error("Lookup text must not be empty")]
    EmptyText,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from loading or validating settings
    #[error("Settings error: {0}")]
    Settings(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from building a lookup request
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Settings(error.to_string())
    }
}
