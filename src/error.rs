//! Error types for the Ecwid API client.
//!
//! This module contains the configuration and validation errors produced
//! while building an [`EcwidConfig`](crate::EcwidConfig) or one of its
//! newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use ecwid_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Store identifier cannot be empty.
    #[error("Store ID cannot be empty. Please provide the numeric ID of your Ecwid store.")]
    EmptyStoreId,

    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid Ecwid API access token.")]
    EmptyApiToken,

    /// API base URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://app.ecwid.com/api/v3').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
