//! Error types for the fuzzed data provider.
//!
//! Running out of input is never an error: short reads are zero-padded and
//! recorded in the provider's [`DataState`](crate::DataState). The variants
//! here cover caller misuse and configuration failures only.

use thiserror::Error;

/// Errors returned by the provider's fallible operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// A selection was requested from an empty list of values.
    #[error("Cannot choose from an empty set of values")]
    EmptyChoices,

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Configuration document could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl ProviderError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
