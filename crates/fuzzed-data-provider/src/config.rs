//! Provider configuration.
//!
//! Configuration is fixed when a provider is built. It can be assembled in
//! code through [`ProviderConfig::builder`] or loaded from a JSON document
//! shipped next to a fuzz target.

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, ProviderResult};

/// What the provider does the first time a read runs past the end of the
/// input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    /// Keep decoding; missing bytes read as zero.
    #[default]
    Continue,
    /// Run the installed exhaustion hook once and report
    /// [`should_stop`](crate::FuzzedDataProvider::should_stop) from then on.
    Stop,
}

/// Provider configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Behaviour on first exhaustion.
    pub exhaustion_policy: ExhaustionPolicy,
    /// Upper bound on the byte count of a single slice or string request.
    ///
    /// Oversized requests are clamped before their width is computed, so the
    /// cursor advances by the clamped width. String requests clamp to the
    /// largest even count not above the bound, so the bound must be at least
    /// one code unit (2 bytes).
    pub max_request_len: Option<usize>,
}

/// Smallest accepted `max_request_len`: one UTF-16 code unit.
pub const MIN_REQUEST_LEN: usize = 2;

impl ProviderConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_request_len` is below [`MIN_REQUEST_LEN`].
    pub fn validate(&self) -> ProviderResult<()> {
        if let Some(len) = self.max_request_len.filter(|&len| len < MIN_REQUEST_LEN) {
            return Err(ProviderError::invalid_configuration(format!(
                "max_request_len must be at least {MIN_REQUEST_LEN}, got {len}"
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ConfigParse`] for malformed JSON and
    /// [`ProviderError::InvalidConfiguration`] if validation fails.
    pub fn from_json_str(json: &str) -> ProviderResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder::default()
    }
}

/// Builder for [`ProviderConfig`].
#[derive(Debug, Default)]
pub struct ProviderConfigBuilder {
    config: ProviderConfig,
}

impl ProviderConfigBuilder {
    /// Set the exhaustion policy.
    #[must_use]
    pub fn exhaustion_policy(mut self, policy: ExhaustionPolicy) -> Self {
        self.config.exhaustion_policy = policy;
        self
    }

    /// Shorthand for [`ExhaustionPolicy::Stop`].
    #[must_use]
    pub fn stop_on_exhaustion(self) -> Self {
        self.exhaustion_policy(ExhaustionPolicy::Stop)
    }

    /// Set the per-request byte ceiling.
    #[must_use]
    pub fn max_request_len(mut self, len: usize) -> Self {
        self.config.max_request_len = Some(len);
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> ProviderResult<ProviderConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
