//! Configuration types for the Ecwid API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`EcwidConfig`]: The configuration struct holding all client settings
//! - [`EcwidConfigBuilder`]: A builder for constructing [`EcwidConfig`] instances
//! - [`StoreId`]: A validated store identifier
//! - [`ApiToken`]: A validated access token with masked debug output
//! - [`ApiUrl`]: A validated base URL for the REST API
//!
//! # Example
//!
//! ```rust
//! use ecwid_api::{EcwidConfig, StoreId, ApiToken};
//!
//! let config = EcwidConfig::builder()
//!     .store_id(StoreId::new("1003").unwrap())
//!     .api_token(ApiToken::new("secret_token").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiToken, ApiUrl, StoreId};

use std::time::Duration;

use crate::error::ConfigError;
use crate::normalize::NumericFieldMode;

/// Configuration for the Ecwid API client.
///
/// # Thread Safety
///
/// `EcwidConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use ecwid_api::{EcwidConfig, StoreId, ApiToken};
/// use ecwid_api::normalize::NumericFieldMode;
///
/// let config = EcwidConfig::builder()
///     .store_id(StoreId::new("1003").unwrap())
///     .api_token(ApiToken::new("secret_token").unwrap())
///     .numeric_fields(NumericFieldMode::Structural)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.numeric_fields(), NumericFieldMode::Structural);
/// ```
#[derive(Clone, Debug)]
pub struct EcwidConfig {
    store_id: StoreId,
    api_token: ApiToken,
    api_url: ApiUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    numeric_fields: NumericFieldMode,
}

impl EcwidConfig {
    /// Creates a new builder for constructing an `EcwidConfig`.
    #[must_use]
    pub fn builder() -> EcwidConfigBuilder {
        EcwidConfigBuilder::new()
    }

    /// Returns the store identifier.
    #[must_use]
    pub const fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the base URL of the REST API.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns how numeric order fields are normalized.
    #[must_use]
    pub const fn numeric_fields(&self) -> NumericFieldMode {
        self.numeric_fields
    }
}

// Verify EcwidConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EcwidConfig>();
};

/// Builder for constructing [`EcwidConfig`] instances.
///
/// Required fields are `store_id` and `api_token`.
///
/// # Defaults
///
/// - `api_url`: `https://app.ecwid.com/api/v3`
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no client-side timeout)
/// - `numeric_fields`: [`NumericFieldMode::Legacy`]
#[derive(Debug, Default)]
pub struct EcwidConfigBuilder {
    store_id: Option<StoreId>,
    api_token: Option<ApiToken>,
    api_url: Option<ApiUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    numeric_fields: Option<NumericFieldMode>,
}

impl EcwidConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store identifier (required).
    #[must_use]
    pub fn store_id(mut self, store_id: StoreId) -> Self {
        self.store_id = Some(store_id);
        self
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Overrides the base URL of the REST API.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Selects how numeric order fields are normalized.
    #[must_use]
    pub const fn numeric_fields(mut self, mode: NumericFieldMode) -> Self {
        self.numeric_fields = Some(mode);
        self
    }

    /// Builds the [`EcwidConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_id` or
    /// `api_token` are not set.
    pub fn build(self) -> Result<EcwidConfig, ConfigError> {
        let store_id = self
            .store_id
            .ok_or(ConfigError::MissingRequiredField { field: "store_id" })?;
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        Ok(EcwidConfig {
            store_id,
            api_token,
            api_url: self.api_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
            numeric_fields: self.numeric_fields.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_builder() -> EcwidConfigBuilder {
        EcwidConfig::builder()
            .store_id(StoreId::new("1003").unwrap())
            .api_token(ApiToken::new("secret_token").unwrap())
    }

    #[test]
    fn test_builder_requires_store_id() {
        let result = EcwidConfigBuilder::new()
            .api_token(ApiToken::new("secret_token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "store_id" })
        ));
    }

    #[test]
    fn test_builder_requires_api_token() {
        let result = EcwidConfigBuilder::new()
            .store_id(StoreId::new("1003").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_token" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = required_builder().build().unwrap();

        assert_eq!(config.store_id().as_ref(), "1003");
        assert_eq!(config.api_url().as_ref(), ApiUrl::DEFAULT);
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
        assert_eq!(config.numeric_fields(), NumericFieldMode::Legacy);
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = required_builder()
            .api_url(ApiUrl::new("http://localhost:8080/api/v3").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .timeout(Duration::from_secs(30))
            .numeric_fields(NumericFieldMode::Structural)
            .build()
            .unwrap();

        assert_eq!(config.api_url().as_ref(), "http://localhost:8080/api/v3");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.numeric_fields(), NumericFieldMode::Structural);
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = required_builder().build().unwrap();
        let debug_str = format!("{config:?}");

        assert!(debug_str.contains("EcwidConfig"));
        assert!(!debug_str.contains("secret_token"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EcwidConfig>();
    }
}
