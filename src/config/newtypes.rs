//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Ecwid store identifier.
///
/// Every resource path is scoped by this value. It is treated as opaque:
/// the value is kept exactly as given and must not be blank.
///
/// # Example
///
/// ```rust
/// use ecwid_api::StoreId;
///
/// let store = StoreId::new("1003").unwrap();
/// assert_eq!(store.as_ref(), "1003");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoreId(String);

impl StoreId {
    /// Creates a new validated store identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStoreId`] if the identifier is empty or
    /// only whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyStoreId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for StoreId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for StoreId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoreId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Ecwid API access token.
///
/// The token is sent as a bearer credential on every request. Its value is
/// masked in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use ecwid_api::ApiToken;
///
/// let token = ApiToken::new("secret_abc").unwrap();
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated base URL for the Ecwid REST API.
///
/// Trailing slashes are stripped so resource paths can be appended with a
/// single `/`.
///
/// # Example
///
/// ```rust
/// use ecwid_api::ApiUrl;
///
/// let url = ApiUrl::new("https://app.ecwid.com/api/v3/").unwrap();
/// assert_eq!(url.as_ref(), "https://app.ecwid.com/api/v3");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "app.ecwid.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiUrl {
    /// The production endpoint of the Ecwid REST API v3.
    pub const DEFAULT: &'static str = "https://app.ecwid.com/api/v3";

    /// Creates a new validated API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidApiUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidApiUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: 21,
        }
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_id_rejects_empty_string() {
        assert!(matches!(StoreId::new(""), Err(ConfigError::EmptyStoreId)));
        assert!(matches!(StoreId::new("   "), Err(ConfigError::EmptyStoreId)));
    }

    #[test]
    fn test_store_id_is_kept_as_given() {
        let store = StoreId::new(" 1003 ").unwrap();
        assert_eq!(store.as_ref(), " 1003 ");
        assert_eq!(store.to_string(), " 1003 ");
    }

    #[test]
    fn test_store_id_serializes_to_string() {
        let store = StoreId::new("1003").unwrap();
        assert_eq!(serde_json::to_string(&store).unwrap(), r#""1003""#);

        let restored: StoreId = serde_json::from_str(r#""1003""#).unwrap();
        assert_eq!(restored, store);
        assert!(serde_json::from_str::<StoreId>(r#""""#).is_err());
    }

    #[test]
    fn test_api_token_rejects_empty_string() {
        assert!(matches!(ApiToken::new(""), Err(ConfigError::EmptyApiToken)));
    }

    #[test]
    fn test_api_token_masks_value_in_debug() {
        let token = ApiToken::new("secret_very_private").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "ApiToken(*****)");
        assert!(!debug_output.contains("secret_very_private"));
    }

    #[test]
    fn test_api_url_validates_format() {
        let url = ApiUrl::new("https://app.ecwid.com/api/v3").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "app.ecwid.com");

        let url = ApiUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_api_url_strips_trailing_slashes() {
        let url = ApiUrl::new("https://app.ecwid.com/api/v3//").unwrap();
        assert_eq!(url.as_ref(), "https://app.ecwid.com/api/v3");
    }

    #[test]
    fn test_api_url_rejects_invalid() {
        assert!(ApiUrl::new("app.ecwid.com").is_err());
        assert!(ApiUrl::new("https://").is_err());
        assert!(ApiUrl::new("://app.ecwid.com").is_err());
        assert!(ApiUrl::new("https:///api").is_err());
    }

    #[test]
    fn test_api_url_default_matches_parsed_default() {
        let parsed = ApiUrl::new(ApiUrl::DEFAULT).unwrap();
        assert_eq!(ApiUrl::default(), parsed);
        assert_eq!(ApiUrl::default().host_name(), "app.ecwid.com");
    }
}
