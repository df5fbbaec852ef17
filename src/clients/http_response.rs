//! HTTP response types for the Ecwid API client.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// An HTTP response from the Ecwid REST API.
///
/// # Example
///
/// ```rust
/// use ecwid_api::HttpResponse;
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(200, HashMap::new(), json!({"id": 42}));
/// assert!(response.is_ok());
/// assert_eq!(response.body["id"], 42);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lower-cased name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Deserializes the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body does not match `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ecwid_api::HttpResponse;
    /// use serde::Deserialize;
    /// use serde_json::json;
    /// use std::collections::HashMap;
    ///
    /// #[derive(Deserialize)]
    /// struct Created {
    ///     id: u64,
    /// }
    ///
    /// let response = HttpResponse::new(200, HashMap::new(), json!({"id": 42}));
    /// let created: Created = response.json().unwrap();
    /// assert_eq!(created.id, 42);
    /// ```
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }
}
