//! HTTP request types for the Ecwid API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Ecwid REST API.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::params::RequestParams;

/// HTTP methods supported by the Ecwid REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for methods that carry a request body.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the Ecwid REST API.
///
/// Use [`HttpRequest::builder`] to construct requests, or
/// [`HttpRequest::from_params`] to map endpoint parameters onto a request.
///
/// # Example
///
/// ```rust
/// use ecwid_api::clients::{HttpRequest, HttpMethod};
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "1003/orders")
///     .query_param("limit", "10")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "1003/categories")
///     .body(r#"{"name":"Shirts"}"#)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the API base URL) for this request.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<String>,
    /// Query parameters to append to the URL.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Maps endpoint parameters onto a request.
    ///
    /// GET and DELETE send the parameters as query string; POST and PUT
    /// send them as the body (see [`RequestParams::to_body`]).
    ///
    /// # Errors
    ///
    /// This cannot fail for the four supported methods; the validation
    /// result of [`HttpRequestBuilder::build`] is returned as-is.
    pub fn from_params(
        method: HttpMethod,
        path: impl Into<String>,
        params: &RequestParams,
    ) -> Result<Self, InvalidHttpRequestError> {
        let builder = Self::builder(method, path);
        if method.has_body() {
            builder.body(params.to_body()).build()
        } else {
            builder.query(params.to_query_pairs()).build()
        }
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    /// - `http_method` is `Get` or `Delete` but `body` is `Some`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.http_method.has_body(), self.body.is_some()) {
            (true, false) => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            }),
            (false, true) => Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<String>,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "1003/products")
            .query_param("keyword", "shirt")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "1003/products");
        assert!(request.body.is_none());
        assert_eq!(
            request.query,
            vec![("keyword".to_string(), "shirt".to_string())]
        );
    }

    #[test]
    fn test_verify_requires_body_for_post_and_put() {
        let result = HttpRequest::builder(HttpMethod::Post, "1003/orders").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));

        let result = HttpRequest::builder(HttpMethod::Put, "1003/orders/1").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "put"
        ));
    }

    #[test]
    fn test_verify_rejects_body_for_get_and_delete() {
        let result = HttpRequest::builder(HttpMethod::Delete, "1003/orders/1")
            .body("{}")
            .build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::UnexpectedBody { method }) if method == "delete"
        ));
    }

    #[test]
    fn test_from_params_uses_query_for_get() {
        let params = RequestParams::new().insert("limit", 5);
        let request = HttpRequest::from_params(HttpMethod::Get, "1003/orders", &params).unwrap();

        assert!(request.body.is_none());
        assert_eq!(request.query, vec![("limit".to_string(), "5".to_string())]);
    }

    #[test]
    fn test_from_params_uses_body_for_put() {
        let params = RequestParams::data(r#"{"total":1.50}"#);
        let request = HttpRequest::from_params(HttpMethod::Put, "1003/orders/7", &params).unwrap();

        assert!(request.query.is_empty());
        assert_eq!(request.body.as_deref(), Some(r#"{"total":1.50}"#));
    }

    #[test]
    fn test_from_params_with_empty_post_sends_empty_object() {
        let request =
            HttpRequest::from_params(HttpMethod::Post, "1003/categories", &RequestParams::new())
                .unwrap();
        assert_eq!(request.body.as_deref(), Some("{}"));
    }
}
