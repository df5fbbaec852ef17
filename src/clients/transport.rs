//! The seam between endpoint methods and HTTP transmission.

use std::future::Future;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpMethod;
use crate::clients::params::RequestParams;

/// Sends a request for a store-relative path and returns the response.
///
/// [`HttpClient`](crate::clients::HttpClient) is the production
/// implementation. The associated `Response` type is handed back to callers
/// of [`EcwidClient`](crate::EcwidClient) untouched, so alternative
/// transports (recorders, fakes) keep their own response type.
///
/// Implementations must be safe to call concurrently when shared.
///
/// # Example
///
/// ```rust
/// use ecwid_api::clients::{HttpError, HttpMethod, RequestParams, Transport};
///
/// struct Echo;
///
/// impl Transport for Echo {
///     type Response = String;
///
///     async fn make_request(
///         &self,
///         path: &str,
///         method: HttpMethod,
///         _params: RequestParams,
///     ) -> Result<String, HttpError> {
///         Ok(format!("{method} {path}"))
///     }
/// }
/// ```
pub trait Transport {
    /// The response produced for a successful request.
    type Response;

    /// Sends `params` to `path` with the given method.
    fn make_request(
        &self,
        path: &str,
        method: HttpMethod,
        params: RequestParams,
    ) -> impl Future<Output = Result<Self::Response, HttpError>> + Send;
}
