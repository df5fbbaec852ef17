//! HTTP client types for Ecwid API communication.
//!
//! This module provides the transport layer used by
//! [`EcwidClient`](crate::EcwidClient) and the endpoint client itself.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`Transport`]: The trait endpoint methods send requests through
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RequestParams`]: Query or body parameters for an endpoint call
//! - [`ecwid::EcwidClient`]: Categories, products and orders endpoints
//! - [`ecwid::ClientError`]: Errors returned by endpoint methods
//!
//! # Error Responses
//!
//! Any non-2xx status is returned as [`HttpError::Response`]. Requests are
//! attempted exactly once.

pub mod ecwid;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod params;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use params::{RequestParams, DATA_PARAM};
pub use transport::Transport;

// Re-export endpoint client types at the clients module level
pub use ecwid::{ClientError, EcwidClient};
