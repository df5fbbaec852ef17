//! Error types returned by [`EcwidClient`](super::EcwidClient) endpoint methods.
//!
//! Endpoint methods add no failure modes of their own. They only surface
//! what the JSON serializer or the transport reported:
//!
//! - [`ClientError::Serialization`]: The order payload could not be serialized
//! - [`ClientError::Http`]: Wraps the transport's [`HttpError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::clients::{ClientError, HttpError};
//!
//! match client.get_order(42).await {
//!     Ok(response) => println!("Order: {}", response.body),
//!     Err(ClientError::Http(HttpError::Response(e))) if e.code == 404 => {
//!         println!("No such order");
//!     }
//!     Err(e) => println!("Request failed: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for Ecwid endpoint calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The order payload could not be serialized to JSON.
    #[error("Failed to serialize order payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}
