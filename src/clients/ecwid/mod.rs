//! Endpoint client for the Ecwid REST API.
//!
//! [`EcwidClient`] exposes the categories, products and orders endpoints of
//! one store. Each method builds a `<storeId>/<resource>[/<id>]` path and
//! hands it to a [`Transport`](crate::clients::Transport) together with the
//! HTTP method and parameters.
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::{EcwidClient, RequestParams};
//! use serde_json::json;
//!
//! let client = EcwidClient::new("1003", "secret_token")?;
//!
//! let paid = client
//!     .get_orders(RequestParams::new().insert("paymentStatus", "PAID"))
//!     .await?;
//!
//! let created = client
//!     .create_order(&json!({"email": "buyer@example.com", "total": "12.50"}))
//!     .await?;
//! ```
//!
//! # Order Writes
//!
//! `create_order` and `update_order` serialize the order, normalize its
//! numeric fields (see [`crate::normalize`]) and send the resulting text as
//! the `data` parameter, which becomes the raw request body.

mod client;
mod errors;

pub use client::EcwidClient;
pub use errors::ClientError;
