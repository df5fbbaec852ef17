//! # Ecwid API Rust Client
//!
//! A Rust client for the Ecwid REST API (v3), providing type-safe
//! configuration, bearer token authentication and async access to a store's
//! categories, products and orders.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`EcwidConfig`] and [`EcwidConfigBuilder`]
//! - Validated newtypes for the store id, API token and API base URL
//! - An endpoint client, [`EcwidClient`], with one method per endpoint
//! - A pluggable [`Transport`] with an async reqwest-based default, [`HttpClient`]
//! - Numeric field normalization for order payloads via [`normalize`]
//! - Typed order payload models in [`resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ecwid_api::{ApiToken, EcwidConfig, StoreId};
//!
//! let config = EcwidConfig::builder()
//!     .store_id(StoreId::new("1003").unwrap())
//!     .api_token(ApiToken::new("secret_token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_url().as_ref(), "https://app.ecwid.com/api/v3");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use ecwid_api::{EcwidClient, RequestParams};
//! use ecwid_api::resources::{Order, OrderItem};
//!
//! let client = EcwidClient::new("1003", "secret_token")?;
//!
//! // GET 1003/categories?parent=0
//! let categories = client
//!     .get_categories(RequestParams::new().insert("parent", 0))
//!     .await?;
//!
//! // POST 1003/orders with numeric fields normalized
//! let order = Order {
//!     email: Some("buyer@example.com".to_string()),
//!     total: Some("29.99".to_string()),
//!     items: Some(vec![OrderItem {
//!         sku: Some("TSHIRT-BLUE-M".to_string()),
//!         price: Some("29.99".to_string()),
//!         quantity: Some("1".to_string()),
//!         ..Default::default()
//!     }]),
//!     ..Default::default()
//! };
//! let created = client.create_order(&order).await?;
//! println!("Created: {}", created.body);
//! ```
//!
//! ## Custom Transports
//!
//! [`EcwidClient`] is generic over [`Transport`]. Any type implementing it can
//! stand in for [`HttpClient`], and its response type is returned unchanged:
//!
//! ```rust,ignore
//! use ecwid_api::{EcwidClient, StoreId};
//!
//! let client = EcwidClient::with_transport(StoreId::new("1003")?, my_transport);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod normalize;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, ApiUrl, EcwidConfig, EcwidConfigBuilder, StoreId};
pub use error::ConfigError;
pub use normalize::NumericFieldMode;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RequestParams, Transport,
};

// Re-export endpoint client types
pub use clients::{ClientError, EcwidClient};
