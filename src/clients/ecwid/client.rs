//! Ecwid endpoint client implementation.
//!
//! This module provides the [`EcwidClient`] type, which maps the store's
//! categories, products and orders endpoints onto transport calls.

use std::fmt::Display;

use serde::Serialize;

use crate::clients::ecwid::ClientError;
use crate::clients::{HttpClient, HttpMethod, RequestParams, Transport};
use crate::config::{ApiToken, EcwidConfig, StoreId};
use crate::error::ConfigError;
use crate::normalize::{self, NumericFieldMode};

/// Client for the Ecwid REST API of a single store.
///
/// Every method performs exactly one transport call and returns the
/// transport's response unchanged. With the default [`HttpClient`]
/// transport that response is an [`HttpResponse`](crate::HttpResponse).
///
/// Store and resource identifiers are percent-encoded before they are
/// placed in the path.
///
/// # Thread Safety
///
/// `EcwidClient` is `Send + Sync` whenever its transport is, making it safe
/// to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use ecwid_api::{EcwidClient, RequestParams};
///
/// let client = EcwidClient::new("1003", "secret_token")?;
///
/// let category = client.get_category(42).await?;
/// let products = client
///     .get_products(RequestParams::new().insert("keyword", "shirt"))
///     .await?;
/// ```
#[derive(Debug)]
pub struct EcwidClient<T = HttpClient> {
    store_id: StoreId,
    transport: T,
    numeric_fields: NumericFieldMode,
}

// Verify EcwidClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EcwidClient>();
};

impl EcwidClient {
    /// Creates a client for a store authenticated with a static API token.
    ///
    /// All other settings use the defaults of [`EcwidConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStoreId`] or [`ConfigError::EmptyApiToken`]
    /// when either value is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ecwid_api::EcwidClient;
    ///
    /// let client = EcwidClient::new("1003", "secret_token").unwrap();
    /// assert_eq!(client.store_id().as_ref(), "1003");
    ///
    /// assert!(EcwidClient::new("", "secret_token").is_err());
    /// ```
    pub fn new(store_id: &str, api_token: &str) -> Result<Self, ConfigError> {
        let config = EcwidConfig::builder()
            .store_id(StoreId::new(store_id)?)
            .api_token(ApiToken::new(api_token)?)
            .build()?;

        Ok(Self::from_config(&config))
    }

    /// Creates a client from a full configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created
    /// (see [`HttpClient::new`]).
    #[must_use]
    pub fn from_config(config: &EcwidConfig) -> Self {
        Self {
            store_id: config.store_id().clone(),
            transport: HttpClient::new(config),
            numeric_fields: config.numeric_fields(),
        }
    }
}

impl<T: Transport> EcwidClient<T> {
    /// Creates a client that sends its requests through a custom transport.
    ///
    /// Numeric order fields are normalized with the default
    /// [`NumericFieldMode`]; see [`with_numeric_fields`](Self::with_numeric_fields).
    pub fn with_transport(store_id: StoreId, transport: T) -> Self {
        Self {
            store_id,
            transport,
            numeric_fields: NumericFieldMode::default(),
        }
    }

    /// Selects how numeric order fields are normalized on order writes.
    #[must_use]
    pub fn with_numeric_fields(mut self, mode: NumericFieldMode) -> Self {
        self.numeric_fields = mode;
        self
    }

    /// Returns the store identifier.
    #[must_use]
    pub const fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns how numeric order fields are normalized.
    #[must_use]
    pub const fn numeric_fields(&self) -> NumericFieldMode {
        self.numeric_fields
    }

    /// Searches product categories.
    ///
    /// Sends `GET <store>/categories` with `filter` as query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] with whatever the transport reported.
    pub async fn get_categories(&self, filter: RequestParams) -> Result<T::Response, ClientError> {
        self.send(HttpMethod::Get, self.collection_path("categories"), filter)
            .await
    }

    /// Fetches a single category.
    ///
    /// Sends `GET <store>/categories/<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] with whatever the transport reported.
    pub async fn get_category(&self, category_id: impl Display) -> Result<T::Response, ClientError> {
        self.send(
            HttpMethod::Get,
            self.item_path("categories", category_id),
            RequestParams::new(),
        )
        .await
    }

    /// Creates a category.
    ///
    /// Sends `POST <store>/categories` with `params` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] with whatever the transport reported.
    pub async fn create_category(&self, params: RequestParams) -> Result<T::Response, ClientError> {
        self.send(HttpMethod::Post, self.collection_path("categories"), params)
            .await
    }

    /// Searches products.
    ///
    /// Sends `GET <store>/products` with `filter` as query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] with whatever the transport reported.
    pub async fn get_products(&self, filter: RequestParams) -> Result<T::Response, ClientError> {
        self.send(HttpMethod::Get, self.collection_path("products"), filter)
            .await
    }

    /// Searches orders.
    ///
    /// Sends `GET <store>/orders` with `filter` as query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] with whatever the transport reported.
    pub async fn get_orders(&self, filter: RequestParams) -> Result<T::Response, ClientError> {
        self.send(HttpMethod::Get, self.collection_path("orders"), filter)
            .await
    }

    /// Fetches the details of a single order.
    ///
    /// Sends `GET <store>/orders/<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] with whatever the transport reported.
    pub async fn get_order(&self, order_id: impl Display) -> Result<T::Response, ClientError> {
        self.send(
            HttpMethod::Get,
            self.item_path("orders", order_id),
            RequestParams::new(),
        )
        .await
    }

    /// Creates an order.
    ///
    /// The order is serialized and normalized with [`encode_order`](Self::encode_order),
    /// then sent as `POST <store>/orders` with the text under `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Serialization`] if the order cannot be
    /// serialized, or [`ClientError::Http`] with whatever the transport reported.
    pub async fn create_order<O>(&self, order: &O) -> Result<T::Response, ClientError>
    where
        O: Serialize + ?Sized,
    {
        let data = self.encode_order(order)?;
        self.send(
            HttpMethod::Post,
            self.collection_path("orders"),
            RequestParams::data(data),
        )
        .await
    }

    /// Updates an order.
    ///
    /// The order is serialized and normalized with [`encode_order`](Self::encode_order),
    /// then sent as `PUT <store>/orders/<id>` with the text under `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Serialization`] if the order cannot be
    /// serialized, or [`ClientError::Http`] with whatever the transport reported.
    pub async fn update_order<O>(
        &self,
        order_id: impl Display,
        order: &O,
    ) -> Result<T::Response, ClientError>
    where
        O: Serialize + ?Sized,
    {
        let data = self.encode_order(order)?;
        self.send(
            HttpMethod::Put,
            self.item_path("orders", order_id),
            RequestParams::data(data),
        )
        .await
    }

    /// Deletes an order.
    ///
    /// Sends `DELETE <store>/orders/<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] with whatever the transport reported.
    pub async fn delete_order(&self, order_id: impl Display) -> Result<T::Response, ClientError> {
        self.send(
            HttpMethod::Delete,
            self.item_path("orders", order_id),
            RequestParams::new(),
        )
        .await
    }

    /// Serializes an order and normalizes its numeric fields.
    ///
    /// This is the exact text `create_order` and `update_order` send.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] raised by the serializer.
    pub fn encode_order<O>(&self, order: &O) -> Result<String, serde_json::Error>
    where
        O: Serialize + ?Sized,
    {
        normalize::encode_order(order, self.numeric_fields)
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: String,
        params: RequestParams,
    ) -> Result<T::Response, ClientError> {
        tracing::debug!("Dispatching {} {}", method, path);
        self.transport
            .make_request(&path, method, params)
            .await
            .map_err(Into::into)
    }

    fn collection_path(&self, resource: &str) -> String {
        format!(
            "{}/{resource}",
            urlencoding::encode(self.store_id.as_ref())
        )
    }

    fn item_path(&self, resource: &str, id: impl Display) -> String {
        format!(
            "{}/{}",
            self.collection_path(resource),
            urlencoding::encode(&id.to_string())
        )
    }
}
