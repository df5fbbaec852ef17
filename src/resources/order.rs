//! Order payload types.
//!
//! This module provides the [`Order`] struct accepted by
//! [`EcwidClient::create_order`](crate::EcwidClient::create_order) and
//! [`EcwidClient::update_order`](crate::EcwidClient::update_order), along with
//! its [`OrderItem`] and [`ShippingOption`] parts.

use serde::{Deserialize, Serialize};

/// A product line in an order.
///
/// # Example
///
/// ```rust
/// use ecwid_api::resources::OrderItem;
///
/// let item = OrderItem {
///     sku: Some("TSHIRT-BLUE-M".to_string()),
///     name: Some("Cool T-Shirt".to_string()),
///     price: Some("29.99".to_string()),
///     quantity: Some("2".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// The ID of the ordered product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The product SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The product name as shown to the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The unit price as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The number of units as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,

    /// Whether the item is shipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_shipping_required: Option<bool>,
}

/// The shipping method chosen for an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOption {
    /// The shipping method name (e.g., "Local pickup").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method_name: Option<String>,

    /// The shipping cost as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_rate: Option<String>,
}

/// An order payload for order writes.
///
/// Only the fields set to `Some` are serialized, so an `Order` doubles as a
/// partial update.
///
/// # Example
///
/// ```rust
/// use ecwid_api::resources::{Order, OrderItem};
///
/// let order = Order {
///     email: Some("buyer@example.com".to_string()),
///     total: Some("59.98".to_string()),
///     items: Some(vec![OrderItem {
///         sku: Some("TSHIRT-BLUE-M".to_string()),
///         price: Some("29.99".to_string()),
///         quantity: Some("2".to_string()),
///         ..Default::default()
///     }]),
///     ..Default::default()
/// };
///
/// let json = serde_json::to_value(&order).unwrap();
/// assert_eq!(json["total"], "59.98");
/// assert!(json.get("subtotal").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// The customer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// An order number assigned by an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_order_number: Option<String>,

    /// The payment method name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    /// The payment status (e.g., `PAID`, `AWAITING_PAYMENT`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,

    /// The fulfillment status (e.g., `PROCESSING`, `SHIPPED`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    /// The order subtotal as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<String>,

    /// The order total as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,

    /// The order discount as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,

    /// The ordered products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,

    /// The chosen shipping method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_option: Option<ShippingOption>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{encode_order, NumericFieldMode};
    use serde_json::json;

    fn sample_order() -> Order {
        Order {
            email: Some("buyer@example.com".to_string()),
            subtotal: Some("20".to_string()),
            total: Some("25.50".to_string()),
            items: Some(vec![OrderItem {
                sku: Some("A-1".to_string()),
                price: Some("10".to_string()),
                quantity: Some("2".to_string()),
                ..Default::default()
            }]),
            shipping_option: Some(ShippingOption {
                shipping_method_name: Some("Courier".to_string()),
                shipping_rate: Some("5.50".to_string()),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_order_serializes_camel_case_and_skips_none() {
        let value = serde_json::to_value(sample_order()).unwrap();

        assert_eq!(value["shippingOption"]["shippingMethodName"], "Courier");
        assert_eq!(value["shippingOption"]["shippingRate"], "5.50");
        assert!(value.get("discount").is_none());
        assert!(value.get("vendorOrderNumber").is_none());
        assert!(value["items"][0].get("productId").is_none());
    }

    #[test]
    fn test_order_deserializes_numbers_as_strings_only() {
        let order: Order = serde_json::from_value(json!({
            "email": "buyer@example.com",
            "paymentStatus": "PAID",
            "total": "12.00"
        }))
        .unwrap();

        assert_eq!(order.payment_status.as_deref(), Some("PAID"));
        assert_eq!(order.total.as_deref(), Some("12.00"));
        assert!(order.items.is_none());
    }

    #[test]
    fn test_structural_encoding_turns_amounts_into_numbers() {
        let encoded = encode_order(&sample_order(), NumericFieldMode::Structural).unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();

        assert_eq!(value["subtotal"], json!(20));
        assert_eq!(value["total"].to_string(), "25.50");
        assert_eq!(value["items"][0]["price"], json!(10));
        assert_eq!(value["items"][0]["quantity"], json!(2));
        assert_eq!(value["shippingOption"]["shippingRate"].to_string(), "5.50");
        assert_eq!(value["items"][0]["sku"], "A-1");
    }

    #[test]
    fn test_empty_order_encodes_to_empty_object() {
        let encoded = encode_order(&Order::default(), NumericFieldMode::Legacy).unwrap();
        assert_eq!(encoded, "{}");
    }
}
