//! Numeric field normalization for order payloads.
//!
//! The Ecwid orders endpoint expects money and quantity fields as bare JSON
//! numbers, while callers frequently hold them as strings (`"total":"12.50"`).
//! Before an order is created or updated, its serialized JSON is repaired so
//! the following fields carry numeric literals:
//!
//! `subtotal`, `total`, `discount`, `shippingRate`, `price`, `quantity`
//!
//! Two strategies are available, selected with [`NumericFieldMode`]:
//!
//! - [`NumericFieldMode::Legacy`] (default): the serialized text is patched
//!   with regular expressions, reproducing the historical wire format
//!   exactly, including its quirks. See [`normalize_numeric_fields`].
//! - [`NumericFieldMode::Structural`]: the payload is walked as a
//!   [`serde_json::Value`] and matching string values are converted to
//!   numbers before serialization. The digits are kept as written and the
//!   output is always valid JSON. See [`coerce_numeric_fields`].
//!
//! Keys are serialized in the order the caller built them, so with `Legacy`
//! the field that closes each object is the one the caller put last.
//!
//! # Example
//!
//! ```rust
//! use ecwid_api::normalize::{encode_order, NumericFieldMode};
//! use serde_json::json;
//!
//! let order = json!({"items": [{"price": "3.00", "sku": "A-1"}], "total": "12.50"});
//!
//! let legacy = encode_order(&order, NumericFieldMode::Legacy).unwrap();
//! assert_eq!(legacy, r#"{"items":[{"price":3.00,"sku":"A-1"}],"total":"12.50"}"#);
//!
//! let structural = encode_order(&order, NumericFieldMode::Structural).unwrap();
//! assert_eq!(structural, r#"{"items":[{"price":3.00,"sku":"A-1"}],"total":12.50}"#);
//! ```

mod legacy;
mod structural;

pub use legacy::normalize_numeric_fields;
pub use structural::coerce_numeric_fields;

use serde::Serialize;

/// Order fields that must be transmitted as bare numbers.
pub const NUMERIC_FIELDS: [&str; 6] = [
    "subtotal",
    "total",
    "discount",
    "shippingRate",
    "price",
    "quantity",
];

/// Strategy used to force numeric order fields out of string form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NumericFieldMode {
    /// Patch the serialized text with the historical regex passes.
    ///
    /// A field that is the last key of its object keeps its quotes, and an
    /// empty string collapses to an empty token (`"price":,`).
    #[default]
    Legacy,
    /// Convert values on the parsed JSON tree. Always yields valid JSON.
    Structural,
}

/// Serializes an order payload and normalizes its numeric fields.
///
/// # Errors
///
/// Returns the [`serde_json::Error`] raised by the serializer, unchanged.
pub fn encode_order<T>(order: &T, mode: NumericFieldMode) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    match mode {
        NumericFieldMode::Structural => {
            let mut value = serde_json::to_value(order)?;
            let coerced = coerce_numeric_fields(&mut value);
            tracing::debug!("Coerced {} numeric order field(s)", coerced);
            serde_json::to_string(&value)
        }
        NumericFieldMode::Legacy => {
            let json = serde_json::to_string(order)?;
            Ok(normalize_numeric_fields(&json))
        }
    }
}
