//! Request parameters passed from endpoint methods to the transport.

use serde::Serialize;
use serde_json::{Map, Value};

/// Parameter key holding the serialized order on order writes.
pub const DATA_PARAM: &str = "data";

/// An insertion-ordered mapping of request parameters.
///
/// Keys keep the order they were added in, both in the query string and in
/// a JSON body.
///
/// For GET and DELETE requests the parameters become the query string. For
/// POST and PUT requests they become the JSON body, except when the only
/// parameter is `data`: its string value is then sent verbatim as the body.
///
/// # Example
///
/// ```rust
/// use ecwid_api::clients::RequestParams;
///
/// let filter = RequestParams::new()
///     .insert("keyword", "shirt")
///     .insert("limit", 10);
///
/// assert_eq!(
///     filter.to_query_pairs(),
///     vec![
///         ("keyword".to_string(), "shirt".to_string()),
///         ("limit".to_string(), "10".to_string()),
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequestParams(Map<String, Value>);

impl RequestParams {
    /// Creates an empty parameter mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a serialized order under the `data` key.
    #[must_use]
    pub fn data(json: impl Into<String>) -> Self {
        Self::new().insert(DATA_PARAM, json.into())
    }

    /// Builds parameters from any value serializing to a JSON object.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails or the value
    /// is not an object.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(serde::de::Error::custom(format!(
                "request parameters must serialize to an object, got {other}"
            ))),
        }
    }

    /// Adds a parameter, replacing any previous value for the key.
    #[must_use]
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Returns the raw order text when the parameters hold only `data`.
    #[must_use]
    pub fn raw_data(&self) -> Option<&str> {
        if self.0.len() == 1 {
            self.0.get(DATA_PARAM).and_then(Value::as_str)
        } else {
            None
        }
    }

    /// Renders the parameters as a request body.
    #[must_use]
    pub fn to_body(&self) -> String {
        self.raw_data()
            .map_or_else(|| Value::Object(self.0.clone()).to_string(), String::from)
    }

    /// Renders the parameters as query string pairs.
    ///
    /// Strings are used as-is, numbers and booleans through their display
    /// form, arrays are comma-joined, objects become JSON text and nulls
    /// are skipped.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter_map(|(key, value)| render_query_value(value).map(|v| (key.clone(), v)))
            .collect()
    }
}

fn render_query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => Some(value.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(render_query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
    }
}

impl From<Map<String, Value>> for RequestParams {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParams
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_params_render_raw_body() {
        let params = RequestParams::data(r#"{"total":12.50}"#);
        assert_eq!(params.raw_data(), Some(r#"{"total":12.50}"#));
        assert_eq!(params.to_body(), r#"{"total":12.50}"#);
    }

    #[test]
    fn test_regular_params_render_json_object_body() {
        let params = RequestParams::new()
            .insert("name", "Shirts")
            .insert("parentId", 0);

        assert!(params.raw_data().is_none());
        assert_eq!(params.to_body(), r#"{"name":"Shirts","parentId":0}"#);
    }

    #[test]
    fn test_keys_keep_insertion_order() {
        let params = RequestParams::new()
            .insert("sortBy", "NAME_ASC")
            .insert("limit", 5)
            .insert("keyword", "shirt");

        assert_eq!(
            params.to_body(),
            r#"{"sortBy":"NAME_ASC","limit":5,"keyword":"shirt"}"#
        );
        let keys: Vec<_> = params.to_query_pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["sortBy", "limit", "keyword"]);
    }

    #[test]
    fn test_data_next_to_other_keys_is_not_raw() {
        let params = RequestParams::data("{}").insert("extra", true);
        assert!(params.raw_data().is_none());
        assert_eq!(params.to_body(), r#"{"data":"{}","extra":true}"#);
    }

    #[test]
    fn test_empty_params_render_empty_object_body() {
        assert_eq!(RequestParams::new().to_body(), "{}");
    }

    #[test]
    fn test_query_pairs_render_each_value_type() {
        let params = RequestParams::new()
            .insert("enabled", true)
            .insert("ids", json!([1, 2, 3]))
            .insert("keyword", "blue shirt")
            .insert("offset", 100)
            .insert("option", json!({"Size": "M"}))
            .insert("skipped", Value::Null);

        assert_eq!(
            params.to_query_pairs(),
            vec![
                ("enabled".to_string(), "true".to_string()),
                ("ids".to_string(), "1,2,3".to_string()),
                ("keyword".to_string(), "blue shirt".to_string()),
                ("offset".to_string(), "100".to_string()),
                ("option".to_string(), r#"{"Size":"M"}"#.to_string()),
            ]
        );
    }

    #[test]
    fn test_from_serialize_accepts_structs() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct OrderFilter {
            payment_status: &'static str,
            limit: u32,
        }

        let params = RequestParams::from_serialize(&OrderFilter {
            payment_status: "PAID",
            limit: 5,
        })
        .unwrap();

        assert_eq!(params.get("paymentStatus"), Some(&json!("PAID")));
        assert_eq!(params.get("limit"), Some(&json!(5)));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_from_serialize_rejects_non_objects() {
        assert!(RequestParams::from_serialize(&[1, 2]).is_err());
        assert!(RequestParams::from_serialize("text").is_err());
    }

    #[test]
    fn test_collect_from_pairs() {
        let params: RequestParams = [("limit", 1), ("offset", 2)].into_iter().collect();
        assert_eq!(params.len(), 2);
        assert!(!params.is_empty());
        assert_eq!(params.iter().next().map(|(k, _)| k.as_str()), Some("limit"));
    }
}
