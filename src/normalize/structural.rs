//! Tree-level numeric field coercion.

use serde_json::{Number, Value};

use super::NUMERIC_FIELDS;

/// Converts string values of numeric order fields into JSON numbers.
///
/// Every object in the tree is visited. A value is converted when its key
/// is exactly one of [`NUMERIC_FIELDS`] and it is a string of ASCII digits
/// with at most one dot. The digits are kept as written, so `"12.50"`
/// becomes `12.50` and values beyond the range of `u64` or `f64` stay
/// exact. Leading zeros are dropped and a bare leading or trailing dot is
/// completed (`".5"` becomes `0.5`, `"12."` becomes `12`). Empty or
/// unparseable strings are left as they are.
///
/// Returns the number of converted values.
///
/// # Example
///
/// ```rust
/// use ecwid_api::normalize::coerce_numeric_fields;
/// use serde_json::json;
///
/// let mut order = json!({"items": [{"price": "3.00", "quantity": "2"}], "total": "6"});
/// assert_eq!(coerce_numeric_fields(&mut order), 3);
/// assert_eq!(
///     order.to_string(),
///     r#"{"items":[{"price":3.00,"quantity":2}],"total":6}"#
/// );
/// ```
pub fn coerce_numeric_fields(value: &mut Value) -> usize {
    match value {
        Value::Object(map) => map
            .iter_mut()
            .map(|(key, field)| {
                if NUMERIC_FIELDS.contains(&key.as_str()) {
                    if let Some(number) = field.as_str().and_then(parse_number) {
                        *field = Value::Number(number);
                        return 1;
                    }
                }
                coerce_numeric_fields(field)
            })
            .sum(),
        Value::Array(items) => items.iter_mut().map(coerce_numeric_fields).sum(),
        _ => 0,
    }
}

fn parse_number(text: &str) -> Option<Number> {
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text, None),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer) || !fraction.map_or(true, all_digits) {
        return None;
    }
    if integer.is_empty() && fraction.map_or(true, str::is_empty) {
        return None;
    }

    let integer = match integer.trim_start_matches('0') {
        "" => "0",
        digits => digits,
    };
    let literal = match fraction {
        Some(fraction) if !fraction.is_empty() => format!("{integer}.{fraction}"),
        _ => integer.to_string(),
    };

    serde_json::from_str(&literal).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn literal(text: &str) -> Option<String> {
        parse_number(text).map(|number| number.to_string())
    }

    #[test]
    fn test_parse_number_keeps_digits_as_written() {
        assert_eq!(literal("2").as_deref(), Some("2"));
        assert_eq!(literal("12.50").as_deref(), Some("12.50"));
        assert_eq!(literal("0.10").as_deref(), Some("0.10"));
    }

    #[test]
    fn test_parse_number_is_exact_beyond_machine_range() {
        assert_eq!(
            literal("12345678901234567.89").as_deref(),
            Some("12345678901234567.89")
        );
        assert_eq!(
            literal("18446744073709551616").as_deref(),
            Some("18446744073709551616")
        );
    }

    #[test]
    fn test_parse_number_completes_loose_forms() {
        assert_eq!(literal("007").as_deref(), Some("7"));
        assert_eq!(literal("000").as_deref(), Some("0"));
        assert_eq!(literal(".5").as_deref(), Some("0.5"));
        assert_eq!(literal("12.").as_deref(), Some("12"));
    }

    #[test]
    fn test_parse_number_rejects_other_strings() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("1.2.3"), None);
        assert_eq!(parse_number("-1"), None);
        assert_eq!(parse_number("1e3"), None);
        assert_eq!(parse_number(" 1"), None);
    }

    #[test]
    fn test_field_position_does_not_matter() {
        let mut order = json!({"email": "a@example.com", "total": "99.00"});
        assert_eq!(coerce_numeric_fields(&mut order), 1);
        assert_eq!(order.to_string(), r#"{"email":"a@example.com","total":99.00}"#);
    }

    #[test]
    fn test_subtotal_and_total_are_independent() {
        let mut order = json!({"total": "99.00", "subtotal": "10.00"});
        assert_eq!(coerce_numeric_fields(&mut order), 2);
        assert_eq!(order.to_string(), r#"{"total":99.00,"subtotal":10.00}"#);
    }

    #[test]
    fn test_empty_string_is_left_alone() {
        let mut order = json!({"price": "", "sku": "A-1"});
        assert_eq!(coerce_numeric_fields(&mut order), 0);
        assert_eq!(order, json!({"price": "", "sku": "A-1"}));
    }

    #[test]
    fn test_only_exact_keys_are_coerced() {
        let mut order = json!({"membershipdiscount": "1.50", "unitprice": "2"});
        assert_eq!(coerce_numeric_fields(&mut order), 0);
    }

    #[test]
    fn test_nested_occurrences_are_coerced() {
        let mut order = json!({
            "items": [
                {"price": "3.00", "quantity": "2"},
                {"price": "4.50", "quantity": "1"}
            ],
            "shippingOption": {"shippingRate": "5.25"}
        });

        assert_eq!(coerce_numeric_fields(&mut order), 5);
        assert_eq!(order["items"][0]["quantity"], 2);
        assert_eq!(order["items"][1]["price"].to_string(), "4.50");
        assert_eq!(order["shippingOption"]["shippingRate"].to_string(), "5.25");
    }

    #[test]
    fn test_numbers_and_other_types_are_untouched() {
        let mut order = json!({"discount": 1.5, "price": null, "quantity": true});
        let before = order.clone();
        assert_eq!(coerce_numeric_fields(&mut order), 0);
        assert_eq!(order, before);
    }

    #[test]
    fn test_numeric_field_holding_object_is_walked() {
        let mut order = json!({"total": {"price": "1"}});
        assert_eq!(coerce_numeric_fields(&mut order), 1);
        assert_eq!(order, json!({"total": {"price": 1}}));
    }
}
