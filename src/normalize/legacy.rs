//! Text-level numeric field normalization.

use regex::Regex;
use std::sync::LazyLock;

/// Replacement keeping the field prefix, the digits and the comma.
const REPLACEMENT: &str = "${1}${3}${5}";

/// One pattern per pass, applied in this order.
///
/// `total":` has no leading quote, so it also matches inside `subtotal":`.
/// The same holds for every key ending in one of the field names.
static PASSES: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        r#"(subtotal|total":)(")([0-9.]*)(")(,)"#,
        r#"(discount":)(")([0-9.]*)(")(,)"#,
        r#"(shippingRate":)(")([0-9.]*)(")(,)"#,
        r#"(price":)(")([0-9.]*)(")(,)"#,
        r#"(quantity":)(")([0-9.]*)(")(,)"#,
    ]
    .map(|pattern| Regex::new(pattern).expect("Invalid numeric field pattern"))
});

/// Strips the quotes around numeric-looking order fields in a JSON text.
///
/// Each pass rewrites `<field>":"<digits and dots>",` into
/// `<field>":<digits and dots>,`. A match needs the trailing comma, so a
/// field that closes its object is left as a string. An empty string
/// matches too and leaves an empty token behind (`"price":,`), which is
/// not valid JSON. Text that does not match passes through untouched.
///
/// # Example
///
/// ```rust
/// use ecwid_api::normalize::normalize_numeric_fields;
///
/// let json = r#"{"price":"3.00","quantity":"2"}"#;
/// assert_eq!(normalize_numeric_fields(json), r#"{"price":3.00,"quantity":"2"}"#);
/// ```
#[must_use]
pub fn normalize_numeric_fields(json: &str) -> String {
    let mut text = json.to_string();
    let mut rewritten = 0;

    for pass in PASSES.iter() {
        let hits = pass.find_iter(&text).count();
        if hits > 0 {
            rewritten += hits;
            text = pass.replace_all(&text, REPLACEMENT).into_owned();
        }
    }

    tracing::debug!("Unquoted {} numeric order field(s)", rewritten);
    text
}
