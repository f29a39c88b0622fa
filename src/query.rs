//! Product query-string construction.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes percent-encoded in a query component: everything except
/// alphanumerics and the unreserved marks `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for use as a query-string component.
///
/// Reserved and unsafe characters (spaces, `:`, `&`, `=`, ...) become
/// uppercase-hex escapes; the unreserved marks, `!` included, pass through.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Build a product query string: `?p=<product>&q=<quantity>`, with a bare
/// `&gift` flag appended when the order is a gift.
///
/// A quantity of zero or less is floored to 1.
pub fn build_query_string(product: &str, quantity: i64, gift: bool) -> String {
    let quantity = quantity.max(1);
    let mut query = format!("?p={}&q={}", encode_component(product), quantity);
    if gift {
        query.push_str("&gift");
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_and_quantity() {
        assert_eq!(build_query_string("shirt", 6, false), "?p=shirt&q=6");
    }

    #[test]
    fn test_gift_flag_appended_bare() {
        assert_eq!(build_query_string("shirt", 6, true), "?p=shirt&q=6&gift");
    }

    #[test]
    fn test_reserved_characters_encoded() {
        assert_eq!(
            build_query_string("Shirt: Cool & Red!", 2, false),
            "?p=Shirt%3A%20Cool%20%26%20Red!&q=2"
        );
    }

    #[test]
    fn test_zero_quantity_floored_to_one() {
        assert_eq!(build_query_string("shirt", 0, false), "?p=shirt&q=1");
    }

    #[test]
    fn test_negative_quantity_floored_to_one() {
        assert_eq!(build_query_string("shirt", -5, false), "?p=shirt&q=1");
    }

    #[test]
    fn test_unreserved_marks_pass_through() {
        assert_eq!(encode_component("a!b*c'd(e)f-g_h.i~j"), "a!b*c'd(e)f-g_h.i~j");
    }

    #[test]
    fn test_equals_and_plus_encoded() {
        assert_eq!(encode_component("a=b+c"), "a%3Db%2Bc");
    }

    #[test]
    fn test_non_ascii_encoded_as_utf8() {
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }
}
