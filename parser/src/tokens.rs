//! Token classification helpers.

/// Splits a token at the first `=` into a name and an attached value.
pub fn split_attached(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    }
}

/// Whether the token parses as a negative number (`-5`, `-0.5`).
///
/// Negative numbers are acceptable in value position even though they start
/// with a dash.
pub fn is_negative_number(token: &str) -> bool {
    token.starts_with('-') && token[1..].parse::<f64>().is_ok()
}

/// Whether a defaults value marks a boolean option as present.
pub fn is_truthy(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes") || value == "1"
}

/// Strips exactly one pair of surrounding double quotes, if present.
///
/// A value whose inner text contains another quote is left intact, so
/// `"a"b"` does not become `a"b`.
pub fn strip_surrounding_quotes(value: &str) -> &str {
    if value.len() >= 2
        && value.starts_with('"')
        && value.ends_with('"')
        && !value[1..value.len() - 1].contains('"')
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
