/// Placeholder written in place of a blank or missing field.
pub const EMPTY_FIELD: &str = "-";

/// Escapes special HTML characters in a string.
///
/// Used before any caller-supplied value is embedded in template markup, so a
/// field value can never open a tag or break out of an attribute.
///
/// # Returns
/// A new string with `&`, `<`, `>`, `"`, and `'` replaced by their respective
/// HTML entities.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders an optional field for inclusion in HTML: trimmed and escaped, or
/// [`EMPTY_FIELD`] when absent or blank.
pub fn field_html(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => escape_html(v),
        _ => EMPTY_FIELD.to_string(),
    }
}
