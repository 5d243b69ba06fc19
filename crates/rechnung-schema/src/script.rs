//! HTML embedding of serialized JSON-LD.

/// Wrap a serialized JSON-LD payload in a script tag.
///
/// A string value containing `</script>` would otherwise terminate the
/// tag early, so the HTML-significant characters are rewritten to their
/// JSON unicode escapes first; the payload stays valid JSON.
pub(crate) fn script_tag(json: &str) -> String {
    format!(
        r#"<script type="application/ld+json">{}</script>"#,
        escape(json)
    )
}

fn escape(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            _ => escaped.push(c),
        }
    }
    escaped
}
