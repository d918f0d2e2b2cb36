//! Fixed-width table helpers.

/// Character-based truncation with a trailing ellipsis marker.
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

/// An em dash for missing optional values.
pub(crate) fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("\u{2014}").to_string()
}
