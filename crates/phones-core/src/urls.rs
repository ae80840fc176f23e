//! URL helpers for listing and image links.

/// Make a brand safe to embed as a URL query value.
pub fn encode_query_value(value: &str) -> String {
    value.replace(' ', "%20")
}

/// Placeholder image URL of the given size captioned with `text`.
pub fn placeholder_image(width: u32, height: u32, text: &str) -> String {
    format!(
        "https://via.placeholder.com/{width}x{height}?text={}",
        encode_query_value(text)
    )
}
