//! Text clean-up for bar labels.

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Decode HTML character references such as `&#26481;` or `&amp;`.
///
/// Some internet radios publish their titles this way.
pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Limit `text` to `max` characters, appending [`ELLIPSIS`] when cut.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
pub fn enforce_size(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Decode, then size-limit, a label.
pub fn label(text: &str, max: usize) -> String {
    enforce_size(&decode_entities(text), max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(enforce_size("Song", 30), "Song");
        assert_eq!(enforce_size("Song", 4), "Song");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(enforce_size("Bohemian Rhapsody", 8), "Bohemian...");
    }

    #[test]
    fn multibyte_text_is_cut_on_characters() {
        assert_eq!(enforce_size("東京事変", 2), "東京...");
    }

    #[test]
    fn entities_are_decoded_before_cutting() {
        assert_eq!(label("&#26481;&#20140;", 2), "東京");
        assert_eq!(label("Rock &amp; Roll", 6), "Rock &...");
    }
}
