use unicode_segmentation::UnicodeSegmentation;

/// Count user-visible grapheme clusters.
pub(crate) fn grapheme_count(content: &str) -> usize {
    UnicodeSegmentation::graphemes(content, true).count()
}

/// Convert a grapheme index to a byte index in a UTF-8 string.
pub(crate) fn grapheme_to_byte_idx(content: &str, grapheme_idx: usize) -> usize {
    if grapheme_idx == 0 {
        return 0;
    }
    match UnicodeSegmentation::grapheme_indices(content, true).nth(grapheme_idx) {
        Some((idx, _)) => idx,
        None => content.len(),
    }
}

/// Split after the first `grapheme_idx` grapheme clusters.
pub(crate) fn split_at_grapheme(content: &str, grapheme_idx: usize) -> (&str, &str) {
    content.split_at(grapheme_to_byte_idx(content, grapheme_idx))
}

/// A grapheme cluster made only of whitespace.
pub(crate) fn is_blank(grapheme: &str) -> bool {
    grapheme.chars().all(char::is_whitespace)
}
