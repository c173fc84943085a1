//! Sentence-respecting text chunking.
//!
//! The abstractive summarization backend has an input-length ceiling far
//! below a typical report, so text is cut into chunks at or before
//! `max_chunk_size`, preferring the last sentence terminator in range and
//! hard-cutting only when a chunk-sized span has no terminator at all.

/// Split text into chunks whose concatenation equals the input exactly.
///
/// Each chunk except possibly the last is at most `max_chunk_size` bytes,
/// ends at a '.' when one exists in range (terminator included), and is
/// otherwise hard-cut at the nearest UTF-8 boundary at or below the limit.
pub fn chunk_text(text: &str, max_chunk_size: usize) -> Vec<&str> {
    debug_assert!(max_chunk_size > 0);
    let mut chunks = Vec::new();
    let mut rest = text;

    while rest.len() > max_chunk_size {
        let cap = floor_char_boundary(rest, max_chunk_size);
        let mut split = match rest[..cap].rfind('.') {
            Some(idx) => idx + 1,
            None => cap,
        };
        if split == 0 {
            // A single oversized character; take it whole rather than loop.
            split = rest
                .char_indices()
                .nth(1)
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
        }
        chunks.push(&rest[..split]);
        rest = &rest[split..];
    }

    if !rest.is_empty() {
        chunks.push(rest);
    }

    chunks
}

/// Largest index `<= at` that falls on a char boundary.
fn floor_char_boundary(s: &str, at: usize) -> usize {
    if at >= s.len() {
        return s.len();
    }
    let mut i = at;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_single_chunk() {
        let chunks = chunk_text("Short report.", 900);
        assert_eq!(chunks, vec!["Short report."]);
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(chunk_text("", 900).is_empty());
    }

    #[test]
    fn concatenation_is_lossless() {
        let text = "Sentence one. Sentence two is a bit longer. Third sentence here. ".repeat(40);
        let chunks = chunk_text(&text, 300);
        let reassembled: String = chunks.concat();
        assert_eq!(reassembled, text);
    }

    #[test]
    fn chunks_respect_max_size_except_last() {
        let text = "Word after word keeps going. ".repeat(100);
        let chunks = chunk_text(&text, 250);
        for chunk in &chunks[..chunks.len() - 1] {
            assert!(chunk.len() <= 250, "chunk too large: {} bytes", chunk.len());
        }
    }

    #[test]
    fn splits_at_sentence_terminator() {
        let text = "First part ends here. Second part follows and runs long enough to overflow.";
        let chunks = chunk_text(text, 40);
        assert_eq!(chunks[0], "First part ends here.");
    }

    #[test]
    fn hard_cut_when_no_terminator_in_range() {
        // Two sentences, 1800 chars, no '.' before position 900: the first
        // chunk is a hard cut of exactly 900.
        let sentence_one = format!("{}.", "a".repeat(999));
        let sentence_two = format!("{}.", "b".repeat(799));
        let text = format!("{sentence_one}{sentence_two}");
        assert_eq!(text.len(), 1800);

        let chunks = chunk_text(&text, 900);
        assert_eq!(chunks[0].len(), 900);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn hard_cut_lands_on_char_boundary() {
        let text = "é".repeat(1000); // 2 bytes per char, no terminators
        let chunks = chunk_text(&text, 901);
        assert_eq!(chunks[0].len(), 900);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn terminator_included_in_chunk() {
        let text = "One. Two. Three. Four. Five. Six. Seven. Eight. Nine. Ten.";
        let chunks = chunk_text(text, 20);
        for chunk in &chunks[..chunks.len() - 1] {
            assert!(chunk.ends_with('.'), "chunk missing terminator: {chunk:?}");
        }
    }
}
