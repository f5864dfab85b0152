use unicode_segmentation::UnicodeSegmentation;

/// Splits text into sentences on punctuation boundaries (Unicode sentence rules).
///
/// Line breaks inside a sentence do not end it: extracted PDF text wraps lines
/// mid-sentence. Sentences are trimmed, whitespace-only segments are dropped, and
/// every item is a slice of `text` in source order.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    // `\r` and `\n` map to a single-byte space, so byte offsets carry over to `text`.
    let flattened: String = text
        .chars()
        .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
        .collect();

    let bounds: Vec<(usize, usize)> = flattened
        .split_sentence_bound_indices()
        .map(|(start, sentence)| (start, start + sentence.len()))
        .collect();

    bounds
        .into_iter()
        .map(move |(start, end)| text[start..end].trim())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_punctuation() {
        let raw_text = "This is sentence one. This is sentence two, with a comma. Third sentence!";
        let sentences: Vec<&str> = split_sentences(raw_text).collect();
        assert_eq!(
            sentences,
            vec![
                "This is sentence one.",
                "This is sentence two, with a comma.",
                "Third sentence!",
            ]
        );
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert_eq!(split_sentences("").count(), 0);
        assert_eq!(split_sentences("   \n\t ").count(), 0);
    }

    #[test]
    fn line_wrapped_sentence_stays_whole() {
        let text = "This sentence is long and it wraps\nacross two lines of the page. Next one.";
        let sentences: Vec<&str> = split_sentences(text).collect();
        assert_eq!(
            sentences,
            vec![
                "This sentence is long and it wraps\nacross two lines of the page.",
                "Next one.",
            ]
        );
    }

    #[test]
    fn carriage_returns_do_not_split_either() {
        let sentences: Vec<&str> = split_sentences("First half\r\nsecond half. Done.").collect();
        assert_eq!(sentences, vec!["First half\r\nsecond half.", "Done."]);
    }

    #[test]
    fn keeps_question_marks_attached() {
        let sentences: Vec<&str> = split_sentences("Is this a question? Yes it is.").collect();
        assert_eq!(sentences, vec!["Is this a question?", "Yes it is."]);
    }
}
