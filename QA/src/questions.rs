use crate::sentences::split_sentences;

/// Sentences with this many words or fewer are not turned into questions.
const MIN_WORDS_EXCLUSIVE: usize = 5;

/// Turns a single sentence into a candidate question, if it qualifies.
///
/// A sentence that already contains `?` is returned as is. Otherwise a sentence
/// with more than five whitespace-separated words is wrapped in a fixed template.
pub fn extract_question(sentence: &str) -> Option<String> {
    if sentence.contains('?') {
        Some(sentence.to_string())
    } else if sentence.split_whitespace().count() > MIN_WORDS_EXCLUSIVE {
        Some(format!("What is the main idea of: {sentence}?"))
    } else {
        None
    }
}

/// Candidate questions for every qualifying sentence of `text`, in document order.
pub fn extract_questions(text: &str) -> Vec<String> {
    split_sentences(text).filter_map(extract_question).collect()
}
