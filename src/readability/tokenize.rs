#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::constants::SENTENCE_TERMINATORS;

/// Iterates over the whitespace-separated words of `text`.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Number of whitespace-separated words in `text`.
pub fn word_count(text: &str) -> usize {
    words(text).count()
}

/// Iterates over the sentences of `text`.
///
/// A sentence is a run of text between terminal punctuation marks that holds
/// at least one letter or digit, so ellipses and stray punctuation do not
/// produce extra sentences.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
}

/// Number of sentences in `text`, never less than one.
pub fn sentence_count(text: &str) -> usize {
    sentences(text).count().max(1)
}
