#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::Serialize;

use super::{syllables, tokenize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Word, sentence and syllable counts of a single text.
pub struct Statistics {
    /// Number of whitespace-separated words.
    words:     usize,
    /// Number of sentences, at least one.
    sentences: usize,
    /// Estimated number of syllables across all words.
    syllables: usize,
}

impl Statistics {
    /// Creates statistics from precomputed counts.
    ///
    /// * `words` - number of words
    /// * `sentences` - number of sentences, raised to one if zero
    /// * `syllables` - number of syllables
    pub fn new(words: usize, sentences: usize, syllables: usize) -> Self {
        Self {
            words,
            sentences: sentences.max(1),
            syllables,
        }
    }

    /// Tokenizes `text` and counts its words, sentences and syllables.
    pub fn from_text(text: &str) -> Self {
        Self::new(
            tokenize::word_count(text),
            tokenize::sentence_count(text),
            syllables::total(tokenize::words(text)),
        )
    }

    /// Number of words.
    pub fn words(&self) -> usize {
        self.words
    }

    /// Number of sentences.
    pub fn sentences(&self) -> usize {
        self.sentences
    }

    /// Number of syllables.
    pub fn syllables(&self) -> usize {
        self.syllables
    }

    /// Average sentence length in words.
    pub fn words_per_sentence(&self) -> f64 {
        self.words as f64 / self.sentences as f64
    }

    /// Average word length in syllables, or `None` for a text without words.
    pub fn syllables_per_word(&self) -> Option<f64> {
        (self.words > 0).then(|| self.syllables as f64 / self.words as f64)
    }
}
