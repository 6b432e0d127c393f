#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Minimum number of whitespace-separated words a text needs before it is
/// scored.
pub const MIN_WORDS: usize = 100;

/// Minimum number of characters the submitted form field must contain.
pub const MIN_CHARS: usize = 100;

/// Result shown in place of a grade when the text has fewer than
/// [`MIN_WORDS`] words.
pub const TOO_SHORT_MESSAGE: &str =
    "ERROR: This piece of text is too short to get a Flesch Kincaid grade level.";

/// Name of the textarea on the input form.
pub const FORM_FIELD: &str = "textreadability";

/// Weight applied to the average number of words per sentence.
pub const WORDS_PER_SENTENCE_WEIGHT: f64 = 0.39;

/// Weight applied to the average number of syllables per word.
pub const SYLLABLES_PER_WORD_WEIGHT: f64 = 11.8;

/// Constant subtracted from the weighted sum.
pub const GRADE_OFFSET: f64 = 15.59;

/// Characters that terminate a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];
