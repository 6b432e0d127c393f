#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::Serialize;
use thiserror::Error;

use super::{stats::Statistics, tokenize};
use crate::{
    constants::{
        GRADE_OFFSET, MIN_WORDS, SYLLABLES_PER_WORD_WEIGHT, TOO_SHORT_MESSAGE,
        WORDS_PER_SENTENCE_WEIGHT,
    },
    validation,
};

/// Errors raised while scoring a text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// The text has no words, so the average word length is undefined.
    #[error("Cannot compute a Flesch Kincaid grade level for text without any words")]
    EmptyText,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// A Flesch-Kincaid grade level together with the counts it was computed
/// from.
pub struct GradeLevel {
    /// The unclamped grade level.
    score: f64,
    /// Counts of the scored text.
    stats: Statistics,
}

impl GradeLevel {
    /// Applies the Flesch-Kincaid formula to `stats`.
    pub fn from_stats(stats: Statistics) -> Result<Self, ScoreError> {
        let syllables_per_word = stats.syllables_per_word().ok_or(ScoreError::EmptyText)?;
        let score = WORDS_PER_SENTENCE_WEIGHT * stats.words_per_sentence()
            + SYLLABLES_PER_WORD_WEIGHT * syllables_per_word
            - GRADE_OFFSET;

        Ok(Self { score, stats })
    }

    /// The grade level. May be negative or fractional.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// The grade level rounded to the nearest whole grade.
    pub fn rounded(&self) -> i64 {
        self.score.round() as i64
    }

    /// Counts of the scored text.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }
}

impl Display for GradeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.score)
    }
}

/// Computes the Flesch-Kincaid grade level of `text`.
///
/// Does not enforce the minimum word count; see [`assess`] for that.
pub fn score(text: &str) -> Result<GradeLevel, ScoreError> {
    GradeLevel::from_stats(Statistics::from_text(text))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Outcome of grading a submitted text: either a grade level, or a note that
/// the text is too short to grade.
pub enum Assessment {
    /// The text met the minimum word count and was scored.
    Graded(GradeLevel),
    /// The text had fewer than [`MIN_WORDS`] words.
    TooShort {
        /// Number of words the text had.
        words: usize,
    },
}

impl Assessment {
    /// Returns the grade level if the text was scored.
    pub fn grade(&self) -> Option<&GradeLevel> {
        match self {
            Assessment::Graded(grade) => Some(grade),
            Assessment::TooShort { .. } => None,
        }
    }

    /// Whether the text was rejected for being too short.
    pub fn is_too_short(&self) -> bool {
        matches!(self, Assessment::TooShort { .. })
    }
}

impl Display for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Assessment::Graded(grade) => write!(f, "{grade}"),
            Assessment::TooShort { .. } => f.write_str(TOO_SHORT_MESSAGE),
        }
    }
}

/// Scores `text` if it has at least [`MIN_WORDS`] words.
pub fn assess(text: &str) -> Result<Assessment, ScoreError> {
    if !validation::meets_word_floor(text) {
        let words = tokenize::word_count(text);
        tracing::debug!("Text has {words} words, needs {MIN_WORDS} to be graded");
        return Ok(Assessment::TooShort { words });
    }

    score(text).map(Assessment::Graded)
}
