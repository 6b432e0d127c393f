#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Flesch-Kincaid formula and the grading pipeline.
pub mod score;
/// Word, sentence and syllable counts.
pub mod stats;
/// Syllable counting heuristic.
pub mod syllables;
/// Word and sentence splitting.
pub mod tokenize;

pub use score::{Assessment, GradeLevel, ScoreError, assess, score};
pub use stats::Statistics;
