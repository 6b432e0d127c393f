#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::Serialize;
use tabled::Tabled;

use crate::readability::Assessment;

#[derive(Tabled, Debug, Clone, PartialEq, Serialize)]
/// Flat summary of an assessment, printed by the `score` command.
pub struct Report {
    #[tabled(rename = "Words")]
    /// * `words`: number of whitespace-separated words
    pub words:              usize,
    #[tabled(rename = "Sentences", display = "display_value")]
    /// * `sentences`: number of sentences, if the text was graded
    pub sentences:          Option<usize>,
    #[tabled(rename = "Syllables", display = "display_value")]
    /// * `syllables`: number of syllables, if the text was graded
    pub syllables:          Option<usize>,
    #[tabled(rename = "Words/Sentence", display = "display_ratio")]
    /// * `words_per_sentence`: average sentence length
    pub words_per_sentence: Option<f64>,
    #[tabled(rename = "Syllables/Word", display = "display_ratio")]
    /// * `syllables_per_word`: average word length in syllables
    pub syllables_per_word: Option<f64>,
    #[tabled(rename = "Grade", display = "display_ratio")]
    /// * `grade`: the Flesch-Kincaid grade level
    pub grade:              Option<f64>,
    #[tabled(rename = "Rounded", display = "display_value")]
    /// * `rounded_grade`: the grade level rounded to a whole grade
    pub rounded_grade:      Option<i64>,
    #[tabled(skip)]
    /// * `result`: what the web results page would show
    pub result:             String,
}

/// Renders an optional whole number for the table.
fn display_value<T: std::fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}

/// Renders an optional ratio for the table.
fn display_ratio(value: &Option<f64>) -> String {
    value
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "-".into())
}

impl From<&Assessment> for Report {
    fn from(assessment: &Assessment) -> Self {
        let result = assessment.to_string();
        match assessment {
            Assessment::Graded(grade) => {
                let stats = grade.stats();
                Self {
                    words: stats.words(),
                    sentences: Some(stats.sentences()),
                    syllables: Some(stats.syllables()),
                    words_per_sentence: Some(stats.words_per_sentence()),
                    syllables_per_word: stats.syllables_per_word(),
                    grade: Some(grade.score()),
                    rounded_grade: Some(grade.rounded()),
                    result,
                }
            }
            Assessment::TooShort { words } => Self {
                words: *words,
                sentences: None,
                syllables: None,
                words_per_sentence: None,
                syllables_per_word: None,
                grade: None,
                rounded_grade: None,
                result,
            },
        }
    }
}
