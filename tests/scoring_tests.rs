//! Tests for the grading pipeline on whole texts.

use fkgrade::{
    Assessment, GradeLevel, ScoreError, Statistics, assess,
    constants::{MIN_WORDS, TOO_SHORT_MESSAGE},
    score,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const SENTENCE: &str =
    "the cat sat on the mat and the dog ran to the big red box by the old oak tree";

/// Five twenty-word sentences of one-syllable words.
fn hundred_simple_words() -> String {
    vec![format!("{SENTENCE}."); 5].join(" ")
}

/// `n` one-letter words in a single sentence.
fn words(n: usize) -> String {
    let mut text = vec!["a"; n].join(" ");
    text.push('.');
    text
}

#[test]
fn worked_example_grades_four_point_oh_one() {
    let text = hundred_simple_words();
    let grade = score(&text).expect("score text");

    assert_eq!(*grade.stats(), Statistics::new(100, 5, 100));
    assert!((grade.score() - 4.01).abs() < 0.01, "got {}", grade.score());

    let assessment = assess(&text).expect("assess text");
    assert_eq!(assessment.to_string(), "4.01");
}

#[test]
fn short_text_gets_fixed_message() {
    let assessment = assess("This is far too short to grade.").expect("assess text");
    assert!(assessment.is_too_short());
    assert_eq!(assessment.to_string(), TOO_SHORT_MESSAGE);
}

#[test]
fn minimum_word_count_is_inclusive() {
    let at_minimum = assess(&words(MIN_WORDS)).expect("assess text");
    assert!(matches!(at_minimum, Assessment::Graded(_)));

    let below = assess(&words(MIN_WORDS - 1)).expect("assess text");
    assert_eq!(below, Assessment::TooShort { words: MIN_WORDS - 1 });
}

#[test]
fn unpunctuated_text_is_one_sentence() {
    let text = vec![SENTENCE; 5].join(" ");
    let grade = score(&text).expect("score text");
    assert_eq!(grade.stats().sentences(), 1);
    assert!(grade.score().is_finite());
}

#[test]
fn empty_text_cannot_be_scored() {
    assert_eq!(score(""), Err(ScoreError::EmptyText));
    assert_eq!(assess("").expect("assess text"), Assessment::TooShort { words: 0 });
}

#[test]
fn longer_words_raise_the_grade() {
    let simple = score(&hundred_simple_words()).expect("score text");
    let harder = hundred_simple_words().replace("cat", "elephant");
    let harder = score(&harder).expect("score text");

    assert_eq!(harder.stats().words(), simple.stats().words());
    assert!(harder.stats().syllables() > simple.stats().syllables());
    assert!(harder.score() > simple.score());
}

proptest! {
    #[test]
    fn assessment_is_idempotent(text in "[a-zA-Z .!?,'\n]{0,800}") {
        prop_assert_eq!(assess(&text), assess(&text));
    }

    #[test]
    fn more_syllables_means_higher_grade(
        words in 1usize..2_000,
        sentences in 1usize..200,
        syllables in 0usize..5_000,
    ) {
        let lower = GradeLevel::from_stats(Statistics::new(words, sentences, syllables)).unwrap();
        let higher = GradeLevel::from_stats(Statistics::new(words, sentences, syllables + 1)).unwrap();
        prop_assert!(higher.score() > lower.score());
    }

    #[test]
    fn score_never_panics(text in "\\PC{0,400}") {
        let _ = score(&text);
    }
}
