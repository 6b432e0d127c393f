#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Preconditions a submitted text must meet before it is graded.
//!
//! There are two independent gates. The form gate runs on the raw field value
//! and counts characters; the word gate runs before the formula and counts
//! whitespace-separated words. A text of 100 one-letter words passes both.

use thiserror::Error;

use crate::{
    constants::{MIN_CHARS, MIN_WORDS},
    readability::tokenize,
};

/// Reasons a submitted form field is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The field was missing, empty, or only whitespace.
    #[error("This field is required.")]
    Required,
    /// The field had fewer than the minimum number of characters.
    #[error("Field must be at least {minimum} characters long.")]
    TooShort {
        /// Number of characters submitted.
        length:  usize,
        /// Number of characters required.
        minimum: usize,
    },
}

/// Checks the raw value of the text field.
pub fn validate_form(value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::Required);
    }

    let length = value.chars().count();
    if length < MIN_CHARS {
        return Err(FormError::TooShort {
            length,
            minimum: MIN_CHARS,
        });
    }

    Ok(())
}

/// Whether `text` has at least [`MIN_WORDS`] words.
pub fn meets_word_floor(text: &str) -> bool {
    tokenize::word_count(text) >= MIN_WORDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_field_is_required() {
        assert_eq!(validate_form(""), Err(FormError::Required));
        assert_eq!(validate_form("   \n\t"), Err(FormError::Required));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let accented = "é".repeat(99);
        assert_eq!(
            validate_form(&accented),
            Err(FormError::TooShort {
                length:  99,
                minimum: 100,
            })
        );
        assert_eq!(validate_form(&"é".repeat(100)), Ok(()));
    }

    #[test]
    fn message_names_the_minimum() {
        let err = validate_form("short").unwrap_err();
        assert_eq!(err.to_string(), "Field must be at least 100 characters long.");
    }

    #[test]
    fn word_floor_is_inclusive() {
        assert!(meets_word_floor(&"a ".repeat(100)));
        assert!(!meets_word_floor(&"a ".repeat(99)));
    }
}
