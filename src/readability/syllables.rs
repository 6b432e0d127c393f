#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Rule-based syllable counting.
//!
//! Counts groups of adjacent vowels and then corrects for the most common
//! silent endings of English words. No pronunciation dictionary is consulted.

use itertools::Itertools;

/// Letters that may start a new vowel group.
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Consonants after which a plural `es` is still pronounced (`boxes`,
/// `pages`).
const VOICED_ES: &[char] = &['s', 'x', 'z', 'c', 'g', 'h'];

/// Whether `c` is one of `a e i o u`, ignoring `y`.
fn is_plain_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Estimates the number of syllables in a single word.
///
/// Punctuation and digits are ignored; a token without any letters has zero
/// syllables, every other word has at least one.
pub fn count(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if letters.is_empty() {
        return 0;
    }

    // A leading `y` (`yes`, `young`) is a consonant.
    let groups = letters
        .iter()
        .enumerate()
        .map(|(i, c)| VOWELS.contains(c) && !(i == 0 && *c == 'y'))
        .dedup()
        .filter(|is_vowel| *is_vowel)
        .count();

    if groups > 1 && has_silent_ending(&letters) {
        groups - 1
    } else {
        groups.max(1)
    }
}

/// Whether the word ends in a letter group that adds no syllable of its own.
fn has_silent_ending(letters: &[char]) -> bool {
    match letters {
        // `table`, `able`: the `le` is its own syllable.
        [.., c, 'l', 'e'] if !VOWELS.contains(c) => false,
        // `make`, `whole`, but not `agree`.
        [.., c, 'e'] => !is_plain_vowel(*c),
        // `jumped`, `stopped`, but not `wanted` or `needed`.
        [.., c, 'e', 'd'] => !is_plain_vowel(*c) && !matches!(*c, 't' | 'd'),
        // `makes`, but not `boxes` or `pages`.
        [.., c, 'e', 's'] => !is_plain_vowel(*c) && !VOICED_ES.contains(c),
        _ => false,
    }
}

/// Total syllables over every word in `words`.
pub fn total<'a>(words: impl IntoIterator<Item = &'a str>) -> usize {
    words.into_iter().map(count).sum()
}
