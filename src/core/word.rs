//! Wordle word representation
//!
//! A Word stores a 5-letter, lowercase-normalized word as bytes.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every guess and target
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word
///
/// Immutable once built. Comparison is case-insensitive because construction
/// normalizes to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            // Report length first for inputs that are simply too long/short
            let count = text.chars().count();
            if count != WORD_LENGTH {
                return Err(WordError::InvalidLength(count));
            }
            return Err(WordError::InvalidCharacters);
        }

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self {
            letters: letters.map(|b| b.to_ascii_lowercase()),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Construction only admits ASCII letters
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Seeds the availability pool used when scoring duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new("cranes"), Err(WordError::InvalidLength(6)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert!(Word::new("cränе").is_err());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'c');
        assert_eq!(word.letter_at(2), b'a');
        assert_eq!(word.letter_at(4), b'e');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'z'), None);
    }

    #[test]
    fn word_letter_counts_all_same() {
        let word = Word::new("aaaaa").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'a'), Some(&5));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Slate".parse().unwrap();
        assert_eq!(format!("{word}"), "slate");
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }
}
