//! Hangman target word
//!
//! A Word stores an uppercase word along with the set of distinct letters it contains.

use super::Letter;
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// An uppercase word made only of letters A-Z
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<Letter>,
    distinct: FxHashSet<Letter>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing is left after trimming
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("apple").unwrap();
    /// assert_eq!(word.text(), "APPLE");
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("ice-cream").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = trimmed
            .chars()
            .map(|c| Letter::from_char(c).ok_or(WordError::InvalidCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let text = letters.iter().copied().map(Letter::as_char).collect();
        let distinct = letters.iter().copied().collect();

        Ok(Self {
            text,
            letters,
            distinct,
        })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters in their original order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false, kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.distinct.contains(&letter)
    }

    /// How many times a letter appears
    #[must_use]
    pub fn occurrences(&self, letter: Letter) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }

    /// Distinct letters in the word
    pub fn distinct_letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.distinct.iter().copied()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
