//! Guessable letters
//!
//! A Letter is a single uppercase ASCII letter A-Z. Input in either case is
//! normalized to uppercase; everything else is rejected.

use std::fmt;

/// Number of guessable letters
pub const ALPHABET_LEN: usize = 26;

/// A single uppercase letter A-Z
///
/// Stored as its ASCII byte so it is `Copy` and orders alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Parse a letter from a character, normalizing case
    ///
    /// Returns `None` for anything that isn't an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('q'), Letter::from_char('Q'));
    /// assert!(Letter::from_char('7').is_none());
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self((c as u8).to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// The uppercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Letter at alphabet position `index`, wrapping past Z back to A
    #[must_use]
    pub const fn nth(index: usize) -> Self {
        Self(b'A' + (index % ALPHABET_LEN) as u8)
    }

    /// All letters in alphabetical order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
