//! Word list loading utilities
//!
//! Parses newline-delimited word lists from files or the embedded constant into a
//! [`WordList`], which is guaranteed to hold at least one word.

use crate::core::Word;
use rand::Rng;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Errors raised while loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list has no usable words")]
    Empty,
}

/// A non-empty list of candidate words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a list from already-validated words
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// Parse newline-delimited text
    ///
    /// Lines are trimmed, blank lines are dropped, and entries that aren't plain
    /// letters are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if no line holds a usable word.
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::loader::WordList;
    ///
    /// let list = WordList::parse("apple\r\n\n  pear  \n").unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert!(WordList::parse(" \n\t\n").is_err());
    /// ```
    pub fn parse(content: &str) -> Result<Self, WordListError> {
        Self::new(parse_lines(content.lines()))
    }

    /// Pick a word uniformly at random
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false, a `WordList` can't be built empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, or
/// `WordListError::Empty` if it holds no usable words.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    WordList::parse(&content)
}

/// Convert an embedded string slice to a word list
///
/// # Errors
///
/// Returns `WordListError::Empty` if the slice holds no usable words.
///
/// # Examples
/// ```
/// use hangman::wordlists::WORDS;
/// use hangman::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(WORDS).unwrap();
/// assert_eq!(words.len(), WORDS.len());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<WordList, WordListError> {
    WordList::new(parse_lines(slice.iter().copied()))
}

fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(err) => {
                warn!(entry = line, %err, "skipping word list entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["apple", "Pear", "KIWI"]).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words.words()[0].text(), "APPLE");
        assert_eq!(words.words()[1].text(), "PEAR");
        assert_eq!(words.words()[2].text(), "KIWI");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["apple", "ice cream", "r2d2", "", "plum"]).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words.words()[0].text(), "APPLE");
        assert_eq!(words.words()[1].text(), "PLUM");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(matches!(words_from_slice(input), Err(WordListError::Empty)));
    }

    #[test]
    fn parse_trims_and_drops_blank_lines() {
        let list = WordList::parse("  apple \r\n\r\n\tlemon\n   \n").unwrap();
        let texts: Vec<&str> = list.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["APPLE", "LEMON"]);
    }

    #[test]
    fn parse_whitespace_only_is_empty() {
        assert!(matches!(
            WordList::parse("\n  \r\n\t\n"),
            Err(WordListError::Empty)
        ));
        assert!(matches!(WordList::parse(""), Err(WordListError::Empty)));
    }

    #[test]
    fn parse_only_invalid_entries_is_empty() {
        assert!(matches!(
            WordList::parse("123\nfoo-bar\n"),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_from_file("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }

    #[test]
    fn load_from_temp_file() {
        let path = std::env::temp_dir().join(format!("hangman-words-{}.txt", std::process::id()));
        fs::write(&path, "river\n\nocean\n").unwrap();

        let list = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.words()[1].text(), "OCEAN");
    }

    #[test]
    fn pick_single_word_list() {
        let list = words_from_slice(&["apple"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(list.pick(&mut rng).text(), "APPLE");
        }
    }

    #[test]
    fn pick_reaches_every_word() {
        let list = words_from_slice(&["apple", "pear", "plum", "kiwi"]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 4];
        for _ in 0..400 {
            let picked = list.pick(&mut rng);
            let idx = list.words().iter().position(|w| w == picked).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS).unwrap();
        assert_eq!(words.len(), WORDS.len());
    }
}
