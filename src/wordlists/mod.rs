//! Word lists for Hangman
//!
//! Provides the embedded default list and loaders for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{WordList, WordListError};
