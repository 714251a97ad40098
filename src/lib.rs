//! Hangman
//!
//! A terminal Hangman game: pick a random word, guess letters, and try to finish
//! before the figure on the gallows is complete.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Backdrop, Letter, Round, RoundStatus, Word};
//!
//! let mut round = Round::new(Word::new("apple").unwrap(), Backdrop::Ocean);
//! for c in "aple".chars() {
//!     round.guess(Letter::from_char(c).unwrap());
//! }
//!
//! assert_eq!(round.status(), RoundStatus::Won);
//! assert_eq!(round.masked(), "APPLE");
//! ```

// Core domain types
pub mod core;

// Round lifecycle and word selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
