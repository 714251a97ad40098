//! Core domain types for Hangman
//!
//! Pure game state with no terminal or I/O concerns. Everything here is
//! deterministic given its inputs.

mod backdrop;
mod figure;
mod letter;
mod round;
mod word;

pub use backdrop::Backdrop;
pub use figure::{FigurePart, visible_parts};
pub use letter::{ALPHABET_LEN, Letter};
pub use round::{GuessOutcome, Round, RoundStatus};
pub use word::{Word, WordError};

/// Wrong guesses allowed before the round is lost
pub const MAX_WRONG: usize = 6;
