//! Formatting utilities for terminal output

use crate::core::{Letter, Round};
use std::collections::BTreeSet;

/// Masked word with a space between slots, e.g. `A _ _ L E`
#[must_use]
pub fn spaced_masked_word(round: &Round) -> String {
    round
        .revealed()
        .map(|slot| slot.map_or_else(|| "_".to_string(), |l| l.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Guessed letters as a sorted, comma separated list, or `-` when empty
#[must_use]
pub fn guessed_list(guessed: &BTreeSet<Letter>) -> String {
    if guessed.is_empty() {
        return "-".to_string();
    }
    guessed
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "N attempts left" with correct pluralization
#[must_use]
pub fn attempts_left(remaining: usize) -> String {
    if remaining == 1 {
        "1 attempt left".to_string()
    } else {
        format!("{remaining} attempts left")
    }
}
