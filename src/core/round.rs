//! Per-round game state
//!
//! A Round bundles the target word, the guessed letters and the backdrop. Win/lose
//! state is always derived from the word and the guesses, never stored, so the two
//! can't drift apart. Starting a new round means building a new `Round`.

use super::{Backdrop, Letter, MAX_WRONG, Word};
use std::collections::BTreeSet;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// What happened when a letter was guessed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word
    Hit { occurrences: usize },
    /// Letter is not in the word
    Miss,
    /// Letter was guessed earlier this round, nothing changed
    AlreadyGuessed,
    /// Round is already won or lost, nothing changed
    RoundOver,
}

impl GuessOutcome {
    /// Whether the guess changed the round
    #[must_use]
    pub const fn is_recorded(self) -> bool {
        matches!(self, Self::Hit { .. } | Self::Miss)
    }
}

/// One playthrough from word selection to win or loss
#[derive(Debug, Clone)]
pub struct Round {
    word: Word,
    guessed: BTreeSet<Letter>,
    backdrop: Backdrop,
}

impl Round {
    /// Start a round with no guesses
    #[must_use]
    pub fn new(word: Word, backdrop: Backdrop) -> Self {
        Self {
            word,
            guessed: BTreeSet::new(),
            backdrop,
        }
    }

    /// Guess a letter
    ///
    /// Guesses are ignored once the round is over, and repeating a letter is a no-op.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Backdrop, GuessOutcome, Letter, Round, Word};
    ///
    /// let mut round = Round::new(Word::new("apple").unwrap(), Backdrop::Plain);
    /// let p = Letter::from_char('p').unwrap();
    ///
    /// assert_eq!(round.guess(p), GuessOutcome::Hit { occurrences: 2 });
    /// assert_eq!(round.guess(p), GuessOutcome::AlreadyGuessed);
    /// assert_eq!(round.masked(), "_PP__");
    /// ```
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::RoundOver;
        }

        if !self.guessed.insert(letter) {
            return GuessOutcome::AlreadyGuessed;
        }

        match self.word.occurrences(letter) {
            0 => GuessOutcome::Miss,
            occurrences => GuessOutcome::Hit { occurrences },
        }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn backdrop(&self) -> Backdrop {
        self.backdrop
    }

    /// Letters guessed so far, alphabetically
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &BTreeSet<Letter> {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    /// Number of distinct guessed letters that are not in the word
    #[must_use]
    pub fn wrong_count(&self) -> usize {
        self.guessed
            .iter()
            .filter(|&&letter| !self.word.has_letter(letter))
            .count()
    }

    /// Wrong guesses left before the round is lost
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_WRONG.saturating_sub(self.wrong_count())
    }

    /// Every letter of the word has been guessed
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.word.distinct_letters().all(|l| self.guessed.contains(&l))
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.is_win() {
            RoundStatus::Won
        } else if self.wrong_count() >= MAX_WRONG {
            RoundStatus::Lost
        } else {
            RoundStatus::Playing
        }
    }

    /// A letter control accepts input only while unguessed and the round is live
    #[must_use]
    pub fn is_enabled(&self, letter: Letter) -> bool {
        !self.has_guessed(letter) && !self.is_over()
    }

    /// Per-position reveal state, `None` for letters not yet guessed
    pub fn revealed(&self) -> impl Iterator<Item = Option<Letter>> + '_ {
        self.word
            .letters()
            .iter()
            .map(|&l| self.guessed.contains(&l).then_some(l))
    }

    /// The word with unguessed letters replaced by `_`
    #[must_use]
    pub fn masked(&self) -> String {
        self.revealed()
            .map(|slot| slot.map_or('_', Letter::as_char))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn apple() -> Round {
        Round::new(Word::new("apple").unwrap(), Backdrop::Mountain)
    }

    fn guess_all(round: &mut Round, letters: &str) -> Vec<GuessOutcome> {
        letters.chars().map(|c| round.guess(letter(c))).collect()
    }

    #[test]
    fn fresh_round_is_playing() {
        let round = apple();
        assert_eq!(round.status(), RoundStatus::Playing);
        assert_eq!(round.wrong_count(), 0);
        assert_eq!(round.remaining_attempts(), MAX_WRONG);
        assert!(round.guessed().is_empty());
        assert_eq!(round.masked(), "_____");
    }

    #[test]
    fn winning_in_any_order() {
        for order in ["APLE", "ELPA", "LEAP", "PALE"] {
            let mut round = apple();
            guess_all(&mut round, order);
            assert!(round.is_win(), "order {order}");
            assert_eq!(round.status(), RoundStatus::Won);
            assert_eq!(round.masked(), "APPLE");
            assert!(!round.masked().contains('_'));
        }
    }

    #[test]
    fn six_misses_lose() {
        let mut round = apple();
        let outcomes = guess_all(&mut round, "BCDFGH");
        assert!(outcomes.iter().all(|&o| o == GuessOutcome::Miss));
        assert_eq!(round.wrong_count(), 6);
        assert!(round.is_over());
        assert!(!round.is_win());
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.remaining_attempts(), 0);
    }

    #[test]
    fn guesses_ignored_after_loss() {
        let mut round = apple();
        guess_all(&mut round, "BCDFGH");
        let before = round.guessed().clone();

        assert_eq!(round.guess(letter('A')), GuessOutcome::RoundOver);
        assert_eq!(round.guess(letter('Z')), GuessOutcome::RoundOver);
        assert_eq!(round.guessed(), &before);
        assert_eq!(round.wrong_count(), 6);
    }

    #[test]
    fn guesses_ignored_after_win() {
        let mut round = apple();
        guess_all(&mut round, "APLE");
        assert_eq!(round.guess(letter('Z')), GuessOutcome::RoundOver);
        assert_eq!(round.wrong_count(), 0);
        assert_eq!(round.guessed().len(), 4);
    }

    #[test]
    fn repeated_guess_is_idempotent() {
        let mut round = apple();
        round.guess(letter('Z'));
        let wrong = round.wrong_count();
        let size = round.guessed().len();

        assert_eq!(round.guess(letter('z')), GuessOutcome::AlreadyGuessed);
        assert_eq!(round.wrong_count(), wrong);
        assert_eq!(round.guessed().len(), size);

        round.guess(letter('P'));
        assert_eq!(round.guess(letter('P')), GuessOutcome::AlreadyGuessed);
        assert_eq!(round.guessed().len(), size + 1);
    }

    #[test]
    fn wrong_count_counts_distinct_misses_only() {
        let mut round = apple();
        guess_all(&mut round, "AXPYXZ");
        // X, Y, Z are misses; the repeated X doesn't count twice
        assert_eq!(round.wrong_count(), 3);
        assert_eq!(round.remaining_attempts(), 3);
    }

    #[test]
    fn hit_reports_occurrences() {
        let mut round = apple();
        assert_eq!(round.guess(letter('P')), GuessOutcome::Hit { occurrences: 2 });
        assert_eq!(round.guess(letter('E')), GuessOutcome::Hit { occurrences: 1 });
        assert_eq!(round.masked(), "_PP_E");
    }

    #[test]
    fn letters_disabled_once_guessed_or_over() {
        let mut round = apple();
        assert!(round.is_enabled(letter('B')));
        round.guess(letter('B'));
        assert!(!round.is_enabled(letter('B')));
        assert!(round.is_enabled(letter('C')));

        guess_all(&mut round, "CDFGH");
        assert!(round.is_over());
        assert!(Letter::alphabet().all(|l| !round.is_enabled(l)));
    }

    #[test]
    fn fifth_miss_then_win_is_still_a_win() {
        let mut round = apple();
        guess_all(&mut round, "BCDFG");
        assert_eq!(round.status(), RoundStatus::Playing);
        guess_all(&mut round, "APLE");
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.wrong_count(), 5);
    }

    #[test]
    fn outcome_recorded_flags() {
        assert!(GuessOutcome::Miss.is_recorded());
        assert!(GuessOutcome::Hit { occurrences: 1 }.is_recorded());
        assert!(!GuessOutcome::AlreadyGuessed.is_recorded());
        assert!(!GuessOutcome::RoundOver.is_recorded());
    }
}
