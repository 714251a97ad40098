//! Game controller
//!
//! Owns the word list, the random source and the current round. Views talk to the
//! game only through `guess` and `reset`, and read everything else from the round.

use crate::core::{Backdrop, GuessOutcome, Letter, Round, RoundStatus};
use crate::wordlists::WordList;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Running totals for the current session (not persisted)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub rounds_lost: usize,
}

impl SessionStats {
    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }

    fn record(&mut self, status: RoundStatus) {
        match status {
            RoundStatus::Won => self.rounds_won += 1,
            RoundStatus::Lost => self.rounds_lost += 1,
            RoundStatus::Playing => return,
        }
        self.rounds_played += 1;
    }
}

/// Drives rounds of Hangman
pub struct GameController {
    words: WordList,
    rng: StdRng,
    round: Round,
    stats: SessionStats,
}

impl GameController {
    /// Create a controller seeded from the OS and start the first round
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Create a controller with a fixed seed, for reproducible word choices
    #[must_use]
    pub fn with_seed(words: WordList, seed: u64) -> Self {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: WordList, mut rng: StdRng) -> Self {
        let round = new_round(&words, &mut rng);
        Self {
            words,
            rng,
            round,
            stats: SessionStats::default(),
        }
    }

    /// Guess a letter in the current round
    ///
    /// No-op once the round is over or when the letter was already guessed; the
    /// returned outcome says which case applied.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GuessOutcome, Letter, RoundStatus};
    /// use hangman::game::GameController;
    /// use hangman::wordlists::loader::words_from_slice;
    ///
    /// let mut game = GameController::with_seed(words_from_slice(&["apple"]).unwrap(), 0);
    /// for c in "APLE".chars() {
    ///     game.guess(Letter::from_char(c).unwrap());
    /// }
    /// assert_eq!(game.round().status(), RoundStatus::Won);
    /// assert_eq!(
    ///     game.guess(Letter::from_char('Z').unwrap()),
    ///     GuessOutcome::RoundOver
    /// );
    /// ```
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        let outcome = self.round.guess(letter);
        debug!(%letter, ?outcome, wrong = self.round.wrong_count(), "guess");

        if outcome.is_recorded() {
            let status = self.round.status();
            if status.is_over() {
                info!(
                    ?status,
                    word = self.round.word().text(),
                    wrong = self.round.wrong_count(),
                    "round finished"
                );
                self.stats.record(status);
            }
        }

        outcome
    }

    /// Abandon the current round and start a new one
    ///
    /// Word, guesses and backdrop are replaced together.
    pub fn reset(&mut self) {
        self.round = new_round(&self.words, &mut self.rng);
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

fn new_round(words: &WordList, rng: &mut StdRng) -> Round {
    let word = words.pick(rng).clone();
    let backdrop = Backdrop::random(rng);
    info!(letters = word.len(), %backdrop, "new round");
    debug!(word = word.text(), "picked word");
    Round::new(word, backdrop)
}
