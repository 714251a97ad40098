//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::Letter;
use crate::game::GameController;
use crate::output::{print_outcome, print_result, print_round, print_stats};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// A parsed line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleCommand {
    Guess(Letter),
    NewGame,
    Quit,
    Invalid,
}

impl SimpleCommand {
    /// Parse one line of input
    ///
    /// A single letter is a guess in either case; `new` and `quit`/`exit` are
    /// commands.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim().to_lowercase();
        match input.as_str() {
            "new" | "reset" => Self::NewGame,
            "quit" | "exit" => Self::Quit,
            _ => {
                let mut chars = input.chars();
                match (chars.next().and_then(Letter::from_char), chars.next()) {
                    (Some(letter), None) => Self::Guess(letter),
                    _ => Self::Invalid,
                }
            }
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(game: &mut GameController) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(game, &mut stdin.lock())
}

/// Game loop over any line source
///
/// Returns when the player quits or input ends.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple_with<R: BufRead>(game: &mut GameController, input: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                     HANGMAN                      ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!("Guess the word before the man is hanged.");
    println!("Type a letter to guess, 'new' for a new game, 'quit' to exit.");

    print_round(game.round());

    loop {
        let Some(line) = get_user_input(input, "Guess")? else {
            println!();
            return Ok(());
        };

        match SimpleCommand::parse(&line) {
            SimpleCommand::Quit => {
                print_stats(game.stats());
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            SimpleCommand::NewGame => {
                game.reset();
                println!("\n🔄 New game started!");
                print_round(game.round());
            }
            SimpleCommand::Guess(letter) => {
                let outcome = game.guess(letter);
                print_outcome(letter, outcome);
                if outcome.is_recorded() {
                    print_round(game.round());
                    if game.round().is_over() {
                        print_result(game.round());
                        print_stats(game.stats());
                        println!("\nType 'new' to play again or 'quit' to exit.");
                    }
                }
            }
            SimpleCommand::Invalid => {
                println!("❌ Enter a single letter A-Z, 'new' or 'quit'");
            }
        }
    }
}

/// Prompt and read a line, `None` on end of input
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;

    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_string()))
    }
}
