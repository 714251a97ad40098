//! Display functions for the simple CLI mode

use super::drawing::{backdrop_rows, figure_rows};
use super::formatters::{attempts_left, create_progress_bar, guessed_list, spaced_masked_word};
use crate::core::{Backdrop, GuessOutcome, Letter, MAX_WRONG, Round, RoundStatus};
use crate::game::SessionStats;
use colored::{ColoredString, Colorize};

fn paint_backdrop(row: &str, backdrop: Backdrop) -> ColoredString {
    match backdrop {
        Backdrop::Mountain => row.green(),
        Backdrop::Ocean => row.blue(),
        Backdrop::Plain => row.bright_green(),
    }
}

/// Print the drawing, word and counters for a round
pub fn print_round(round: &Round) {
    println!();
    for row in figure_rows(round.wrong_count()) {
        println!("  {}", row.bright_white());
    }
    for row in backdrop_rows(round.backdrop()) {
        println!("  {}", paint_backdrop(row, round.backdrop()));
    }

    println!("\n  Word:    {}", spaced_masked_word(round).bright_yellow().bold());

    let wrong = round.wrong_count();
    let bar = create_progress_bar(wrong, MAX_WRONG, 12);
    println!(
        "  Wrong guesses: {wrong} / {MAX_WRONG}  [{}] {}",
        bar.red(),
        attempts_left(round.remaining_attempts())
    );
    println!("  Guessed: {}", guessed_list(round.guessed()));
}

/// Print the win or lose banner, if the round is over
pub fn print_result(round: &Round) {
    match round.status() {
        RoundStatus::Won => {
            println!("\n{}", "═".repeat(50).bright_cyan());
            println!("  {}", "You win! 🎉".bright_green().bold());
            println!("{}", "═".repeat(50).bright_cyan());
        }
        RoundStatus::Lost => {
            println!("\n{}", "═".repeat(50).red());
            println!(
                "  {} {}",
                "You lose, the word was".red().bold(),
                round.word().text().bright_yellow().bold()
            );
            println!("{}", "═".repeat(50).red());
        }
        RoundStatus::Playing => {}
    }
}

/// Print feedback for a single guess
pub fn print_outcome(letter: Letter, outcome: GuessOutcome) {
    match outcome {
        GuessOutcome::Hit { occurrences } => println!(
            "  {} {letter} appears {occurrences} time{}",
            "✓".green(),
            if occurrences == 1 { "" } else { "s" }
        ),
        GuessOutcome::Miss => println!("  {} {letter} is not in the word", "✗".red()),
        GuessOutcome::AlreadyGuessed => {
            println!("  {}", format!("{letter} was already guessed").bright_black());
        }
        GuessOutcome::RoundOver => {
            println!("  {}", "The round is over, type 'new' to play again".bright_black());
        }
    }
}

/// Print session totals
pub fn print_stats(stats: SessionStats) {
    println!(
        "  Games: {} | Won: {} | Lost: {} | Win rate: {:.0}%",
        stats.rounds_played,
        stats.rounds_won,
        stats.rounds_lost,
        stats.win_rate()
    );
}
