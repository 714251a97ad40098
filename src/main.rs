//! Hangman - CLI
//!
//! Hangman with TUI and simple line-based modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    game::GameController,
    output::print_stats,
    wordlists::{WORDS, WordList, loader::load_from_file, loader::words_from_slice},
};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word before the man is hanged",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG, default hangman=info)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Install the tracing subscriber
///
/// With a log file everything at the filter level goes there. Without one, the
/// simple mode reports warnings on stderr and the TUI stays silent so logs don't
/// draw over the screen.
fn init_logging(log_file: Option<&Path>, stderr_warnings: bool) -> Result<()> {
    let filter = |default: &str| {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter("hangman=info"))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if stderr_warnings {
        tracing_subscriber::fmt()
            .with_env_filter(filter("hangman=warn"))
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    }

    Ok(())
}

/// Load the word list named by the -w flag
///
/// Returns the list and a label for where it came from.
fn load_wordlist(wordlist: &str) -> Result<(WordList, String)> {
    match wordlist {
        "embedded" => {
            let words = words_from_slice(WORDS).context("embedded word list is unusable")?;
            Ok((words, "embedded".to_string()))
        }
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to load word list from {path}"))?;
            Ok((words, path.to_string()))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Simple))?;

    // An empty list fails here, before any screen is drawn
    let (words, source) = load_wordlist(&cli.wordlist)?;
    info!(words = words.len(), %source, "word list loaded");

    let game = match cli.seed {
        Some(seed) => GameController::with_seed(words, seed),
        None => GameController::new(words),
    };

    match command {
        Commands::Play => run_play_command(game, source),
        Commands::Simple => run_simple_command(game),
    }
}

fn run_play_command(game: GameController, source: String) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        bail!("the TUI needs an interactive terminal; try `hangman simple`");
    }

    let app = run_tui(App::new(game, source))?;
    print_stats(app.game.stats());
    Ok(())
}

fn run_simple_command(mut game: GameController) -> Result<()> {
    run_simple(&mut game)
}
