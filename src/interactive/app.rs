//! TUI application state and logic

use super::input::{Action, map_key, move_cursor};
use crate::core::{GuessOutcome, Letter, RoundStatus};
use crate::game::GameController;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;
use std::thread;
use tracing::{debug, info};

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub game: GameController,
    /// Alphabet index of the highlighted on-screen key
    pub cursor: usize,
    pub messages: Vec<Message>,
    /// Where the word list came from, shown in the footer
    pub word_source: String,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(game: GameController, word_source: impl Into<String>) -> Self {
        Self {
            game,
            cursor: 0,
            messages: vec![Message {
                text: "Type a letter or pick one with the arrows and Enter".to_string(),
                style: MessageStyle::Info,
            }],
            word_source: word_source.into(),
            should_quit: false,
        }
    }

    /// Apply one player action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Guess(letter) => self.guess(letter),
            Action::PressSelected => self.guess(self.selected_letter()),
            Action::MoveCursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Action::NewGame => self.new_game(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Letter under the keyboard cursor
    #[must_use]
    pub fn selected_letter(&self) -> Letter {
        Letter::nth(self.cursor)
    }

    pub fn guess(&mut self, letter: Letter) {
        match self.game.guess(letter) {
            GuessOutcome::Hit { occurrences } => {
                let plural = if occurrences == 1 { "" } else { "s" };
                self.add_message(
                    &format!("{letter} appears {occurrences} time{plural}"),
                    MessageStyle::Success,
                );
            }
            GuessOutcome::Miss => {
                self.add_message(&format!("No {letter} in the word"), MessageStyle::Error);
            }
            GuessOutcome::AlreadyGuessed => {
                self.add_message(&format!("{letter} was already guessed"), MessageStyle::Info);
            }
            GuessOutcome::RoundOver => {
                self.add_message("Round is over. Ctrl+N for a new game", MessageStyle::Info);
                return;
            }
        }

        match self.game.round().status() {
            RoundStatus::Won => {
                self.add_message("🎉 Solved! Ctrl+N for a new game", MessageStyle::Success);
            }
            RoundStatus::Lost => {
                self.add_message("Out of attempts. Ctrl+N for a new game", MessageStyle::Error);
            }
            RoundStatus::Playing => {}
        }
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.cursor = 0;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Reverts one terminal setup step when dropped
///
/// Steps are acquired in order, so a failed step drops only the ones already taken.
struct Restore {
    undo: fn(),
}

impl Restore {
    fn acquire(setup: impl FnOnce() -> io::Result<()>, undo: fn()) -> io::Result<Self> {
        setup()?;
        Ok(Self { undo })
    }
}

impl Drop for Restore {
    fn drop(&mut self) {
        (self.undo)();
    }
}

type PanicHook = dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static;

/// Panic hook that restores the terminal, reinstating the previous hook on drop
struct PanicGuard {
    previous: Arc<PanicHook>,
}

impl PanicGuard {
    fn install(restore: fn()) -> Self {
        let previous: Arc<PanicHook> = Arc::from(panic::take_hook());
        let chained = Arc::clone(&previous);
        panic::set_hook(Box::new(move |info| {
            restore();
            chained(info);
        }));
        Self { previous }
    }
}

impl Drop for PanicGuard {
    fn drop(&mut self) {
        // Hooks can't be swapped while unwinding
        if thread::panicking() {
            return;
        }
        let previous = Arc::clone(&self.previous);
        panic::set_hook(Box::new(move |info| previous(info)));
    }
}

// Nothing useful to do if restoring fails while already tearing down
fn leave_raw_mode() {
    let _ = disable_raw_mode();
}

fn leave_alternate_screen() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn restore_terminal() {
    leave_raw_mode();
    leave_alternate_screen();
}

/// Raw mode and alternate screen, held for as long as the TUI runs
///
/// Fields drop in declaration order: the screen is left, then raw mode is
/// released, then the panic hook goes back to what it was.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _screen: Restore,
    _raw: Restore,
    _panic: PanicGuard,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        let panic = PanicGuard::install(restore_terminal);
        let raw =
            Restore::acquire(enable_raw_mode, leave_raw_mode).context("failed to enable raw mode")?;
        let screen = Restore::acquire(
            || execute!(io::stdout(), EnterAlternateScreen),
            leave_alternate_screen,
        )
        .context("failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .context("failed to initialize terminal")?;

        Ok(Self {
            terminal,
            _screen: screen,
            _raw: raw,
            _panic: panic,
        })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<App> {
    info!("starting TUI");
    let result = {
        let mut session = TerminalSession::enter()?;
        run_app(&mut session.terminal, &mut app)
    };
    info!(stats = ?app.game.stats(), "TUI closed");

    result.map(|()| app)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && let Some(action) = map_key(key)
        {
            debug!(?action, "key action");
            app.apply(action);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
