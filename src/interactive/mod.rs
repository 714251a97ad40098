//! Interactive TUI interface
//!
//! Terminal front end built on ratatui and crossterm.

pub mod app;
pub mod input;
pub mod rendering;

pub use app::{App, run_tui};
