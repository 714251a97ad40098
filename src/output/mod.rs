//! Terminal output formatting
//!
//! Text drawing of the gallows, shared formatters and pretty-printing for the
//! simple CLI mode.

pub mod display;
pub mod drawing;
pub mod formatters;

pub use display::{print_outcome, print_result, print_round, print_stats};
