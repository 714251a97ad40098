//! Game flow
//!
//! Round lifecycle on top of the core types: word selection, guessing, resets and
//! session statistics.

mod controller;

pub use controller::{GameController, SessionStats};
