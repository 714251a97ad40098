//! ASCII gallows drawing
//!
//! Renders the gallows, the visible figure parts and a backdrop strip as plain text
//! rows. Both the TUI and the simple CLI style these rows their own way.

use crate::core::{Backdrop, FigurePart, visible_parts};

/// Gallows with no figure, one string per row
const GALLOWS: [&str; 8] = [
    "  +-----+   ",
    "  |     |   ",
    "  |         ",
    "  |         ",
    "  |         ",
    "  |         ",
    "  |         ",
    "==+======== ",
];

/// Width of every drawing row
pub const DRAWING_WIDTH: usize = 12;

/// Row, column and glyph for each figure part
const fn placement(part: FigurePart) -> &'static [(usize, usize, char)] {
    match part {
        FigurePart::Head => &[(2, 8, 'O')],
        FigurePart::Torso => &[(3, 8, '|'), (4, 8, '|')],
        FigurePart::LeftArm => &[(3, 7, '/')],
        FigurePart::RightArm => &[(3, 9, '\\')],
        FigurePart::LeftLeg => &[(5, 7, '/')],
        FigurePart::RightLeg => &[(5, 9, '\\')],
    }
}

/// Gallows and figure after `wrong_count` wrong guesses
#[must_use]
pub fn figure_rows(wrong_count: usize) -> Vec<String> {
    let mut grid: Vec<Vec<char>> = GALLOWS.iter().map(|row| row.chars().collect()).collect();

    for &part in visible_parts(wrong_count) {
        for &(row, col, glyph) in placement(part) {
            grid[row][col] = glyph;
        }
    }

    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}

/// Scenery rows drawn under the gallows base
#[must_use]
pub const fn backdrop_rows(backdrop: Backdrop) -> [&'static str; 2] {
    match backdrop {
        Backdrop::Mountain => ["   /\\    /\\ ", "  /  \\/\\/  \\"],
        Backdrop::Ocean => ["~ ~ ~ ~ ~ ~ ", " ~~~~~~~~~~~"],
        Backdrop::Plain => [",,.,,.,,.,,.", "............"],
    }
}
