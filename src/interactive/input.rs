//! Key handling and keyboard cursor movement
//!
//! Maps raw crossterm key events to game actions. Pure functions, so the mapping is
//! testable without a terminal.

use crate::core::{ALPHABET_LEN, Letter};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Letters per row on the on-screen keyboard
pub const KEYBOARD_COLUMNS: usize = 9;

/// Cursor movement on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Something the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Guess a letter typed directly
    Guess(Letter),
    /// Guess the letter under the keyboard cursor
    PressSelected,
    MoveCursor(Direction),
    NewGame,
    Quit,
}

/// Translate a key event into an action
///
/// Letters in either case become guesses. Anything unrecognized returns `None`.
/// Release and repeat events are ignored, only presses count.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('n') => Some(Action::NewGame),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PressSelected),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Char(c) => Letter::from_char(c).map(Action::Guess),
        _ => None,
    }
}

/// Move the keyboard cursor (an alphabet index)
///
/// Left and right wrap around the whole alphabet; up and down stay put at the edges.
#[must_use]
pub const fn move_cursor(cursor: usize, direction: Direction) -> usize {
    match direction {
        Direction::Left => (cursor + ALPHABET_LEN - 1) % ALPHABET_LEN,
        Direction::Right => (cursor + 1) % ALPHABET_LEN,
        Direction::Up => {
            if cursor >= KEYBOARD_COLUMNS {
                cursor - KEYBOARD_COLUMNS
            } else {
                cursor
            }
        }
        Direction::Down => {
            if cursor + KEYBOARD_COLUMNS < ALPHABET_LEN {
                cursor + KEYBOARD_COLUMNS
            } else {
                cursor
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn letters_map_to_guesses_in_either_case() {
        assert_eq!(
            map_key(press(KeyCode::Char('a'))),
            Some(Action::Guess(letter('A')))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Action::Guess(letter('A')))
        );
    }

    #[test]
    fn non_alphabetic_keys_ignored() {
        for c in ['1', '-', '?', '.'] {
            assert_eq!(map_key(press(KeyCode::Char(c))), None, "{c:?}");
        }
        assert_eq!(map_key(press(KeyCode::Tab)), None);
        assert_eq!(map_key(press(KeyCode::F(2))), None);
    }

    #[test]
    fn control_keys() {
        assert_eq!(map_key(ctrl('n')), Some(Action::NewGame));
        assert_eq!(map_key(ctrl('c')), Some(Action::Quit));
        assert_eq!(map_key(ctrl('x')), None);
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Action::Quit));
    }

    #[test]
    fn enter_and_space_press_selected() {
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Action::PressSelected));
        assert_eq!(
            map_key(press(KeyCode::Char(' '))),
            Some(Action::PressSelected)
        );
    }

    #[test]
    fn arrows_move_cursor() {
        assert_eq!(
            map_key(press(KeyCode::Up)),
            Some(Action::MoveCursor(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Right)),
            Some(Action::MoveCursor(Direction::Right))
        );
    }

    #[test]
    fn release_events_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn cursor_wraps_horizontally() {
        assert_eq!(move_cursor(0, Direction::Left), 25);
        assert_eq!(move_cursor(25, Direction::Right), 0);
        assert_eq!(move_cursor(4, Direction::Right), 5);
    }

    #[test]
    fn cursor_stops_vertically() {
        assert_eq!(move_cursor(3, Direction::Up), 3);
        assert_eq!(move_cursor(3, Direction::Down), 12);
        assert_eq!(move_cursor(12, Direction::Up), 3);
        // Last row is short (S..Z), nothing below it
        assert_eq!(move_cursor(20, Direction::Down), 20);
        // R has no ninth-column letter below it
        assert_eq!(move_cursor(17, Direction::Down), 17);
        assert_eq!(move_cursor(8, Direction::Down), 17);
    }
}
