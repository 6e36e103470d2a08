//! Key bindings.

use crossterm::event::KeyCode;

use crate::session::{Direction, Phase};

/// What a key press asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the program.
    Quit,
    /// Start a new game from the cover.
    Start,
    /// Move the cursor.
    Move(Direction),
    /// Play the cell under the cursor.
    SelectCursor,
    /// Play the cell with this index (0-8).
    SelectCell(usize),
}

/// Maps a key to an action for the current phase.
pub fn action_for(key: KeyCode, phase: Phase) -> Option<Action> {
    match (key, phase) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Action::Quit),

        (KeyCode::Enter | KeyCode::Char('s'), Phase::Cover) => Some(Action::Start),
        (_, Phase::Cover) => None,

        (KeyCode::Enter | KeyCode::Char(' '), Phase::Playing) => Some(Action::SelectCursor),
        (KeyCode::Up | KeyCode::Char('k'), Phase::Playing) => Some(Action::Move(Direction::Up)),
        (KeyCode::Down | KeyCode::Char('j'), Phase::Playing) => {
            Some(Action::Move(Direction::Down))
        }
        (KeyCode::Left | KeyCode::Char('h'), Phase::Playing) => {
            Some(Action::Move(Direction::Left))
        }
        (KeyCode::Right | KeyCode::Char('l'), Phase::Playing) => {
            Some(Action::Move(Direction::Right))
        }
        (KeyCode::Char(c), Phase::Playing) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Some(Action::SelectCell(digit as usize - 1)),
            _ => None,
        },
        (_, Phase::Playing) => None,
    }
}
