//! Play session: the current game, the lifetime tally and what the screen
//! should show.
//!
//! The terminal front end owns one [`Session`] for the life of the process
//! and forwards every cell selection to it. The session is the only caller
//! of the engine.

use tally_tictactoe::{Game, GameStatus, Mark, MoveError, Position};
use tracing::{debug, error, info, instrument};

use crate::store::{KeyValueStore, Tally, TallyBook};

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start/result cover. Cell selections are not forwarded.
    Cover,
    /// A game is running.
    Playing,
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the top row.
    Up,
    /// Towards the bottom row.
    Down,
    /// Towards the left column.
    Left,
    /// Towards the right column.
    Right,
}

/// What became of a cell selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// No game is running.
    Ignored,
    /// The engine refused the move; nothing changed.
    Rejected(MoveError),
    /// The move was made and the game goes on.
    Continued,
    /// The move ended the game.
    Finished(GameStatus),
}

/// Explicit owner of all session state.
#[derive(Debug)]
pub struct Session<S> {
    game: Game,
    book: TallyBook<S>,
    cursor: Position,
    phase: Phase,
    status: String,
}

impl<S: KeyValueStore> Session<S> {
    /// Creates a session on the cover screen.
    #[instrument(skip(book))]
    pub fn new(book: TallyBook<S>) -> Self {
        info!(tally = %book.tally(), "Session created");
        Self {
            game: Game::new(),
            book,
            cursor: Position::Center,
            phase: Phase::Cover,
            status: String::new(),
        }
    }

    /// The current (or last finished) game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Lifetime tally.
    pub fn tally(&self) -> Tally {
        self.book.tally()
    }

    /// The tally book and its store.
    pub fn book(&self) -> &TallyBook<S> {
        &self.book
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current screen.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Turn or result text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Discards the previous game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) {
        self.game = Game::new();
        self.phase = Phase::Playing;
        self.cursor = Position::Center;
        self.status = turn_text(self.game.current_turn());
        info!("Game started");
    }

    /// Moves the cursor one cell, stopping at the board edge.
    pub fn move_cursor(&mut self, direction: Direction) {
        let (row, column) = (self.cursor.row(), self.cursor.column());
        let target = match direction {
            Direction::Up => row.checked_sub(1).map(|row| (row, column)),
            Direction::Down => Some((row + 1, column)),
            Direction::Left => column.checked_sub(1).map(|column| (row, column)),
            Direction::Right => Some((row, column + 1)),
        };
        if let Some(position) = target.and_then(|(row, column)| Position::from_row_column(row, column)) {
            self.cursor = position;
        }
    }

    /// Selects the cell under the cursor.
    pub fn select_cursor(&mut self) -> Selection {
        self.select(self.cursor.index())
    }

    /// Plays the current turn at `index` and judges the result.
    ///
    /// A refused move leaves the board, turn and status untouched.
    #[instrument(skip(self))]
    pub fn select(&mut self, index: usize) -> Selection {
        if self.phase != Phase::Playing {
            debug!("Selection ignored on cover screen");
            return Selection::Ignored;
        }

        if let Err(err) = self.game.apply_move(index) {
            debug!(error = %err, "Move rejected");
            return Selection::Rejected(err);
        }
        if let Some(position) = Position::from_index(index) {
            self.cursor = position;
        }
        self.status = turn_text(self.game.current_turn());

        // The move is already on the board, so an error here cannot be
        // reported as a refusal.
        let ended = match self.game.evaluate_outcome(index) {
            Ok(ended) => ended,
            Err(err) => {
                error!(error = %err, "Outcome check failed after a legal move");
                return Selection::Continued;
            }
        };
        if !ended {
            return Selection::Continued;
        }

        self.finish()
    }

    /// Mark that would be placed under the cursor, if that cell is open.
    pub fn preview(&self) -> Option<Mark> {
        if self.phase != Phase::Playing {
            return None;
        }
        let cell = self.game.cell(self.cursor.index()).ok()?;
        cell.is_empty().then(|| self.game.current_turn())
    }

    fn finish(&mut self) -> Selection {
        let outcome = self.game.status();
        self.phase = Phase::Cover;

        self.status = match outcome.winner() {
            Some(mark) => {
                let mut text = format!("{} has won!", mark);
                if let Err(err) = self.book.record_win(mark) {
                    error!(error = %err, "Failed to save tally");
                    text.push_str(" (tally not saved)");
                }
                text
            }
            None => "Draw!".to_string(),
        };

        info!(status = %self.status, "Game finished");
        Selection::Finished(outcome)
    }
}

fn turn_text(mark: Mark) -> String {
    format!("Current turn: {}", mark)
}
