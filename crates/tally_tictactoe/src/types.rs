//! Core domain types for tic-tac-toe.

use crate::MoveError;

/// Mark placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks whether the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// 3x3 board stored in row-major order (0-8).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] when `index` is not in `0..9`.
    pub fn get(&self, index: usize) -> Result<Cell, MoveError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(MoveError::OutOfRange(index))
    }

    /// Writes `mark` into an in-range cell. Callers validate occupancy first.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Cell::Occupied(mark);
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Counts the occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

/// Where a game stands. The only source of truth for "has it ended".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// Checks whether the status is terminal.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_turn: Mark,
    move_count: u8,
    status: GameStatus,
}

impl GameState {
    /// Creates the state of a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Mark::X,
            move_count: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark allowed to move next.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Returns the number of successful moves so far.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Places the current mark and hands the turn over. Unchecked.
    pub(crate) fn place_current(&mut self, index: usize) {
        self.board.place(index, self.current_turn);
        self.move_count += 1;
        self.current_turn = self.current_turn.opponent();
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_board_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(8), Ok(Cell::Empty));
        assert_eq!(board.get(9), Err(MoveError::OutOfRange(9)));
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::Won(Mark::O).winner(), Some(Mark::O));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert!(GameStatus::Draw.is_terminal());
        assert!(!GameStatus::InProgress.is_terminal());
    }
}
