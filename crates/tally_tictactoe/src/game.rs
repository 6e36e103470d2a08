//! The tic-tac-toe engine.

use crate::rules::{completes_line, is_full};
use crate::{Board, Cell, GameState, GameStatus, Mark, MoveError};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Moves are applied with [`Game::apply_move`] and the result is judged
/// separately with [`Game::evaluate_outcome`], so a caller can update its
/// own display between the two.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the mark allowed to move next.
    pub fn current_turn(&self) -> Mark {
        self.state.current_turn()
    }

    /// Returns the number of successful moves.
    pub fn move_count(&self) -> u8 {
        self.state.move_count()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Mark> {
        self.state.status().winner()
    }

    /// Checks whether the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.state.status().is_terminal()
    }

    /// Looks up the cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] when `index` is not in `0..9`.
    pub fn cell(&self, index: usize) -> Result<Cell, MoveError> {
        self.state.board().get(index)
    }

    /// Places the current mark at `index` and passes the turn.
    ///
    /// # Errors
    ///
    /// In this order: [`MoveError::OutOfRange`], [`MoveError::CellOccupied`],
    /// [`MoveError::GameOver`]. The state is untouched on error.
    #[instrument(skip(self), fields(turn = %self.state.current_turn()))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        if !self.cell(index)?.is_empty() {
            return Err(MoveError::CellOccupied(index));
        }
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        self.state.place_current(index);
        debug!(index, move_count = self.state.move_count(), "Move applied");
        Ok(())
    }

    /// Judges the game after a move at `last_index` and returns whether it
    /// has ended.
    ///
    /// A finished game keeps its first verdict.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] when `last_index` is not in `0..9`.
    #[instrument(skip(self))]
    pub fn evaluate_outcome(&mut self, last_index: usize) -> Result<bool, MoveError> {
        self.cell(last_index)?;
        if self.is_over() {
            return Ok(true);
        }

        if let Some(mark) = completes_line(self.state.board(), last_index) {
            info!(%mark, "Game won");
            self.state.set_status(GameStatus::Won(mark));
        } else if is_full(self.state.board()) {
            info!("Game drawn");
            self.state.set_status(GameStatus::Draw);
        }

        Ok(self.is_over())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game() {
        let game = Game::new();
        assert_eq!(game.current_turn(), Mark::X);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.board().cells().iter().all(|cell| cell.is_empty()));
    }

    #[test]
    fn test_move_count_tracks_occupied_cells() {
        let mut game = Game::new();
        for index in [4, 0, 8] {
            game.apply_move(index).unwrap();
            assert!(!game.evaluate_outcome(index).unwrap());
            assert_eq!(usize::from(game.move_count()), game.board().occupied());
        }
    }

    #[test]
    fn test_out_of_range_checked_before_game_over() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4, 2] {
            game.apply_move(index).unwrap();
            game.evaluate_outcome(index).unwrap();
        }
        assert!(game.is_over());
        assert_eq!(game.apply_move(12), Err(MoveError::OutOfRange(12)));
        assert_eq!(game.apply_move(0), Err(MoveError::CellOccupied(0)));
        assert_eq!(game.apply_move(8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_evaluate_out_of_range() {
        let mut game = Game::new();
        assert_eq!(game.evaluate_outcome(9), Err(MoveError::OutOfRange(9)));
    }

    #[test]
    fn test_evaluate_keeps_first_verdict() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4, 2] {
            game.apply_move(index).unwrap();
            game.evaluate_outcome(index).unwrap();
        }
        // Re-evaluating a non-winning cell does not clear the win.
        assert_eq!(game.evaluate_outcome(3), Ok(true));
        assert_eq!(game.winner(), Some(Mark::X));
    }
}
