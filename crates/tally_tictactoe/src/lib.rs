//! Tic-tac-toe game engine.
//!
//! A [`Game`] owns a 3x3 [`Board`], the mark whose turn it is, a move
//! counter and a single [`GameStatus`]. Moves go through
//! [`Game::apply_move`]; the caller then asks [`Game::evaluate_outcome`]
//! whether the move ended the game.
//!
//! ```
//! use tally_tictactoe::{Game, GameStatus, Mark};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index)?;
//!     game.evaluate_outcome(index)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Mark::X));
//! # Ok::<(), tally_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
pub mod rules;
mod types;

pub use error::MoveError;
pub use game::Game;
pub use position::Position;
pub use types::{Board, CELL_COUNT, Cell, GameStatus, Mark};

pub(crate) use types::GameState;
