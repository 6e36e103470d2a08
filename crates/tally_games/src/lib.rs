//! Tally Games - hot-seat tic-tac-toe with a lifetime win tally.
//!
//! # Architecture
//!
//! - **Engine**: [`tally_tictactoe`], re-exported here.
//! - **Store**: a [`KeyValueStore`] holding the [`Tally`] under one key.
//! - **Session**: [`Session`] owns the current game and the tally book.
//! - **TUI**: ratatui front end driving a session from key presses.
//!
//! # Example
//!
//! ```
//! use tally_games::{DEFAULT_TALLY_KEY, MemoryStore, Session, TallyBook};
//!
//! let book = TallyBook::open(MemoryStore::new(), DEFAULT_TALLY_KEY)?;
//! let mut session = Session::new(book);
//! session.start_game();
//! for index in [0, 3, 1, 4, 2] {
//!     session.select(index);
//! }
//! assert_eq!(session.status(), "X has won!");
//! assert_eq!(*session.tally().x_wins(), 1);
//! # Ok::<(), tally_games::StoreError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod session;
mod store;
pub mod tui;

pub use cli::{Cli, Command, StoreArgs};
pub use config::{AppConfig, ConfigError};
pub use session::{Direction, Phase, Selection, Session};
pub use store::{
    DEFAULT_TALLY_KEY, FileStore, KeyValueStore, MemoryStore, StoreError, Tally, TallyBook,
    TallyParseError,
};

pub use tally_tictactoe::{Cell, Game, GameStatus, Mark, MoveError, Position};
