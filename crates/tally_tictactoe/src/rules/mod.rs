//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from the engine
//! so they can be tested on hand-built positions.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINE_PAIRS, completes_line};
