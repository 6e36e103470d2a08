//! Errors raised when a move cannot be applied.

/// Reason a move was refused.
///
/// Checks run in declaration order, so a caller always gets the most
/// specific reason first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index is outside the board.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// Target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game has already been won or drawn.
    #[display("Game has ended")]
    GameOver,
}

impl std::error::Error for MoveError {}
