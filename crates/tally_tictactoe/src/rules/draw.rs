//! Full-board detection.

use crate::{Board, CELL_COUNT};
use tracing::instrument;

/// Checks whether every cell is occupied.
///
/// A full board with no completed line is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.occupied() == CELL_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(4, Mark::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for index in 0..CELL_COUNT {
            let mark = if index % 2 == 0 { Mark::X } else { Mark::O };
            board.place(index, mark);
        }
        assert!(is_full(&board));
    }
}
