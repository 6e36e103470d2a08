//! Win detection through the last move played.

use crate::{Board, Mark};
use tracing::instrument;

/// For each cell, the pairs of other cells that complete a line through it.
///
/// Rows, columns and both diagonals; the centre sits on four lines, corners
/// on three, edges on two.
pub const LINE_PAIRS: [&[[usize; 2]]; 9] = [
    &[[1, 2], [3, 6], [4, 8]],
    &[[0, 2], [4, 7]],
    &[[0, 1], [5, 8], [4, 6]],
    &[[0, 6], [4, 5]],
    &[[1, 7], [3, 5], [0, 8], [2, 6]],
    &[[2, 8], [3, 4]],
    &[[0, 3], [7, 8], [2, 4]],
    &[[1, 4], [6, 8]],
    &[[0, 4], [2, 5], [6, 7]],
];

/// Returns the mark at `index` if it completes a line through `index`.
///
/// Only lines through `index` are inspected: a move cannot complete any
/// other line. An empty or out-of-range cell never wins.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, index: usize) -> Option<Mark> {
    let mark = board.get(index).ok()?.mark()?;
    let cells = board.cells();

    LINE_PAIRS[index]
        .iter()
        .any(|&[a, b]| cells[a].mark() == Some(mark) && cells[b].mark() == Some(mark))
        .then_some(mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(moves: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(index, mark) in moves {
            board.place(index, mark);
        }
        board
    }

    #[test]
    fn test_pairs_cover_all_eight_lines() {
        let mut lines: Vec<[usize; 3]> = LINE_PAIRS
            .iter()
            .enumerate()
            .flat_map(|(index, pairs)| {
                pairs.iter().map(move |&[a, b]| {
                    let mut line = [index, a, b];
                    line.sort();
                    line
                })
            })
            .collect();
        lines.sort();
        lines.dedup();
        assert_eq!(lines.len(), 8);
        // Every line is listed once from each of its three cells.
        let total: usize = LINE_PAIRS.iter().map(|pairs| pairs.len()).sum();
        assert_eq!(total, 24);
    }

    #[test]
    fn test_top_row() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
        assert_eq!(completes_line(&board, 2), Some(Mark::X));
        assert_eq!(completes_line(&board, 0), Some(Mark::X));
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_with(&[(2, Mark::O), (4, Mark::O), (6, Mark::O)]);
        assert_eq!(completes_line(&board, 4), Some(Mark::O));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(completes_line(&board, 2), None);
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert_eq!(completes_line(&board, 4), None);
        assert_eq!(completes_line(&board, 9), None);
    }

    #[test]
    fn test_line_not_through_index_is_ignored() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X), (2, Mark::X), (4, Mark::O)]);
        assert_eq!(completes_line(&board, 4), None);
    }
}
