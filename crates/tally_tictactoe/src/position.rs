//! Named board positions, used for keyboard navigation.

use strum::IntoEnumIterator;

/// A position on the tic-tac-toe board, in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// Converts the position to its board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Creates a position from a row and column, each in `0..3`.
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }

    /// Row of the position (0 is the top).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of the position (0 is the left).
    pub fn column(self) -> usize {
        self.index() % 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_bounds() {
        assert_eq!(Position::TopLeft.index(), 0);
        assert_eq!(Position::Center.index(), 4);
        assert_eq!(Position::from_index(8), Some(Position::BottomRight));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_column() {
        assert_eq!(Position::MiddleRight.row(), 1);
        assert_eq!(Position::MiddleRight.column(), 2);
        assert_eq!(Position::from_row_column(2, 1), Some(Position::BottomCenter));
        assert_eq!(Position::from_row_column(3, 0), None);
    }
}
