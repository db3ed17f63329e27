//! Win detection logic for tic-tac-toe.

use crate::{Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in scan order: rows top to bottom, columns left
/// to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    /// The winning mark.
    pub mark: Player,
    /// The three positions of the line, in scan order.
    pub line: [Position; 3],
}

impl WinResult {
    /// The line as board indices `(a, b, c)`.
    pub fn indices(&self) -> (usize, usize, usize) {
        let [a, b, c] = self.line;
        (a.to_index(), b.to_index(), c.to_index())
    }

    /// Checks if the board index is part of the line.
    pub fn contains(&self, index: usize) -> bool {
        self.line.iter().any(|pos| pos.to_index() == index)
    }
}

/// Finds the first completed line on the board.
///
/// Lines are scanned in [`LINES`] order, so when a board holds several
/// completed lines only the first one is reported.
#[instrument(skip(squares))]
pub fn detect(squares: &[Cell; 9]) -> Option<WinResult> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line.map(|pos| squares[pos.to_index()].mark());
        match a {
            Some(mark) if b == a && c == a => Some(WinResult { mark, line }),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player::{O, X};

    fn board(marks: [Option<Player>; 9]) -> [Cell; 9] {
        marks.map(|mark| match mark {
            Some(player) => Cell::EMPTY.with_mark(player),
            None => Cell::EMPTY,
        })
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect(&[Cell::EMPTY; 9]), None);
    }

    #[test]
    #[rustfmt::skip]
    fn test_winner_top_row() {
        let squares = board([
            Some(X), Some(X), Some(X),
            Some(O), Some(O), None,
            None, None, None,
        ]);
        let win = detect(&squares).expect("top row is complete");
        assert_eq!(win.mark, X);
        assert_eq!(win.indices(), (0, 1, 2));
    }

    #[test]
    #[rustfmt::skip]
    fn test_winner_anti_diagonal() {
        let squares = board([
            Some(X), Some(X), Some(O),
            None, Some(O), None,
            Some(O), None, Some(X),
        ]);
        let win = detect(&squares).expect("anti-diagonal is complete");
        assert_eq!(win.mark, O);
        assert_eq!(win.indices(), (2, 4, 6));
    }

    #[test]
    #[rustfmt::skip]
    fn test_first_line_in_scan_order_wins_tie() {
        // Top row and left column both complete for X.
        let squares = board([
            Some(X), Some(X), Some(X),
            Some(X), Some(O), Some(O),
            Some(X), Some(O), Some(O),
        ]);
        let win = detect(&squares).expect("two lines complete");
        assert_eq!(win.indices(), (0, 1, 2));
        assert!(win.contains(1));
        assert!(!win.contains(3));
    }

    #[test]
    #[rustfmt::skip]
    fn test_column_reported_before_diagonal() {
        let squares = board([
            Some(O), Some(X), Some(O),
            None, Some(O), Some(O),
            Some(X), Some(X), Some(O),
        ]);
        let win = detect(&squares).expect("column and diagonal complete");
        assert_eq!(win.mark, O);
        assert_eq!(win.indices(), (2, 5, 8));
    }

    #[test]
    #[rustfmt::skip]
    fn test_no_winner_incomplete() {
        let squares = board([
            Some(X), Some(X), None,
            None, None, None,
            None, None, None,
        ]);
        assert_eq!(detect(&squares), None);
    }

    #[test]
    fn test_highlight_does_not_affect_detection() {
        let mut squares = [Cell::EMPTY; 9];
        squares[0] = Cell::EMPTY.with_highlight();
        squares[1] = Cell::EMPTY.with_highlight();
        squares[2] = Cell::EMPTY.with_highlight();
        assert_eq!(detect(&squares), None);
    }
}
