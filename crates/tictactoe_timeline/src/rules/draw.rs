//! Draw detection logic for tic-tac-toe.

use super::win::detect;
use crate::Cell;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(squares))]
pub fn is_full(squares: &[Cell; 9]) -> bool {
    squares.iter().all(|cell| !cell.square.is_empty())
}

/// Checks if the board is full with no completed line.
#[instrument(skip(squares))]
pub fn is_draw(squares: &[Cell; 9]) -> bool {
    is_full(squares) && detect(squares).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player::{self, O, X};

    fn board(marks: [Player; 9]) -> [Cell; 9] {
        marks.map(|player| Cell::EMPTY.with_mark(player))
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&[Cell::EMPTY; 9]));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut squares = [Cell::EMPTY; 9];
        squares[4] = Cell::EMPTY.with_mark(X);
        assert!(!is_full(&squares));
        assert!(!is_draw(&squares));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let squares = board([X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&squares));
        assert!(is_draw(&squares));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X X X / O O X / O X O
        let squares = board([X, X, X, O, O, X, O, X, O]);
        assert!(is_full(&squares));
        assert!(!is_draw(&squares));
    }
}
