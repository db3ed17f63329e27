//! Board snapshots: the full board at one point in the game.

use crate::rules::{self, WinResult};
use crate::{Cell, Coord, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 9 cells of the board plus the move that produced them.
///
/// Snapshots are values. [`BoardSnapshot::with_move`] and
/// [`BoardSnapshot::highlighted`] return new snapshots and leave the
/// receiver untouched, which is what lets history hold every earlier board
/// for time travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    squares: [Cell; 9],
    position: Option<Coord>,
}

impl BoardSnapshot {
    /// The board before any move: 9 empty cells, no position.
    pub const INITIAL: BoardSnapshot = BoardSnapshot {
        squares: [Cell::EMPTY; 9],
        position: None,
    };

    /// Returns the cells in row-major order.
    pub fn squares(&self) -> &[Cell; 9] {
        &self.squares
    }

    /// Returns the coordinate of the move that produced this snapshot.
    pub fn position(&self) -> Option<Coord> {
        self.position
    }

    /// Returns the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.squares[pos.to_index()]
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos).square.is_empty()
    }

    /// Number of occupied cells.
    pub fn marks(&self) -> usize {
        self.squares
            .iter()
            .filter(|cell| !cell.square.is_empty())
            .count()
    }

    /// Returns the first completed line on this board, if any.
    pub fn winner(&self) -> Option<WinResult> {
        rules::detect(&self.squares)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.squares)
    }

    /// Returns the snapshot that follows `player` marking `pos`.
    ///
    /// The caller checks that the cell is empty.
    #[instrument(skip(self))]
    pub fn with_move(&self, pos: Position, player: Player) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = squares[pos.to_index()].with_mark(player);
        Self {
            squares,
            position: Some(pos.coord()),
        }
    }

    /// Returns a copy with every cell of `win` highlighted.
    pub fn highlighted(&self, win: &WinResult) -> Self {
        let mut squares = self.squares;
        for pos in win.line {
            squares[pos.to_index()] = squares[pos.to_index()].with_highlight();
        }
        Self {
            squares,
            position: self.position,
        }
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        render_grid(&self.squares)
    }
}

/// Formats cells as a 3x3 grid. Highlighted marks are bracketed.
pub fn render_grid(squares: &[Cell; 9]) -> String {
    let mut result = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let cell = squares[row * 3 + col];
            match cell.mark() {
                Some(player) if cell.highlighted => result.push_str(&format!("[{}]", player)),
                Some(player) => result.push_str(&format!(" {} ", player)),
                None => result.push_str(" . "),
            }
            if col < 2 {
                result.push('|');
            }
        }
        if row < 2 {
            result.push_str("\n---+---+---\n");
        }
    }
    result
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_move_leaves_original_untouched() {
        let start = BoardSnapshot::INITIAL;
        let next = start.with_move(Position::MiddleRight, Player::X);

        assert_eq!(start, BoardSnapshot::INITIAL);
        assert_eq!(next.cell(Position::MiddleRight).mark(), Some(Player::X));
        assert_eq!(next.position(), Some(Coord { col: 2, row: 1 }));
        assert_eq!(next.marks(), 1);
    }

    #[test]
    fn test_highlighted_marks_only_the_line() {
        let board = BoardSnapshot::INITIAL
            .with_move(Position::TopLeft, Player::X)
            .with_move(Position::MiddleLeft, Player::O)
            .with_move(Position::TopCenter, Player::X)
            .with_move(Position::Center, Player::O)
            .with_move(Position::TopRight, Player::X);
        let win = board.winner().expect("top row complete");
        let lit = board.highlighted(&win);

        let flagged: Vec<usize> = (0..9).filter(|&i| lit.squares()[i].highlighted).collect();
        assert_eq!(flagged, vec![0, 1, 2]);
        assert!(board.squares().iter().all(|cell| !cell.highlighted));
    }

    #[test]
    fn test_display_grid() {
        let board = BoardSnapshot::INITIAL.with_move(Position::Center, Player::O);
        assert_eq!(
            board.display(),
            " . | . | . \n---+---+---\n . | O | . \n---+---+---\n . | . | . "
        );
    }
}
