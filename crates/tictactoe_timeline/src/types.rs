//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// The player who moves at step 0.
    pub const FIRST: Player = Player::X;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player due to move once `step` marks are on the board.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Self::FIRST
        } else {
            Self::FIRST.opponent()
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, " "),
            Square::Occupied(player) => write!(f, "{}", player),
        }
    }
}

/// A single board cell as presented to the player.
///
/// Cells are plain values. Changing a mark or a highlight produces a new
/// cell; the old one is never touched, so earlier snapshots stay intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    /// What occupies the cell.
    pub square: Square,
    /// Whether the cell is part of the winning line.
    pub highlighted: bool,
}

impl Cell {
    /// An empty, unhighlighted cell.
    pub const EMPTY: Cell = Cell {
        square: Square::Empty,
        highlighted: false,
    };

    /// Returns a copy of this cell occupied by `player`.
    pub fn with_mark(self, player: Player) -> Self {
        Self {
            square: Square::Occupied(player),
            ..self
        }
    }

    /// Returns a copy of this cell with the highlight flag set.
    pub fn with_highlight(self) -> Self {
        Self {
            highlighted: true,
            ..self
        }
    }

    /// Returns the occupying player, if any.
    pub fn mark(&self) -> Option<Player> {
        self.square.player()
    }
}

/// Board coordinate of a move, column first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column, 0 at the left.
    pub col: u8,
    /// Row, 0 at the top.
    pub row: u8,
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}
