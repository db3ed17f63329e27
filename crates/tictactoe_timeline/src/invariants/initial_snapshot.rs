//! Initial snapshot invariant: history starts from an empty board.

use super::Invariant;
use crate::{BoardSnapshot, GameState};

/// Invariant: `history[0]` has 9 empty cells and no move position.
pub struct InitialSnapshotInvariant;

impl Invariant<GameState> for InitialSnapshotInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().get(0) == Some(&BoardSnapshot::INITIAL)
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_holds_after_moves() {
        let game = GameState::replay([Position::Center, Position::TopLeft]);
        assert!(InitialSnapshotInvariant::holds(&game));
    }

    #[test]
    fn test_marked_initial_snapshot_violates() {
        let mut game = GameState::new();
        game.history_mut().snapshots_mut()[0] =
            BoardSnapshot::INITIAL.with_move(Position::Center, Player::X);
        assert!(!InitialSnapshotInvariant::holds(&game));
    }
}
