//! Single cell delta invariant: each move changes exactly one square.

use super::Invariant;
use crate::{BoardSnapshot, GameState, Player};

/// Invariant: consecutive snapshots differ in exactly one cell.
///
/// The changed cell goes from empty to the mark of the player due at that
/// step (X, O, X, ...), and the snapshot records that cell's coordinate.
pub struct SingleCellDeltaInvariant;

fn is_valid_step(prev: &BoardSnapshot, next: &BoardSnapshot, step: usize) -> bool {
    let changed: Vec<usize> = (0..9)
        .filter(|&i| prev.squares()[i].square != next.squares()[i].square)
        .collect();

    let [index] = changed.as_slice() else {
        return false;
    };
    let mover = Player::for_step(step - 1);

    prev.squares()[*index].square.is_empty()
        && next.squares()[*index].mark() == Some(mover)
        && next
            .position()
            .is_some_and(|coord| usize::from(coord.row) * 3 + usize::from(coord.col) == *index)
}

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        let snapshots = game.history().snapshots();
        snapshots
            .windows(2)
            .enumerate()
            .all(|(i, pair)| is_valid_step(&pair[0], &pair[1], i + 1))
    }

    fn description() -> &'static str {
        "Each move marks exactly one empty square, alternating players"
    }
}
