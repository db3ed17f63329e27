//! Derived, read-only view of a game for presentation layers.

use crate::game::Phase;
use crate::{Cell, Coord, GameState, Player, WinResult};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use tracing::{debug, instrument};

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Button text: `Go to Game start` or `Go to move #N pos (col,row)`.
    description: String,
    /// Coordinate of the move, `None` for game start.
    position: Option<Coord>,
    /// Whether this is the displayed step.
    active: bool,
}

/// Status line for the displayed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Board is full with no line.
    #[display("Game end, draw")]
    Draw,
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Everything the presentation layer needs to render one frame.
///
/// A view is an owned copy. Later operations on the [`GameState`] never
/// change a view already handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Status line.
    status: Status,
    /// Phase at the displayed step.
    phase: Phase,
    /// Completed line on the displayed board, if any.
    winner: Option<WinResult>,
    /// Displayed cells, with the winning line highlighted.
    squares: [Cell; 9],
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Displayed step.
    current_step: usize,
    /// Whether `moves` is newest first.
    history_reversed: bool,
    /// Label for the order toggle: the order it switches to.
    #[getter(skip)]
    order_label: &'static str,
}

impl GameView {
    /// Label for the order toggle: the order it switches to.
    pub fn order_label(&self) -> &&'static str {
        &self.order_label
    }

    /// Derives the view of `state` at its displayed step.
    #[instrument(skip(state), fields(step = state.current_step()))]
    pub fn from_state(state: &GameState) -> Self {
        let current = state.current();
        let winner = current.winner();
        let step = state.current_step();

        let (status, squares) = match winner {
            Some(win) => {
                debug!(?win, "Winning line on displayed board");
                (Status::Winner(win.mark), *current.highlighted(&win).squares())
            }
            None if state.phase() == Phase::Draw => (Status::Draw, *current.squares()),
            None => (Status::NextPlayer(state.next_player()), *current.squares()),
        };

        let mut moves: Vec<MoveEntry> = state
            .history()
            .snapshots()
            .iter()
            .enumerate()
            .map(|(i, snapshot)| {
                MoveEntry::new(i, describe(i, snapshot.position()), snapshot.position(), i == step)
            })
            .collect();
        if state.history_reversed() {
            moves.reverse();
        }

        let order_label = if state.history_reversed() {
            "ascending"
        } else {
            "descending"
        };

        Self {
            status,
            phase: state.phase(),
            winner,
            squares,
            moves,
            current_step: step,
            history_reversed: state.history_reversed(),
            order_label,
        }
    }

    /// Returns the move list entry for the displayed step.
    pub fn active_move(&self) -> Option<&MoveEntry> {
        self.moves.iter().find(|entry| entry.active)
    }
}

fn describe(step: usize, position: Option<Coord>) -> String {
    match position {
        Some(coord) if step > 0 => format!("Go to move #{} pos {}", step, coord),
        _ => "Go to Game start".to_string(),
    }
}
