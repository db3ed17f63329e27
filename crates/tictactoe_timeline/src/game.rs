//! Game state with move history and time travel.
//!
//! [`GameState`] owns every board the game has passed through and a
//! pointer to the one being shown. Placing a mark after jumping back
//! rewrites the future from that point; jumping never touches history.

use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::{
    BoardSnapshot, GameView, History, Player, Position, TimelineError, TimelineErrorKind,
    WinResult,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Number of moves that fill the board.
pub const MAX_STEPS: usize = 9;

/// Phase of the game at the displayed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// A line is complete. No further moves are accepted.
    Won(Player),
    /// Board is full with no line.
    Draw,
}

impl Phase {
    /// Checks if the phase accepts no more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, Phase::InProgress)
    }
}

/// Why a placement was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The displayed board already has a winner.
    #[display("game is already won")]
    GameOver,
    /// The target square holds a mark.
    #[display("square is already occupied")]
    SquareOccupied,
}

/// Outcome of [`GameState::place_mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// The mark was placed and a new snapshot appended.
    Placed {
        /// Who placed the mark.
        player: Player,
        /// Where it was placed.
        position: Position,
        /// Step of the new snapshot.
        step: usize,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl Placement {
    /// Checks if the placement changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// Complete game state: history, displayed step and move-list order.
///
/// The player to move is never stored. It follows from the parity of the
/// displayed step, so it cannot drift from the board.
///
/// Deserializing validates the saved history and step, so a loaded state
/// holds the same guarantees as one built by placing marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedGame")]
pub struct GameState {
    history: History,
    current_step: usize,
    history_reversed: bool,
}

impl GameState {
    /// Creates a new game at the initial snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            history_reversed: false,
        }
    }

    /// Builds a game by placing marks in order.
    ///
    /// Placements that would be ignored are skipped, as clicks would be.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut state = Self::new();
        for pos in positions {
            state.place_mark(pos);
        }
        info!(steps = state.current_step, "Replayed game");
        state
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the displayed step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the displayed snapshot.
    pub fn current(&self) -> &BoardSnapshot {
        // current_step always indexes history
        &self.history.snapshots()[self.current_step]
    }

    /// Returns the player due to move at the displayed step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Returns whether the move list is shown newest first.
    pub fn history_reversed(&self) -> bool {
        self.history_reversed
    }

    /// Returns the completed line on the displayed board, if any.
    pub fn winner(&self) -> Option<WinResult> {
        self.current().winner()
    }

    /// Returns the phase at the displayed step.
    pub fn phase(&self) -> Phase {
        match self.winner() {
            Some(win) => Phase::Won(win.mark),
            None if self.current_step == MAX_STEPS => Phase::Draw,
            None => Phase::InProgress,
        }
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Ignored when the displayed board has a winner or the square is
    /// taken. Otherwise every snapshot after the displayed step is
    /// discarded and the new board becomes the displayed step.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn place_mark(&mut self, pos: Position) -> Placement {
        let current = *self.current();

        if current.winner().is_some() {
            debug!("Ignoring placement after win");
            return Placement::Ignored(IgnoreReason::GameOver);
        }
        if !current.is_empty(pos) {
            debug!("Ignoring placement on occupied square");
            return Placement::Ignored(IgnoreReason::SquareOccupied);
        }

        let player = self.next_player();
        let next = current.with_move(pos, player);
        self.current_step = self.history.branch(self.current_step, next);
        debug!(new_step = self.current_step, "Mark placed");

        self.debug_check_invariants();
        Placement::Placed {
            player,
            position: pos,
            step: self.current_step,
        }
    }

    /// Places a mark by raw board index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`TimelineErrorKind::InvalidSquare`] if `index` is 9 or more.
    #[instrument(skip(self))]
    pub fn place_mark_at(&mut self, index: usize) -> Result<Placement, TimelineError> {
        let pos = Position::from_index(index)
            .ok_or_else(|| TimelineErrorKind::InvalidSquare(index.to_string()))?;
        Ok(self.place_mark(pos))
    }

    /// Displays `step` without changing history.
    ///
    /// The next player flips when the distance travelled is odd and stays
    /// when it is even.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineErrorKind::StepOutOfRange`] if `step` is not in
    /// history. The state is left unchanged.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), TimelineError> {
        if step >= self.history.len() {
            return Err(TimelineErrorKind::StepOutOfRange {
                step,
                len: self.history.len(),
            }
            .into());
        }

        let flips = self.current_step.abs_diff(step) % 2 == 1;
        self.current_step = step;
        debug!(flips, next_player = %self.next_player(), "Jumped");

        self.debug_check_invariants();
        Ok(())
    }

    /// Flips the move-list display order.
    #[instrument(skip(self), fields(reversed = self.history_reversed))]
    pub fn toggle_history_order(&mut self) {
        self.history_reversed = !self.history_reversed;
    }

    /// Sets the move-list display order.
    pub fn set_history_reversed(&mut self, reversed: bool) {
        self.history_reversed = reversed;
    }

    /// Derives everything the presentation layer renders.
    pub fn view(&self) -> GameView {
        GameView::from_state(self)
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            TimelineInvariants::check_all(self).is_ok(),
            "timeline invariants violated: {:?}",
            TimelineInvariants::check_all(self)
        );
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    #[cfg(test)]
    pub(crate) fn set_current_step(&mut self, step: usize) {
        self.current_step = step;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized shape of [`GameState`], checked before it becomes one.
#[derive(Deserialize)]
struct SavedGame {
    history: SavedHistory,
    current_step: usize,
    history_reversed: bool,
}

#[derive(Deserialize)]
struct SavedHistory {
    snapshots: Vec<BoardSnapshot>,
}

impl TryFrom<SavedGame> for GameState {
    type Error = TimelineError;

    #[instrument(
        skip(saved),
        fields(len = saved.history.snapshots.len(), step = saved.current_step)
    )]
    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let snapshots = saved.history.snapshots;

        if snapshots.iter().any(|s| s.squares().iter().any(|c| c.highlighted)) {
            warn!("Rejecting saved history with highlighted cells");
            return Err(TimelineErrorKind::InvalidState(
                "history snapshots are never highlighted".to_string(),
            )
            .into());
        }
        if let Some(won) = snapshots.iter().position(|s| s.winner().is_some())
            && won + 1 < snapshots.len()
        {
            warn!(won, "Rejecting saved history with moves after a win");
            return Err(TimelineErrorKind::InvalidState(format!(
                "step {} is won but history continues",
                won
            ))
            .into());
        }

        let state = Self {
            history: History::from_snapshots(snapshots),
            current_step: saved.current_step,
            history_reversed: saved.history_reversed,
        };
        TimelineInvariants::check_all(&state).map_err(|violations| {
            let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
            warn!(?reasons, "Rejecting saved state");
            TimelineErrorKind::InvalidState(reasons.join("; "))
        })?;

        Ok(state)
    }
}
