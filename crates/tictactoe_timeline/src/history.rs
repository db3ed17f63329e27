//! Ordered board snapshots from game start to the newest move.

use crate::BoardSnapshot;
use serde::Serialize;
use tracing::{debug, instrument};

/// Snapshot history.
///
/// Always starts with [`BoardSnapshot::INITIAL`]. Growth happens only
/// through [`History::branch`], which drops everything after the step the
/// new snapshot follows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<BoardSnapshot>,
}

impl History {
    /// Creates a history holding only the initial snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![BoardSnapshot::INITIAL],
        }
    }

    /// Wraps saved snapshots. The caller validates them before use.
    pub(crate) fn from_snapshots(snapshots: Vec<BoardSnapshot>) -> Self {
        Self { snapshots }
    }

    /// Returns all snapshots, oldest first.
    pub fn snapshots(&self) -> &[BoardSnapshot] {
        &self.snapshots
    }

    /// Number of snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the initial snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&BoardSnapshot> {
        self.snapshots.get(step)
    }

    /// Returns the newest snapshot.
    pub fn last(&self) -> &BoardSnapshot {
        // The initial snapshot is always present.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Discards every snapshot after `step`, then appends `snapshot`.
    ///
    /// Returns the step of the appended snapshot.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub(crate) fn branch(&mut self, step: usize, snapshot: BoardSnapshot) -> usize {
        let discarded = self.snapshots.len().saturating_sub(step + 1);
        if discarded > 0 {
            debug!(step, discarded, "Discarding future snapshots");
        }
        self.snapshots.truncate(step + 1);
        self.snapshots.push(snapshot);
        self.snapshots.len() - 1
    }

    #[cfg(test)]
    pub(crate) fn snapshots_mut(&mut self) -> &mut Vec<BoardSnapshot> {
        &mut self.snapshots
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
