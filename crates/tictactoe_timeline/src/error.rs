//! Error types for contract violations.
//!
//! Clicking an occupied square or playing after a win are not errors;
//! those are ignored placements. Errors here cover callers handing in
//! values that cannot name a step or a square, and saved games that fail
//! validation on load.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TimelineErrorKind {
    /// Jump target is not a recorded step.
    #[display("step {} is outside history of {} snapshots", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of snapshots in history.
        len: usize,
    },

    /// Text or index that does not name one of the 9 squares.
    #[display("invalid square: {}", _0)]
    InvalidSquare(String),

    /// Saved state that no sequence of moves could have produced.
    #[display("invalid saved state: {}", _0)]
    InvalidState(String),
}

/// Timeline error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Timeline error: {} at {}:{}", kind, file, line)]
pub struct TimelineError {
    /// Error kind.
    pub kind: TimelineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TimelineError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: TimelineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<TimelineErrorKind> for TimelineError {
    #[track_caller]
    fn from(kind: TimelineErrorKind) -> Self {
        Self::new(kind)
    }
}
