//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board's cells. Rules are kept apart from history
//! storage so the view and the invariants can evaluate any snapshot.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinResult, detect};
