//! Tic-tac-toe with move history and time travel.
//!
//! The crate holds the whole game model and none of the rendering:
//!
//! - **Rules**: [`detect`] finds the first completed line on a board.
//! - **State**: [`GameState`] owns the snapshot [`History`], the displayed
//!   step and the move-list order.
//! - **View**: [`GameView`] is the derived, read-only frame a presentation
//!   layer renders from.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameState, Position, Status};
//!
//! let mut game = GameState::new();
//! for pos in [Position::TopLeft, Position::MiddleLeft, Position::TopCenter,
//!             Position::Center, Position::TopRight] {
//!     game.place_mark(pos);
//! }
//! assert_eq!(game.view().status(), &Status::Winner(tictactoe_timeline::Player::X));
//!
//! game.jump_to(2).unwrap();
//! assert_eq!(game.view().status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;
mod view;

pub use error::{TimelineError, TimelineErrorKind};
pub use game::{GameState, IgnoreReason, MAX_STEPS, Phase, Placement};
pub use history::History;
pub use position::Position;
pub use rules::{LINES, WinResult, detect};
pub use snapshot::{BoardSnapshot, render_grid};
pub use types::{Cell, Coord, Player, Square};
pub use view::{GameView, MoveEntry, Status};
