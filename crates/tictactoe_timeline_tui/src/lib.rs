//! Terminal front end for tictactoe_timeline.
//!
//! Plays the role of the presentation layer: it owns a
//! [`GameState`](tictactoe_timeline::GameState), forwards key presses to
//! it, and redraws from the derived view after every event.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod play;
pub mod replay;
pub mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command, OutputFormat};
pub use config::{ConfigError, TimelineConfig};
