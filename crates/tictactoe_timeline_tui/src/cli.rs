//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Play tic-tac-toe and rewind to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional; defaults apply if missing)
    #[arg(short, long, global = true, default_value = "tictactoe_timeline.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Show the move list newest first
        #[arg(long)]
        reversed: bool,
    },

    /// Apply a scripted sequence of moves and print the resulting view
    Replay {
        /// Squares to mark in order, as indices 0-8 or labels like "center"
        #[arg(required = true)]
        moves: Vec<String>,

        /// Step to display after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,

        /// Show the move list newest first
        #[arg(long)]
        reversed: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for `replay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Board grid, status line and move list
    Text,
    /// The full view as pretty-printed JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from([
            "tictactoe_timeline",
            "replay",
            "0",
            "center",
            "--jump",
            "1",
            "--format",
            "json",
        ]);
        match cli.command {
            Command::Replay {
                moves,
                jump,
                reversed,
                format,
            } => {
                assert_eq!(moves, vec!["0", "center"]);
                assert_eq!(jump, Some(1));
                assert!(!reversed);
                assert_eq!(format, OutputFormat::Json);
            }
            Command::Play { .. } => panic!("expected replay"),
        }
        assert_eq!(cli.config, PathBuf::from("tictactoe_timeline.toml"));
    }

    #[test]
    fn test_parse_play_with_config() {
        let cli = Cli::parse_from(["tictactoe_timeline", "play", "--reversed", "-c", "my.toml"]);
        assert!(matches!(cli.command, Command::Play { reversed: true }));
        assert_eq!(cli.config, PathBuf::from("my.toml"));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
