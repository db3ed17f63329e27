//! tictactoe_timeline - unified CLI

use anyhow::Result;
use clap::Parser;
use tictactoe_timeline_tui::{Cli, Command, TimelineConfig, logging, play, replay};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TimelineConfig::load(&cli.config)?;

    match cli.command {
        Command::Play { reversed } => {
            let config = config.with_reversed(reversed);
            logging::init_file(&config)?;
            play::run_play(&config)
        }
        Command::Replay {
            moves,
            jump,
            reversed,
            format,
        } => {
            let config = config.with_reversed(reversed);
            logging::init_stderr(&config);
            info!(moves = moves.len(), %format, "Replaying moves");

            let positions = replay::parse_moves(&moves)?;
            let game = replay::build_game(&positions, jump, *config.history_reversed())?;
            println!("{}", replay::render(&game.view(), format)?);
            Ok(())
        }
    }
}
