//! Non-interactive replay: apply scripted moves and print the view.

use crate::cli::OutputFormat;
use anyhow::Result;
use tictactoe_timeline::{
    GameState, GameView, Position, TimelineError, TimelineErrorKind, render_grid,
};
use tracing::{info, instrument};

/// Parses moves given as indices (0-8) or position labels.
#[instrument]
pub fn parse_moves(moves: &[String]) -> Result<Vec<Position>, TimelineError> {
    moves
        .iter()
        .map(|m| {
            Position::from_label_or_number(m)
                .ok_or_else(|| TimelineError::new(TimelineErrorKind::InvalidSquare(m.clone())))
        })
        .collect()
}

/// Builds the game for a scripted run.
///
/// Moves are placed in order the way clicks would be; a move on an
/// occupied square or after a win changes nothing. `jump` then selects the
/// displayed step.
#[instrument(skip(moves))]
pub fn build_game(moves: &[Position], jump: Option<usize>, reversed: bool) -> Result<GameState> {
    let mut game = GameState::replay(moves.iter().copied());
    if let Some(step) = jump {
        game.jump_to(step)?;
    }
    game.set_history_reversed(reversed);
    info!(step = game.current_step(), history = game.history().len(), "Replay ready");
    Ok(game)
}

/// Renders the view in the requested format.
pub fn render(view: &GameView, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
        OutputFormat::Text => Ok(render_text(view)),
    }
}

fn render_text(view: &GameView) -> String {
    let mut out = format!(
        "{}\n\n{}\n\nMoves ({}):\n",
        render_grid(view.squares()),
        view.status(),
        order_name(view)
    );
    for entry in view.moves() {
        let marker = if *entry.active() { '*' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.description()));
    }
    out
}

fn order_name(view: &GameView) -> &'static str {
    if *view.history_reversed() {
        "newest first"
    } else {
        "oldest first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(moves: &[&str]) -> Vec<String> {
        moves.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_parse_moves_mixed() {
        let parsed = parse_moves(&strings(&["0", "center", "8"])).expect("valid moves");
        assert_eq!(
            parsed,
            vec![Position::TopLeft, Position::Center, Position::BottomRight]
        );
    }

    #[test]
    fn test_parse_moves_rejects_unknown() {
        let err = parse_moves(&strings(&["0", "11"])).unwrap_err();
        assert_eq!(err.kind, TimelineErrorKind::InvalidSquare("11".to_string()));
    }

    #[test]
    fn test_build_game_rejects_bad_jump() {
        let moves = parse_moves(&strings(&["0", "3"])).expect("valid moves");
        assert!(build_game(&moves, Some(7), false).is_err());
    }

    #[test]
    fn test_text_output_for_win() {
        let moves = parse_moves(&strings(&["0", "3", "1", "4", "2"])).expect("valid moves");
        let game = build_game(&moves, None, false).expect("valid replay");
        let text = render(&game.view(), OutputFormat::Text).expect("renders");

        assert!(text.starts_with("[X]|[X]|[X]\n"));
        assert!(text.contains("\nWinner: X\n"));
        assert!(text.contains("  Go to Game start\n"));
        assert!(text.ends_with("* Go to move #5 pos (2,0)\n"));
    }

    #[test]
    fn test_text_output_after_jump() {
        let moves = parse_moves(&strings(&["0", "3", "1", "4", "2"])).expect("valid moves");
        let game = build_game(&moves, Some(2), true).expect("valid replay");
        let text = render(&game.view(), OutputFormat::Text).expect("renders");

        assert!(text.contains("\nNext player: X\n"));
        assert!(text.contains("Moves (newest first):\n  Go to move #5 pos (2,0)\n"));
        assert!(text.contains("* Go to move #2 pos (0,1)\n"));
    }

    #[test]
    fn test_json_output() {
        let moves = parse_moves(&strings(&["4"])).expect("valid moves");
        let game = build_game(&moves, None, false).expect("valid replay");
        let json = render(&game.view(), OutputFormat::Json).expect("renders");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["status"]["NextPlayer"], "O");
        assert_eq!(value["moves"][1]["description"], "Go to move #1 pos (1,1)");
    }
}
