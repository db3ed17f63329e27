//! Rendering tests against ratatui's test backend.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use tictactoe_timeline_tui::{App, ui};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
    terminal.draw(|f| ui::draw(f, app)).expect("draw succeeds");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_initial_screen() {
    let screen = render(&App::new(false));
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Go to Game start"));
    assert!(screen.contains("Moves (o: descending)"));
}

#[test]
fn test_winning_screen() {
    let mut app = App::new(false);
    for key in ['1', '4', '2', '5', '3'] {
        app.handle_key(KeyCode::Char(key));
    }
    let screen = render(&app);
    assert!(screen.contains("Winner: X"));
    assert!(screen.contains("Go to move #5 pos (2,0)"));
}

#[test]
fn test_reversed_screen_after_jump() {
    let mut app = App::new(false);
    for key in ['1', '4'] {
        app.handle_key(KeyCode::Char(key));
    }
    app.handle_key(KeyCode::Char('o'));
    app.handle_key(KeyCode::Tab);
    app.handle_key(KeyCode::End);
    app.handle_key(KeyCode::Enter);

    let screen = render(&app);
    assert!(screen.contains("Moves (o: ascending)"));
    assert!(screen.contains("> Go to Game start"));
    assert!(screen.contains("Next player: X"));
}
