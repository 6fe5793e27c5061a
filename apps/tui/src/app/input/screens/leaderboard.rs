use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_leaderboard_input(app: &mut App, key: KeyCode) {
    let now = app.now;
    let leaderboard = app.site.leaderboard_mut();
    match key {
        KeyCode::Left | KeyCode::Char('h') => leaderboard.select_prev(now),
        KeyCode::Right | KeyCode::Char('l') => leaderboard.select_next(now),
        KeyCode::Enter => leaderboard.replay(now),
        _ => {}
    }
}
