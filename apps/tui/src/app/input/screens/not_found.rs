use crate::app::state::App;
use base_bharat_core::router::suggest;
use base_bharat_core::Route;
use crossterm::event::KeyCode;

pub fn handle_not_found_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => {
            let target = suggest(app.route().path()).unwrap_or(Route::Home);
            app.navigate(target);
        }
        KeyCode::Esc => app.navigate(Route::Home),
        _ => {}
    }
}
