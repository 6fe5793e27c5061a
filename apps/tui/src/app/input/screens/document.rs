use crate::app::state::App;
use crossterm::event::KeyCode;

/// Scrolling for the pages laid out as a single document.
pub fn handle_scroll_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.site.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => app.site.scroll_by(1),
        KeyCode::PageUp => app.site.scroll_by(-app.page_step()),
        KeyCode::PageDown => app.site.scroll_by(app.page_step()),
        KeyCode::Home => app.site.scroll_to_top(),
        KeyCode::End => app.site.scroll_to_end(),
        _ => {}
    }
}
