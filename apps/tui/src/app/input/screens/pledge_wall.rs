use crate::app::state::App;
use base_bharat_core::pages::FormFocus;
use crossterm::event::KeyCode;

/// Keys the pledge wall takes before global shortcuts: everything while the
/// modal is open or a field is being edited.
pub fn handle_captured_input(app: &mut App, key: KeyCode) -> bool {
    let wall = app.site.pledge_wall_mut();

    if wall.is_modal_open() {
        if matches!(key, KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace) {
            wall.close_modal();
        }
        return true;
    }

    if !wall.is_editing() {
        return false;
    }

    match key {
        KeyCode::Char(ch) => wall.type_char(ch),
        KeyCode::Backspace => wall.backspace(),
        KeyCode::Esc => wall.stop_editing(),
        KeyCode::Tab | KeyCode::Down => {
            wall.focus_next();
            wall.begin_editing();
        }
        KeyCode::BackTab | KeyCode::Up => {
            wall.focus_prev();
            wall.begin_editing();
        }
        KeyCode::Enter => match wall.focus() {
            FormFocus::Name => {
                wall.set_focus(FormFocus::Idea);
                wall.begin_editing();
            }
            _ => app.submit_pledge(),
        },
        _ => {}
    }

    true
}

pub fn handle_pledge_wall_input(app: &mut App, key: KeyCode) {
    let wall = app.site.pledge_wall_mut();
    match (wall.focus(), key) {
        (FormFocus::Name | FormFocus::Idea, KeyCode::Enter) => {
            wall.begin_editing();
        }
        (FormFocus::Submit, KeyCode::Enter) => app.submit_pledge(),
        (FormFocus::Wall, KeyCode::Enter) => wall.open_modal(),
        (FormFocus::Wall, KeyCode::Up) => {
            if wall.selected() == 0 {
                wall.focus_prev();
            } else {
                wall.select_prev();
            }
        }
        (FormFocus::Wall, KeyCode::Down) => wall.select_next(),
        (FormFocus::Wall, KeyCode::Home) => wall.select_first(),
        (FormFocus::Wall, KeyCode::End) => wall.select_last(),
        (_, KeyCode::Up) => wall.focus_prev(),
        (_, KeyCode::Down) => wall.focus_next(),
        (_, KeyCode::Esc) => wall.set_focus(FormFocus::Name),
        _ => {}
    }
}
