use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use base_bharat_core::Route;
use crossterm::event::KeyCode;

const GOTO_MAX_CHARS: usize = 64;

/// Shortcuts available on every page when no text field has the keyboard.
pub fn handle_global_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char(digit @ '1'..='4') => {
            let index = digit as usize - '1' as usize;
            if let Some(route) = Route::from_nav_index(index) {
                app.navigate(route);
            }
        }
        KeyCode::Tab => {
            let next = app.route().next();
            app.navigate(next);
        }
        KeyCode::BackTab => {
            let prev = app.route().prev();
            app.navigate(prev);
        }
        KeyCode::Char('m') => {
            app.menu_index = app.route().nav_index().unwrap_or(0);
            app.site.toggle_menu();
        }
        KeyCode::Char('g') => {
            app.goto_input = Some(String::new());
        }
        _ => return false,
    }

    true
}

pub fn handle_menu_input(app: &mut App, key: KeyCode) {
    let len = Route::NAVIGATION.len();
    match key {
        KeyCode::Up => {
            app.menu_index = wrap_decrement(app.menu_index, len);
        }
        KeyCode::Down => {
            app.menu_index = wrap_increment(app.menu_index, len);
        }
        KeyCode::Enter => {
            if let Some(route) = Route::from_nav_index(app.menu_index) {
                app.navigate(route);
            }
            app.site.close_menu();
        }
        KeyCode::Esc | KeyCode::Char('m') => {
            app.site.close_menu();
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}

pub fn handle_goto_input(app: &mut App, key: KeyCode) {
    let Some(input) = app.goto_input.as_mut() else {
        return;
    };

    match key {
        KeyCode::Char(ch) => {
            if input.chars().count() < GOTO_MAX_CHARS {
                input.push(ch);
            }
        }
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Enter => {
            let path = std::mem::take(input);
            app.goto_input = None;
            app.navigate_path(&path);
        }
        KeyCode::Esc => {
            app.goto_input = None;
        }
        _ => {}
    }
}
