mod render;
mod state;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use base_bharat_core::pages::Viewport;
use base_bharat_core::Route;
use ratzilla::event::{KeyCode, KeyEvent};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use state::{hash_to_path, Key, WebApp};
use wasm_bindgen::JsValue;

fn location_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map_or_else(|| "/".to_string(), |hash| hash_to_path(&hash).to_string())
}

fn set_location_path(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(error) = window.location().set_hash(path) {
        web_sys::console::warn_1(&error);
    }
}

fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

fn key_from_event(event: &KeyEvent) -> Option<Key> {
    let key = match event.code {
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab if event.shift => Key::BackTab,
        KeyCode::Tab => Key::Tab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => return None,
    };
    Some(key)
}

fn elapsed_since(started: f64) -> Duration {
    Duration::from_secs_f64(((js_sys::Date::now() - started) / 1_000.0).max(0.0))
}

fn main() -> io::Result<()> {
    let started = js_sys::Date::now();
    let app = Rc::new(RefCell::new(WebApp::new(&location_path())));
    log(&format!("base bharat: starting at {}", app.borrow().site.route().path()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let app = app.clone();
        move |event| {
            let Some(key) = key_from_event(&event) else {
                return;
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let now_millis = js_sys::Date::now() as u64;
            let mut app = app.borrow_mut();
            if app.handle_key(key, now_millis) {
                let path = app.site.route().path().to_string();
                log(&format!("base bharat: navigated to {path}"));
                set_location_path(&path);
            }
        }
    });

    terminal.draw_web(move |f| {
        let mut app = app.borrow_mut();
        app.sync_path(&location_path());

        let (_, body, _) = render::frame_areas(f.area(), app.site.is_header_compact());
        for id in app.tick(elapsed_since(started), Viewport::new(body.width, body.height)) {
            log(&format!("base bharat: solution revealed for {id}"));
        }
        if *app.site.route() == Route::PledgeWall {
            app.fit_pledge_wall(render::wall_capacity(body));
        }

        render::render(&app, f);
    });

    Ok(())
}
