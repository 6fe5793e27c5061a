use base_bharat_core::pages::{FormFocus, Viewport};
use base_bharat_core::{Route, Site, SiteOptions};
use std::time::Duration;

/// Keys the page reacts to, decoupled from the DOM event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
}

pub struct WebApp {
    pub site: Site,
    pub status: String,
    pub now: Duration,
    pub viewport: Viewport,
}

impl WebApp {
    pub fn new(path: &str) -> Self {
        Self {
            site: Site::new(SiteOptions::default(), Route::resolve(path)),
            status: String::new(),
            now: Duration::ZERO,
            viewport: Viewport::default(),
        }
    }

    /// Follows the location hash when the user edits it or uses history.
    /// Returns whether the route changed.
    pub fn sync_path(&mut self, path: &str) -> bool {
        let route = Route::resolve(path);
        if &route == self.site.route() {
            return false;
        }
        self.navigate(route)
    }

    pub fn navigate(&mut self, route: Route) -> bool {
        let changed = self.site.navigate(route, self.now);
        if changed {
            self.status.clear();
        }
        changed
    }

    pub fn tick(&mut self, now: Duration, viewport: Viewport) -> Vec<&'static str> {
        self.now = now;
        self.viewport = viewport;
        self.site.tick(now, viewport).revealed
    }

    fn page_step(&self) -> i32 {
        i32::from(self.viewport.height.saturating_sub(2).max(1))
    }

    /// Handles one key press. Returns whether the route changed, so the
    /// caller can update the location hash.
    pub fn handle_key(&mut self, key: Key, now_millis: u64) -> bool {
        if self.site.is_menu_open() {
            return self.handle_menu_key(key);
        }

        if *self.site.route() == Route::PledgeWall && self.handle_pledge_key(key, now_millis) {
            return false;
        }

        match key {
            Key::Char(digit @ '1'..='4') => {
                let index = digit as usize - '1' as usize;
                Route::from_nav_index(index).is_some_and(|route| self.navigate(route))
            }
            Key::Tab => {
                let next = self.site.route().next();
                self.navigate(next)
            }
            Key::BackTab => {
                let prev = self.site.route().prev();
                self.navigate(prev)
            }
            Key::Char('m') => {
                self.site.toggle_menu();
                false
            }
            Key::Char(' ') => {
                self.site.toggle_animation();
                false
            }
            _ => self.handle_page_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: Key) -> bool {
        match key {
            Key::Char(digit @ '1'..='4') => {
                let index = digit as usize - '1' as usize;
                let changed = Route::from_nav_index(index).is_some_and(|route| self.navigate(route));
                self.site.close_menu();
                changed
            }
            _ => {
                self.site.close_menu();
                false
            }
        }
    }

    /// Page-specific keys. Returns whether the route changed.
    fn handle_page_key(&mut self, key: Key) -> bool {
        match self.site.route().clone() {
            Route::Home | Route::ObstacleCourse => match key {
                Key::Up | Key::Char('k') => self.site.scroll_by(-1),
                Key::Down | Key::Char('j') => self.site.scroll_by(1),
                Key::PageUp => self.site.scroll_by(-self.page_step()),
                Key::PageDown => self.site.scroll_by(self.page_step()),
                Key::Home => self.site.scroll_to_top(),
                Key::End => self.site.scroll_to_end(),
                _ => {}
            },
            Route::GlobalLeaderboard => {
                let now = self.now;
                let board = self.site.leaderboard_mut();
                match key {
                    Key::Left | Key::Char('h') => board.select_prev(now),
                    Key::Right | Key::Char('l') => board.select_next(now),
                    Key::Enter => board.replay(now),
                    _ => {}
                }
            }
            Route::NotFound(path) => {
                return match key {
                    Key::Enter => {
                        let route = base_bharat_core::router::suggest(&path).unwrap_or(Route::Home);
                        self.navigate(route)
                    }
                    Key::Esc => self.navigate(Route::Home),
                    _ => false,
                };
            }
            Route::PledgeWall => {}
        }
        false
    }

    /// Keeps the wall list window around new pledges and the selection.
    pub fn fit_pledge_wall(&mut self, visible: usize) -> usize {
        self.site.pledge_wall_mut().fit_wall(visible)
    }

    /// Keys the pledge wall consumes before global shortcuts.
    fn handle_pledge_key(&mut self, key: Key, now_millis: u64) -> bool {
        let wall = self.site.pledge_wall_mut();

        if wall.is_modal_open() {
            if matches!(key, Key::Esc | Key::Enter | Key::Backspace) {
                wall.close_modal();
            }
            return true;
        }

        if wall.is_editing() {
            match key {
                Key::Char(ch) => wall.type_char(ch),
                Key::Backspace => wall.backspace(),
                Key::Esc => wall.stop_editing(),
                Key::Tab | Key::Down => {
                    wall.focus_next();
                    wall.begin_editing();
                }
                Key::BackTab | Key::Up => {
                    wall.focus_prev();
                    wall.begin_editing();
                }
                Key::Enter if wall.focus() == FormFocus::Name => {
                    wall.set_focus(FormFocus::Idea);
                    wall.begin_editing();
                }
                Key::Enter => self.submit(now_millis),
                _ => {}
            }
            return true;
        }

        match (wall.focus(), key) {
            (FormFocus::Name | FormFocus::Idea, Key::Enter) => {
                wall.begin_editing();
            }
            (FormFocus::Submit, Key::Enter) => self.submit(now_millis),
            (FormFocus::Wall, Key::Enter) => wall.open_modal(),
            (FormFocus::Wall, Key::Up) if wall.selected() == 0 => wall.focus_prev(),
            (FormFocus::Wall, Key::Up) => wall.select_prev(),
            (FormFocus::Wall, Key::Down) => wall.select_next(),
            (FormFocus::Wall, Key::Home) => wall.select_first(),
            (FormFocus::Wall, Key::End) => wall.select_last(),
            (_, Key::Up) => wall.focus_prev(),
            (_, Key::Down) => wall.focus_next(),
            (_, Key::Esc) => wall.set_focus(FormFocus::Name),
            _ => return false,
        }
        true
    }

    fn submit(&mut self, now_millis: u64) {
        self.status = match self.site.pledge_wall_mut().submit(now_millis) {
            Ok(submitted) => format!("Pledge added: {}", submitted.pledge.name),
            Err(e) => format!("Error: {e}"),
        };
    }
}

/// Location hash to route path: `#/pledge-wall` becomes `/pledge-wall`.
pub fn hash_to_path(hash: &str) -> &str {
    let path = hash.trim_start_matches('#');
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_map_to_paths() {
        assert_eq!(hash_to_path(""), "/");
        assert_eq!(hash_to_path("#"), "/");
        assert_eq!(hash_to_path("#/pledge-wall"), "/pledge-wall");
    }

    #[test]
    fn number_keys_switch_pages() {
        let mut app = WebApp::new("/");
        assert!(app.handle_key(Key::Char('3'), 0));
        assert_eq!(app.site.route(), &Route::GlobalLeaderboard);
        assert!(!app.handle_key(Key::Char('3'), 0));
    }

    #[test]
    fn hash_changes_follow_history() {
        let mut app = WebApp::new("/obstacle-course");
        assert!(!app.sync_path("/obstacle-course"));
        assert!(app.sync_path("/rocket-builder"));
        assert!(app.site.route().is_not_found());

        app.handle_key(Key::Esc, 0);
        assert_eq!(app.site.route(), &Route::Home);
    }

    #[test]
    fn not_found_keys_update_the_hash() {
        let mut hash = String::from("#/rocket-builder");
        let mut app = WebApp::new(hash_to_path(&hash));

        if app.handle_key(Key::Esc, 0) {
            hash = format!("#{}", app.site.route().path());
        }
        app.sync_path(hash_to_path(&hash));
        assert_eq!(app.site.route(), &Route::Home);

        app.sync_path("/pledge");
        if app.handle_key(Key::Enter, 0) {
            hash = format!("#{}", app.site.route().path());
        }
        app.sync_path(hash_to_path(&hash));
        assert_eq!(app.site.route(), &Route::PledgeWall);
    }

    #[test]
    fn new_pledges_stay_in_the_wall_window() {
        let mut app = WebApp::new("/pledge-wall");
        for n in 0..10 {
            app.handle_key(Key::Enter, 0);
            for ch in format!("Builder{n}").chars() {
                app.handle_key(Key::Char(ch), 0);
            }
            app.handle_key(Key::Enter, 0);
            app.handle_key(Key::Char('x'), 0);
            app.handle_key(Key::Enter, 0);
            assert_eq!(app.status, format!("Pledge added: Builder{n}"));
            app.site.pledge_wall_mut().set_focus(FormFocus::Name);
        }

        let offset = app.fit_pledge_wall(5);
        let wall = app.site.pledge_wall();
        assert_eq!(wall.pledges().len(), 15);
        assert_eq!(offset, 10);
        assert_eq!(wall.pledges()[14].name, "Builder9");
    }

    #[test]
    fn typing_a_pledge_does_not_trigger_shortcuts() {
        let mut app = WebApp::new("/pledge-wall");
        app.handle_key(Key::Enter, 0);
        for ch in "q1m".chars() {
            assert!(!app.handle_key(Key::Char(ch), 0));
        }
        assert_eq!(app.site.route(), &Route::PledgeWall);
        assert!(!app.site.is_menu_open());

        app.handle_key(Key::Enter, 0);
        for ch in "solar".chars() {
            app.handle_key(Key::Char(ch), 0);
        }
        app.handle_key(Key::Enter, 42);
        assert_eq!(app.status, "Pledge added: q1m");
        assert_eq!(app.site.pledge_wall().pledges().len(), 6);
    }

    #[test]
    fn menu_picks_a_page_and_closes() {
        let mut app = WebApp::new("/");
        app.handle_key(Key::Char('m'), 0);
        assert!(app.site.is_menu_open());
        assert!(app.handle_key(Key::Char('4'), 0));
        assert!(!app.site.is_menu_open());
        assert_eq!(app.site.route(), &Route::PledgeWall);
    }

    #[test]
    fn leaderboard_arrows_change_category() {
        let mut app = WebApp::new("/global-leaderboard");
        app.handle_key(Key::Right, 0);
        assert_eq!(
            app.site.leaderboard().category(),
            base_bharat_core::Category::Quantum
        );
    }
}
