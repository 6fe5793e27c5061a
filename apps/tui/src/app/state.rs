use crate::config::AppConfig;
use crate::ui;
use base_bharat_core::pages::Viewport;
use base_bharat_core::router::{suggest, Route};
use base_bharat_core::site::{Site, TickReport};
use ratatui::layout::Rect;
use std::sync::Mutex;
use std::time::Duration;
use tachyonfx::{fx, Effect, Interpolation};
use tracing::{debug, info, warn};

const TRANSITION_MS: u32 = 450;

pub struct App {
    pub running: bool,
    pub site: Site,
    pub show_help: bool,
    pub status_message: String,
    /// Text of the go-to-path prompt while it is open.
    pub goto_input: Option<String>,
    pub menu_index: usize,
    pub now: Duration,
    /// Time since the previous tick, fed to running effects.
    pub last_tick: Duration,
    pub tick_rate: Duration,
    pub viewport: Viewport,
    pub transition_fx: Mutex<Option<Effect>>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let route = Route::resolve(&config.start_route);
        let mut app = Self {
            running: true,
            site: Site::new(config.site_options(), Route::Home),
            show_help: false,
            status_message: String::new(),
            goto_input: None,
            menu_index: 0,
            now: Duration::ZERO,
            last_tick: Duration::ZERO,
            tick_rate: config.tick_rate,
            viewport: Viewport::default(),
            transition_fx: Mutex::new(None),
        };
        app.navigate(route);
        app
    }

    pub const fn route(&self) -> &Route {
        self.site.route()
    }

    /// Switches page, starting the transition effect when the page changes.
    pub fn navigate(&mut self, route: Route) {
        let from = self.route().path().to_string();
        if !self.site.navigate(route, self.now) {
            return;
        }

        info!(from = %from, to = %self.route().path(), "navigated");
        self.menu_index = self.route().nav_index().unwrap_or(0);
        self.status_message = match self.route() {
            Route::NotFound(path) => suggest(path).map_or_else(
                || format!("No page at {path}"),
                |route| format!("No page at {path}. Did you mean {}?", route.path()),
            ),
            _ => String::new(),
        };
        self.start_transition();
    }

    pub fn navigate_path(&mut self, path: &str) {
        self.navigate(Route::resolve(path));
    }

    fn start_transition(&self) {
        if let Ok(mut effect) = self.transition_fx.lock() {
            *effect = Some(fx::coalesce((TRANSITION_MS, Interpolation::QuadOut)));
        }
    }

    pub fn transition_running(&self) -> bool {
        self.transition_fx
            .lock()
            .map(|effect| effect.as_ref().is_some_and(|effect| !effect.done()))
            .unwrap_or(false)
    }

    /// Recomputes the page viewport for a terminal of `area`.
    pub fn resize(&mut self, area: Rect) {
        let body = ui::body_area(area, self.site.is_header_compact());
        self.viewport = Viewport::new(body.width, body.height);
    }

    pub fn tick(&mut self, now: Duration) -> TickReport {
        self.last_tick = now.saturating_sub(self.now);
        self.now = now;

        let report = self.site.tick(now, self.viewport);
        for id in &report.revealed {
            debug!(obstacle = *id, "solution revealed");
        }

        if *self.route() == Route::PledgeWall {
            let body = Rect::new(0, 0, self.viewport.width, self.viewport.height);
            let visible = ui::screens::pledge_wall::wall_capacity(body);
            let wall = self.site.pledge_wall_mut();
            let before = wall.wall_offset();
            let offset = wall.fit_wall(visible);
            if offset != before {
                debug!(offset, "pledge wall scrolled");
            }
        }

        if let Ok(mut effect) = self.transition_fx.lock() {
            if effect.as_ref().is_some_and(Effect::done) {
                *effect = None;
            }
        }

        report
    }

    pub fn submit_pledge(&mut self) {
        match self.site.pledge_wall_mut().submit(wall_clock_millis()) {
            Ok(submitted) => {
                info!(id = submitted.pledge.id, name = %submitted.pledge.name, "pledge added");
                self.status_message = format!("Pledge added: {}", submitted.pledge.name);
            }
            Err(e) => {
                warn!("pledge rejected: {e}");
                self.status_message = format!("Error: {e}");
            }
        }
    }

    pub fn toggle_animation_pause(&mut self) {
        self.site.toggle_animation();
        debug!(mode = ?self.site.animation_mode(), "animation toggled");
    }

    pub fn animation_paused(&self) -> bool {
        self.site.animation_mode() == base_bharat_core::animation::AnimationMode::Paused
    }

    pub fn page_step(&self) -> i32 {
        i32::from(self.viewport.height.saturating_sub(2).max(1))
    }
}

fn wall_clock_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base_bharat_core::form::PledgeField;

    fn app_at(route: &str) -> App {
        let config = AppConfig {
            start_route: route.to_string(),
            ..AppConfig::default()
        };
        App::new(&config)
    }

    #[test]
    fn starts_on_the_configured_route() {
        assert_eq!(app_at("/pledge-wall").route(), &Route::PledgeWall);
        assert_eq!(app_at("/").route(), &Route::Home);
    }

    #[test]
    fn unknown_start_route_suggests_a_page() {
        let app = app_at("/pledge");
        assert!(app.route().is_not_found());
        assert!(app.status_message.contains("/pledge-wall"));
    }

    #[test]
    fn navigation_starts_a_transition() {
        let mut app = app_at("/");
        app.tick(Duration::ZERO);
        assert!(!app.transition_running());

        app.navigate(Route::GlobalLeaderboard);
        assert!(app.transition_running());

        app.navigate(Route::GlobalLeaderboard);
        assert_eq!(app.route(), &Route::GlobalLeaderboard);
    }

    #[test]
    fn submitting_reports_in_the_status_line() {
        let mut app = app_at("/pledge-wall");
        app.submit_pledge();
        assert_eq!(app.status_message, "Error: Please fill in both fields.");
        assert_eq!(app.site.pledge_wall().pledges().len(), 5);

        let wall = app.site.pledge_wall_mut();
        wall.update_field(PledgeField::Name, "Quantum Bharat");
        wall.update_field(PledgeField::Idea, "test");
        app.submit_pledge();
        assert_eq!(app.status_message, "Pledge added: Quantum Bharat");
        assert_eq!(app.site.pledge_wall().pledges().len(), 6);
    }

    #[test]
    fn submitted_pledges_are_scrolled_into_view() {
        let mut app = app_at("/pledge-wall");
        app.resize(Rect::new(0, 0, 100, 30));
        for n in 0..10 {
            let wall = app.site.pledge_wall_mut();
            wall.update_field(PledgeField::Name, &format!("Builder {n}"));
            wall.update_field(PledgeField::Idea, "test");
            app.submit_pledge();
        }
        app.tick(Duration::from_millis(50));

        let wall = app.site.pledge_wall();
        let visible = ui::screens::pledge_wall::wall_capacity(Rect::new(
            0,
            0,
            app.viewport.width,
            app.viewport.height,
        ));
        assert!(visible < wall.pledges().len());
        assert_eq!(wall.wall_offset() + visible, wall.pledges().len());
    }

    #[test]
    fn resize_follows_the_body_area() {
        let mut app = app_at("/");
        app.resize(Rect::new(0, 0, 100, 30));
        assert_eq!(app.viewport.width, 96);
        assert!(app.viewport.height < 30);
    }

    #[test]
    fn ticks_track_the_frame_delta() {
        let mut app = app_at("/");
        app.tick(Duration::from_millis(40));
        app.tick(Duration::from_millis(90));
        assert_eq!(app.last_tick, Duration::from_millis(50));
        assert_eq!(app.site.now(), Duration::from_millis(90));
    }
}
