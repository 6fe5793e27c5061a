//! Whole-site state: the current route, every page's view state and the
//! ambient animation clock. Front-ends own one [`Site`] and drive it with
//! input events and [`Site::tick`].

use crate::animation::{advance_animation_counter, AnimationMode};
use crate::domain::Category;
use crate::pages::{CoursePage, HomePage, LeaderboardPage, PledgeWallPage, Scroll, Viewport};
use crate::reveal::DEFAULT_REVEAL_DELAY;
use crate::router::Route;
use crate::starfield::{StarField, DEFAULT_STAR_COUNT};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteOptions {
    pub reveal_delay: Duration,
    pub star_count: usize,
    pub star_seed: u64,
    pub category: Category,
}

impl SiteOptions {
    pub const DEFAULT_STAR_SEED: u64 = 0x0B4A_4A7A;
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            reveal_delay: DEFAULT_REVEAL_DELAY,
            star_count: DEFAULT_STAR_COUNT,
            star_seed: Self::DEFAULT_STAR_SEED,
            category: Category::Ev,
        }
    }
}

/// What changed during a tick that a front-end may want to log or animate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub revealed: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Site {
    route: Route,
    menu_open: bool,
    home: HomePage,
    course: CoursePage,
    leaderboard: LeaderboardPage,
    pledge_wall: PledgeWallPage,
    mode: AnimationMode,
    counter: f64,
    last_tick: Option<f64>,
    stars: StarField,
    now: Duration,
    viewport: Viewport,
}

impl Site {
    pub fn new(options: SiteOptions, route: Route) -> Self {
        let viewport = Viewport::default();
        Self {
            route,
            menu_open: false,
            home: HomePage::new(),
            course: CoursePage::new(options.reveal_delay),
            leaderboard: LeaderboardPage::new(options.category),
            pledge_wall: PledgeWallPage::new(),
            mode: AnimationMode::Running,
            counter: 0.0,
            last_tick: None,
            stars: StarField::new(
                options.star_count,
                viewport.width,
                viewport.height,
                options.star_seed,
            ),
            now: Duration::ZERO,
            viewport,
        }
    }

    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// Moves to `route`, tearing down the page being left. The menu always
    /// closes. Returns whether the route changed.
    pub fn navigate(&mut self, route: Route, now: Duration) -> bool {
        self.menu_open = false;
        if route == self.route {
            return false;
        }

        match self.route {
            Route::Home => self.home.teardown(),
            Route::ObstacleCourse => {
                self.course.teardown();
            }
            Route::PledgeWall => self.pledge_wall.teardown(),
            Route::GlobalLeaderboard | Route::NotFound(_) => {}
        }

        if route == Route::GlobalLeaderboard {
            self.leaderboard.replay(now);
        }

        self.route = route;
        true
    }

    pub fn navigate_path(&mut self, path: &str, now: Duration) -> bool {
        self.navigate(Route::resolve(path), now)
    }

    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub const fn animation_mode(&self) -> AnimationMode {
        self.mode
    }

    pub fn toggle_animation(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub const fn animation_counter(&self) -> f64 {
        self.counter
    }

    pub const fn now(&self) -> Duration {
        self.now
    }

    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub const fn stars(&self) -> &StarField {
        &self.stars
    }

    pub const fn home(&self) -> &HomePage {
        &self.home
    }

    pub fn home_mut(&mut self) -> &mut HomePage {
        &mut self.home
    }

    pub const fn course(&self) -> &CoursePage {
        &self.course
    }

    pub fn course_mut(&mut self) -> &mut CoursePage {
        &mut self.course
    }

    pub const fn leaderboard(&self) -> &LeaderboardPage {
        &self.leaderboard
    }

    pub fn leaderboard_mut(&mut self) -> &mut LeaderboardPage {
        &mut self.leaderboard
    }

    pub const fn pledge_wall(&self) -> &PledgeWallPage {
        &self.pledge_wall
    }

    pub fn pledge_wall_mut(&mut self) -> &mut PledgeWallPage {
        &mut self.pledge_wall
    }

    /// Scroll position of the current page. Pages without a document stay
    /// at the top.
    pub const fn scroll(&self) -> Scroll {
        match self.route {
            Route::Home => self.home.scroll(),
            Route::ObstacleCourse => self.course.scroll(),
            Route::GlobalLeaderboard | Route::PledgeWall | Route::NotFound(_) => {
                Scroll::new()
            }
        }
    }

    pub const fn is_header_compact(&self) -> bool {
        self.scroll().is_compact()
    }

    pub fn scroll_by(&mut self, delta: i32) {
        match self.route {
            Route::Home => self.home.scroll_by(delta),
            Route::ObstacleCourse => self.course.scroll_by(delta),
            Route::GlobalLeaderboard | Route::PledgeWall | Route::NotFound(_) => {}
        }
    }

    pub fn scroll_to_top(&mut self) {
        match self.route {
            Route::Home => self.home.scroll_to_top(),
            Route::ObstacleCourse => self.course.scroll_to_top(),
            Route::GlobalLeaderboard | Route::PledgeWall | Route::NotFound(_) => {}
        }
    }

    pub fn scroll_to_end(&mut self) {
        match self.route {
            Route::Home => self.home.scroll_to_end(),
            Route::ObstacleCourse => self.course.scroll_to_end(),
            Route::GlobalLeaderboard | Route::PledgeWall | Route::NotFound(_) => {}
        }
    }

    /// Advances the clock to `now`: animation counter, star field, reveal
    /// timers and the visibility of the current page inside `viewport`.
    pub fn tick(&mut self, now: Duration, viewport: Viewport) -> TickReport {
        let delta = now.saturating_sub(self.now);
        self.now = now;
        self.viewport = viewport;

        let (counter, last_tick) =
            advance_animation_counter(self.counter, self.last_tick, now.as_secs_f64(), self.mode);
        self.counter = counter;
        self.last_tick = last_tick;

        self.stars.resize(viewport.width, viewport.height);
        if self.mode == AnimationMode::Running {
            self.stars.advance(delta.as_secs_f64() * 1_000.0);
        }

        let mut report = TickReport::default();
        match self.route {
            Route::Home => self.home.update(viewport, now),
            Route::ObstacleCourse => report.revealed = self.course.update(viewport, now),
            Route::GlobalLeaderboard | Route::PledgeWall | Route::NotFound(_) => {}
        }
        report
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new(SiteOptions::default(), Route::Home)
    }
}
