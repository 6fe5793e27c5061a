use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "page", content = "path", rename_all = "kebab-case")]
pub enum Route {
    Home,
    ObstacleCourse,
    GlobalLeaderboard,
    PledgeWall,
    NotFound(String),
}

impl Route {
    /// Routes shown in the navigation bar, in display order.
    pub const NAVIGATION: [Self; 4] = [
        Self::Home,
        Self::ObstacleCourse,
        Self::GlobalLeaderboard,
        Self::PledgeWall,
    ];

    /// Resolves a location path. Query strings and fragments are ignored,
    /// trailing slashes are trimmed and matching ignores case.
    pub fn resolve(path: &str) -> Self {
        let normalized = normalize(path);
        match normalized.as_str() {
            "/" => Self::Home,
            "/obstacle-course" => Self::ObstacleCourse,
            "/global-leaderboard" => Self::GlobalLeaderboard,
            "/pledge-wall" => Self::PledgeWall,
            _ => Self::NotFound(normalized),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Home => "/",
            Self::ObstacleCourse => "/obstacle-course",
            Self::GlobalLeaderboard => "/global-leaderboard",
            Self::PledgeWall => "/pledge-wall",
            Self::NotFound(path) => path,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::ObstacleCourse => "Obstacle Course",
            Self::GlobalLeaderboard => "Global Leaderboard",
            Self::PledgeWall => "Pledge Wall",
            Self::NotFound(_) => "Not Found",
        }
    }

    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::ObstacleCourse => "⛨",
            Self::GlobalLeaderboard => "◍",
            Self::PledgeWall => "✦",
            Self::NotFound(_) => "?",
        }
    }

    /// Position in the navigation bar, `None` for the fallback page.
    pub fn nav_index(&self) -> Option<usize> {
        Self::NAVIGATION.iter().position(|route| route == self)
    }

    pub fn from_nav_index(index: usize) -> Option<Self> {
        Self::NAVIGATION.get(index).cloned()
    }

    /// Next navigation entry, wrapping around. The fallback page moves to Home.
    #[must_use]
    pub fn next(&self) -> Self {
        self.nav_index().map_or(Self::Home, |index| {
            Self::NAVIGATION[(index + 1) % Self::NAVIGATION.len()].clone()
        })
    }

    #[must_use]
    pub fn prev(&self) -> Self {
        self.nav_index().map_or(Self::Home, |index| {
            let len = Self::NAVIGATION.len();
            Self::NAVIGATION[(index + len - 1) % len].clone()
        })
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

fn normalize(path: &str) -> String {
    let path = path.trim();
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    let lowered = trimmed.to_lowercase();

    if lowered.is_empty() {
        "/".to_string()
    } else if lowered.starts_with('/') {
        lowered
    } else {
        format!("/{lowered}")
    }
}

/// The known route closest to `path`, if any scores as a fuzzy match.
pub fn suggest(path: &str) -> Option<Route> {
    let matcher = SkimMatcherV2::default();
    let needle = normalize(path);
    let needle = needle.trim_start_matches('/');
    if needle.is_empty() {
        return None;
    }

    Route::NAVIGATION
        .iter()
        .filter_map(|route| {
            matcher
                .fuzzy_match(route.path(), needle)
                .map(|score| (score, route))
        })
        .max_by_key(|(score, _)| *score)
        .map(|(_, route)| route.clone())
}
