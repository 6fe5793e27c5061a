use crate::app::App;
use base_bharat_core::animation::BAR_GROWTH;
use base_bharat_core::data::{self, LEADERBOARD_TITLE, PLEDGE_TITLE, SITE_TITLE};
use base_bharat_core::pages::{home, Document, LineRole};
use base_bharat_core::router::suggest;
use base_bharat_core::{Category, ChartEntry, Pledge, RevealPhase, Route};
use ratatui::layout::Rect;
use serde::Serialize;
use std::time::Duration;

/// Terminal size headless runs lay pages out for.
pub const HEADLESS_AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

const SETTLE_STEP: Duration = Duration::from_millis(100);

/// Ticks the app forward until pending reveals and growth animations have
/// played out for `reveal_delay`.
pub fn settle(app: &mut App, reveal_delay: Duration) {
    app.resize(HEADLESS_AREA);
    let until = app.now + reveal_delay + BAR_GROWTH + SETTLE_STEP;
    let mut now = app.now;
    app.tick(now);
    while now < until {
        now += SETTLE_STEP;
        app.tick(now);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObstacleState {
    pub id: &'static str,
    pub title: &'static str,
    pub phase: RevealPhase,
}

/// What the current page shows, for printing without a terminal.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub route: Route,
    pub title: String,
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub obstacles: Vec<ObstacleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chart: Vec<ChartEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pledges: Vec<Pledge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

fn document_lines(document: &Document, marker: impl Fn(usize) -> &'static str) -> Vec<String> {
    let mut lines: Vec<String> = document
        .lines
        .iter()
        .map(|line| {
            let text = match line.role {
                LineRole::ObstacleMarker { index } => marker(index),
                _ => line.text.as_str(),
            };
            let indent = " ".repeat(usize::from(line.indent));
            format!("{indent}{text}").trim_end().to_string()
        })
        .skip_while(String::is_empty)
        .collect();

    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

impl Snapshot {
    fn empty(route: &Route, title: &str) -> Self {
        Self {
            route: route.clone(),
            title: title.to_string(),
            lines: Vec::new(),
            obstacles: Vec::new(),
            category: None,
            chart: Vec::new(),
            pledges: Vec::new(),
            suggestion: None,
        }
    }

    pub fn capture(app: &App) -> Self {
        let route = app.route();
        let width = app.viewport.width;

        match route {
            Route::Home => {
                let mut snapshot = Self::empty(route, SITE_TITLE);
                snapshot.lines = document_lines(&home::layout(app.viewport).document, |_| "");
                snapshot
            }
            Route::ObstacleCourse => {
                let course = app.site.course();
                let mut snapshot = Self::empty(route, data::COURSE_TITLE);
                snapshot.lines = document_lines(&course.layout(width).document, |index| {
                    match course.phase(index) {
                        RevealPhase::Hidden => "",
                        RevealPhase::Pending => "Finding a way through...",
                        RevealPhase::Revealed => "✔ Solution unlocked",
                    }
                });
                snapshot.obstacles = data::obstacles()
                    .iter()
                    .enumerate()
                    .map(|(index, obstacle)| ObstacleState {
                        id: obstacle.id,
                        title: obstacle.title,
                        phase: course.phase(index),
                    })
                    .collect();
                snapshot
            }
            Route::GlobalLeaderboard => {
                let board = app.site.leaderboard();
                let category = board.category();
                let mut snapshot = Self::empty(route, LEADERBOARD_TITLE);
                snapshot.category = Some(category);
                snapshot.chart = board.entries();
                snapshot.lines = std::iter::once(format!("{} {}", category.icon(), category.label()))
                    .chain(snapshot.chart.iter().map(|entry| {
                        format!("{:<6} {:>5}  {}", entry.name, entry.value, entry.description)
                    }))
                    .collect();
                snapshot
            }
            Route::PledgeWall => {
                let mut snapshot = Self::empty(route, PLEDGE_TITLE);
                snapshot.pledges = app.site.pledge_wall().pledges().to_vec();
                snapshot.lines = snapshot
                    .pledges
                    .iter()
                    .map(|pledge| format!("✦ {}: {}", pledge.name, pledge.idea))
                    .collect();
                snapshot
            }
            Route::NotFound(path) => {
                let mut snapshot = Self::empty(route, "404");
                snapshot.suggestion = suggest(path).map(|route| route.path().to_string());
                snapshot.lines = vec![format!("There is no page at {path}")];
                if let Some(suggestion) = &snapshot.suggestion {
                    snapshot.lines.push(format!("Did you mean {suggestion}?"));
                }
                snapshot
            }
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n{}\n", self.title, "=".repeat(self.title.chars().count()));
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }

        if !self.obstacles.is_empty() {
            out.push_str("\nObstacles:\n");
            for obstacle in &self.obstacles {
                out.push_str(&format!("- {}: {}\n", obstacle.title, obstacle.phase));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use base_bharat_core::reveal::DEFAULT_REVEAL_DELAY;

    fn settled(route: &str) -> App {
        let config = AppConfig {
            start_route: route.to_string(),
            ..AppConfig::default()
        };
        let mut app = App::new(&config);
        settle(&mut app, DEFAULT_REVEAL_DELAY);
        app
    }

    #[test]
    fn course_snapshot_reports_revealed_obstacles() {
        let snapshot = Snapshot::capture(&settled("/obstacle-course"));
        assert_eq!(snapshot.obstacles.len(), 5);
        assert_eq!(snapshot.obstacles[0].id, "funding");
        assert_eq!(snapshot.obstacles[0].phase, RevealPhase::Revealed);

        let text = snapshot.to_text();
        assert!(text.starts_with("Navigate the Obstacles\n======"));
        assert!(text.contains("✔ Solution unlocked"));
        assert!(text.contains("- Funding Gaps: Revealed"));
    }

    #[test]
    fn leaderboard_snapshot_carries_full_values() {
        let snapshot = Snapshot::capture(&settled("/global-leaderboard"));
        assert_eq!(snapshot.category, Some(Category::Ev));
        assert_eq!(snapshot.chart.len(), 4);
        assert_eq!(snapshot.chart[0].name, "India");
        assert!(snapshot.lines[0].contains("EV"));
    }

    #[test]
    fn not_found_snapshot_suggests_a_route() {
        let snapshot = Snapshot::capture(&settled("/pledge"));
        assert_eq!(snapshot.suggestion.as_deref(), Some("/pledge-wall"));
    }

    #[test]
    fn json_omits_empty_sections() -> Result<(), serde_json::Error> {
        let snapshot = Snapshot::capture(&settled("/pledge-wall"));
        let json = serde_json::to_value(&snapshot)?;
        assert_eq!(json["route"]["page"], "pledge-wall");
        assert_eq!(json["pledges"].as_array().map(Vec::len), Some(5));
        assert!(json.get("chart").is_none());
        Ok(())
    }

    #[test]
    fn home_snapshot_trims_blank_padding() {
        let snapshot = Snapshot::capture(&settled("/"));
        assert_eq!(snapshot.lines.first().map(String::as_str), Some("Dear Builders of Bharat,"));
        assert!(snapshot.lines.last().is_some_and(|line| !line.is_empty()));
    }
}
