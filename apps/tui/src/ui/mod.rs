// UI module for base_bharat
// Lays out header, page body and footer, then draws overlays on top

pub mod screens;
pub mod widgets;

use crate::app::App;
use base_bharat_core::Route;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::Frame;
use tachyonfx::EffectRenderer;

const FULL_HEADER_HEIGHT: u16 = 3;
const COMPACT_HEADER_HEIGHT: u16 = 1;
const FOOTER_HEIGHT: u16 = 2;

/// Header, body and footer areas. The body keeps a two column margin.
pub fn frame_areas(area: Rect, compact_header: bool) -> (Rect, Rect, Rect) {
    let header_height = if compact_header {
        COMPACT_HEADER_HEIGHT
    } else {
        FULL_HEADER_HEIGHT
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1].inner(Margin::new(2, 0)), chunks[2])
}

pub fn body_area(area: Rect, compact_header: bool) -> Rect {
    frame_areas(area, compact_header).1
}

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let (header, body, footer) = frame_areas(f.area(), app.site.is_header_compact());

    widgets::layout::render_header(app, f, header);

    match app.route() {
        Route::Home => screens::home::render_home(app, f, body),
        Route::ObstacleCourse => screens::obstacle_course::render_obstacle_course(app, f, body),
        Route::GlobalLeaderboard => screens::leaderboard::render_leaderboard(app, f, body),
        Route::PledgeWall => screens::pledge_wall::render_pledge_wall(app, f, body),
        Route::NotFound(path) => screens::not_found::render_not_found(app, path, f, body),
    }

    if let Ok(mut effect) = app.transition_fx.lock() {
        if let Some(effect) = effect.as_mut() {
            let buffer = f.buffer_mut();
            buffer.render_effect(effect, body, app.last_tick);
        }
    }

    widgets::layout::render_footer(app, f, footer);

    if app.site.is_menu_open() {
        widgets::layout::render_menu(app, f, body);
    }

    if let Some(input) = &app.goto_input {
        widgets::layout::render_goto_prompt(app, input, f, body);
    }

    if app.show_help {
        screens::help::render_help_popup(f, f.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use std::error::Error;
    use std::time::Duration;

    fn app_at(route: &str) -> App {
        let config = AppConfig {
            start_route: route.to_string(),
            ..AppConfig::default()
        };
        App::new(&config)
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Result<String, Box<dyn Error>> {
        let mut terminal = Terminal::new(TestBackend::new(width, height))?;
        app.resize(Rect::new(0, 0, width, height));
        app.tick(Duration::from_secs(2));
        terminal.draw(|f| ui(app, f))?;
        Ok(buffer_text(terminal.backend().buffer()))
    }

    #[test]
    fn frame_areas_split_the_screen() {
        let (header, body, footer) = frame_areas(Rect::new(0, 0, 80, 24), false);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 2);
        assert_eq!(body.height, 19);
        assert_eq!(body.width, 76);

        let (header, body, _) = frame_areas(Rect::new(0, 0, 80, 24), true);
        assert_eq!(header.height, 1);
        assert_eq!(body.height, 21);
    }

    #[test]
    fn home_renders_the_hero() -> Result<(), Box<dyn Error>> {
        let mut app = app_at("/");
        let text = draw(&mut app, 100, 30)?;
        assert!(text.contains("Base Bharat"));
        assert!(text.contains("Dear Builders of Bharat,"));
        assert!(text.contains("Builders of the Future"));
        Ok(())
    }

    #[test]
    fn leaderboard_renders_every_country() -> Result<(), Box<dyn Error>> {
        let mut app = app_at("/global-leaderboard");
        let text = draw(&mut app, 120, 40)?;
        for name in ["India", "USA", "China", "EU"] {
            assert!(text.contains(name), "missing {name}");
        }
        assert!(text.contains("Global Tech Leaderboard"));
        Ok(())
    }

    #[test]
    fn pledge_wall_lists_starter_pledges() -> Result<(), Box<dyn Error>> {
        let mut app = app_at("/pledge-wall");
        let text = draw(&mut app, 120, 40)?;
        assert!(text.contains("The Pledge Wall"));
        assert!(text.contains("Quantum Bharat"));
        assert!(text.contains("DroneGuru"));
        Ok(())
    }

    #[test]
    fn course_renders_the_first_obstacle() -> Result<(), Box<dyn Error>> {
        let mut app = app_at("/obstacle-course");
        let text = draw(&mut app, 100, 30)?;
        assert!(text.contains("Navigate the Obstacles"));
        assert!(text.contains("Funding Gaps"));
        Ok(())
    }

    #[test]
    fn unknown_route_renders_not_found() -> Result<(), Box<dyn Error>> {
        let mut app = app_at("/rocket-builder");
        let text = draw(&mut app, 100, 30)?;
        assert!(text.contains("404"));
        assert!(text.contains("/rocket-builder"));
        Ok(())
    }

    #[test]
    fn help_popup_draws_over_the_page() -> Result<(), Box<dyn Error>> {
        let mut app = app_at("/");
        app.show_help = true;
        let text = draw(&mut app, 100, 40)?;
        assert!(text.contains("Keyboard Shortcuts"));
        Ok(())
    }

    #[test]
    fn tiny_terminals_do_not_panic() -> Result<(), Box<dyn Error>> {
        for route in ["/", "/obstacle-course", "/global-leaderboard", "/pledge-wall", "/nope"] {
            let mut app = app_at(route);
            draw(&mut app, 12, 6)?;
        }
        Ok(())
    }
}
