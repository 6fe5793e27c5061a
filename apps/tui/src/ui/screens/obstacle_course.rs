use crate::app::App;
use crate::ui::widgets::document::visible_rows;
use crate::ui::widgets::palette::{FAINT, MUTED, SAFFRON, SOLUTION_GREEN};
use base_bharat_core::animation::frame_index;
use base_bharat_core::pages::{CoursePage, LineRole};
use base_bharat_core::RevealPhase;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState, WhichUse, BRAILLE_SIX};

const SEARCHING: &str = "Finding a way through...";
const UNLOCKED: &str = "✔ Solution unlocked";

fn gutter(active: bool) -> Span<'static> {
    let color = if active { SAFFRON } else { FAINT };
    Span::styled("┃ ", Style::default().fg(color))
}

fn obstacle_line(course: &CoursePage, role: LineRole, text: &str) -> Option<TextLine<'static>> {
    let line = match role {
        LineRole::ObstacleTitle { index } => {
            let active = course.obstacle_in_view(index);
            let style = if active {
                Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED).add_modifier(Modifier::BOLD)
            };
            TextLine::from(vec![gutter(active), Span::styled(text.to_string(), style)])
        }
        LineRole::ObstacleBody { index } => {
            let active = course.obstacle_in_view(index);
            let color = if active { Color::White } else { MUTED };
            TextLine::from(vec![
                gutter(active),
                Span::styled(text.to_string(), Style::default().fg(color)),
            ])
        }
        LineRole::ObstacleMarker { index } => {
            let active = course.obstacle_in_view(index);
            match course.phase(index) {
                RevealPhase::Revealed => TextLine::from(vec![
                    gutter(active),
                    Span::styled(UNLOCKED, Style::default().fg(SOLUTION_GREEN)),
                ]),
                // Drawn by the throbber once the rest of the page is down.
                RevealPhase::Pending => return None,
                RevealPhase::Hidden => TextLine::from(vec![
                    gutter(active),
                    Span::styled("· · ·", Style::default().fg(FAINT)),
                ]),
            }
        }
        LineRole::SolutionTitle { index } => {
            let style = if course.solution_in_view(index) {
                Style::default().fg(SOLUTION_GREEN).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(FAINT)
            };
            TextLine::from(vec![
                Span::styled("│ ", Style::default().fg(SOLUTION_GREEN)),
                Span::styled(text.to_string(), style),
            ])
        }
        LineRole::SolutionBody { index } => {
            let color = if course.solution_in_view(index) {
                Color::Rgb(187, 247, 208)
            } else {
                FAINT
            };
            TextLine::from(vec![
                Span::styled("│ ", Style::default().fg(SOLUTION_GREEN)),
                Span::styled(text.to_string(), Style::default().fg(color)),
            ])
        }
        LineRole::Title => TextLine::styled(
            text.to_string(),
            Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD),
        )
        .centered(),
        LineRole::Subtitle => {
            TextLine::styled(text.to_string(), Style::default().fg(Color::Gray)).centered()
        }
        _ => TextLine::from(text.to_string()),
    };
    Some(line)
}

pub fn render_obstacle_course(app: &App, f: &mut Frame<'_>, area: Rect) {
    let course = app.site.course();
    let page = course.layout(area.width);
    let mut pending = Vec::new();

    for (rect, line) in visible_rows(&page.document, course.scroll().offset(), area) {
        match obstacle_line(course, line.role, &line.text) {
            Some(styled) => f.render_widget(styled, rect),
            None => pending.push(rect),
        }
    }

    let step = frame_index(app.site.animation_counter(), BRAILLE_SIX.symbols.len());
    for rect in pending {
        let mut state = ThrobberState::default();
        state.calc_step(i8::try_from(step).unwrap_or(0));
        let throbber = Throbber::default()
            .label(SEARCHING)
            .style(Style::default().fg(Color::Yellow))
            .throbber_style(Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD))
            .throbber_set(BRAILLE_SIX)
            .use_type(WhichUse::Spin);
        f.render_widget(TextLine::from(gutter(true)), rect);
        let spinner = Rect {
            x: rect.x.saturating_add(2),
            width: rect.width.saturating_sub(2),
            ..rect
        };
        f.render_stateful_widget(throbber, spinner, &mut state);
    }
}
