use crate::app::App;
use crate::ui::widgets::palette::{MUTED, SAFFRON};
use crate::ui::widgets::starfield::render_starfield;
use base_bharat_core::router::suggest;
use base_bharat_core::Route;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

fn not_found_lines(path: &str) -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "404",
            Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            "Lost in space",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("There is no page at ", Style::default().fg(Color::Gray)),
            Span::styled(path.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        TextLine::from(""),
    ];

    match suggest(path) {
        Some(route) => lines.push(TextLine::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" go to {} ({})", route.label(), route.path()),
                Style::default().fg(Color::Gray),
            ),
        ])),
        None => lines.push(TextLine::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" back to Home", Style::default().fg(Color::Gray)),
        ])),
    }

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled("Known pages:", Style::default().fg(MUTED))));
    lines.extend(Route::NAVIGATION.iter().map(|route| {
        TextLine::from(Span::styled(
            format!("{} {}  {}", route.icon(), route.label(), route.path()),
            Style::default().fg(MUTED),
        ))
    }));
    lines
}

pub fn render_not_found(app: &App, path: &str, f: &mut Frame<'_>, area: Rect) {
    render_starfield(app.site.stars(), f.buffer_mut(), area);

    let lines = not_found_lines(path);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).min(area.height);
    let top = Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    };

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        top,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[TextLine<'_>]) -> String {
        lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn offers_the_closest_page() {
        let text = plain(&not_found_lines("/leaderboard"));
        assert!(text.contains("/global-leaderboard"));
        assert!(text.contains("go to Global Leaderboard"));
    }

    #[test]
    fn falls_back_to_home() {
        let text = plain(&not_found_lines("/zzzz"));
        assert!(text.contains("back to Home"));
    }
}
