use super::palette::{FAINT, MUTED, SAFFRON};
use super::popup::{centered_box, ClearWidget};
use crate::app::App;
use base_bharat_core::data::{FOOTER_LINKS, FOOTER_TAGLINE, SITE_TITLE};
use base_bharat_core::Route;
use chrono::Datelike;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Tabs};
use ratatui::Frame;

/// Below this width the navigation tabs collapse into the menu hint.
pub const NARROW_WIDTH: u16 = 72;

const TITLE_WIDTH: u16 = 16;

/// Blinking block cursor for text inputs.
pub fn cursor(app: &App) -> &'static str {
    if (app.site.animation_counter() * 2.0).sin() > 0.0 {
        "█"
    } else {
        " "
    }
}

fn title_span() -> Span<'static> {
    Span::styled(
        format!("✦ {SITE_TITLE}"),
        Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD),
    )
}

fn nav_tabs(route: &Route) -> Tabs<'static> {
    let titles = Route::NAVIGATION
        .iter()
        .enumerate()
        .map(|(index, route)| {
            TextLine::from(format!("{} {} {}", index + 1, route.icon(), route.label()))
        })
        .collect::<Vec<_>>();

    Tabs::new(titles)
        .select(route.nav_index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(SAFFRON)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::raw("|"))
}

fn menu_hint() -> Paragraph<'static> {
    Paragraph::new(TextLine::from(vec![
        Span::styled("m", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled(": menu", Style::default().fg(MUTED)),
    ]))
    .alignment(Alignment::Right)
}

pub fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let narrow = area.width < NARROW_WIDTH;

    if app.site.is_header_compact() {
        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(TITLE_WIDTH), Constraint::Min(1)])
            .split(area);
        f.render_widget(Paragraph::new(TextLine::from(title_span())), row[0]);
        if narrow {
            f.render_widget(menu_hint(), row[1]);
        } else {
            f.render_widget(nav_tabs(app.route()), row[1]);
        }
        return;
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(FAINT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let mut title = vec![title_span()];
    if app.animation_paused() {
        title.push(Span::styled("  ⏸ paused", Style::default().fg(MUTED)));
    }
    f.render_widget(Paragraph::new(TextLine::from(title)), rows[0]);

    if narrow {
        f.render_widget(menu_hint(), rows[1]);
    } else {
        f.render_widget(nav_tabs(app.route()), rows[1]);
    }
}

fn status_line(app: &App) -> TextLine<'static> {
    if app.status_message.is_empty() {
        return TextLine::from(Span::styled(
            "1-4 pages · Tab next · ↑↓ scroll · g go to · m menu · Space pause · ? help · q quit",
            Style::default().fg(MUTED),
        ));
    }

    let color = if app.status_message.starts_with("Error") {
        Color::Red
    } else {
        Color::Green
    };
    TextLine::from(Span::styled(app.status_message.clone(), Style::default().fg(color)))
}

pub fn footer_text(year: i32) -> String {
    format!(
        "© {year} {SITE_TITLE} | {FOOTER_TAGLINE}    {}",
        FOOTER_LINKS.join(" · ")
    )
}

pub fn render_footer(app: &App, f: &mut Frame<'_>, area: Rect) {
    let year = chrono::Local::now().year();
    let text = Text::from(vec![
        status_line(app),
        TextLine::from(Span::styled(footer_text(year), Style::default().fg(FAINT))),
    ]);
    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

/// Drop-down list of pages anchored to the top right of the body.
pub fn render_menu(app: &App, f: &mut Frame<'_>, area: Rect) {
    let width = 28.min(area.width);
    let height = (u16::try_from(Route::NAVIGATION.len()).unwrap_or(4) + 2).min(area.height);
    let menu_area = Rect {
        x: area.right().saturating_sub(width),
        y: area.y,
        width,
        height,
    };
    f.render_widget(ClearWidget, menu_area);

    let items: Vec<ListItem<'_>> = Route::NAVIGATION
        .iter()
        .enumerate()
        .map(|(index, route)| {
            let style = if index == app.menu_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(SAFFRON)
                    .add_modifier(Modifier::BOLD)
            } else if route == app.route() {
                Style::default().fg(SAFFRON)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!(" {} {}", route.icon(), route.label())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("Menu")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SAFFRON)),
    );
    f.render_widget(list, menu_area);
}

pub fn render_goto_prompt(app: &App, input: &str, f: &mut Frame<'_>, area: Rect) {
    let prompt_area = centered_box(50, 3, area);
    f.render_widget(ClearWidget, prompt_area);

    let line = TextLine::from(vec![
        Span::styled(input.to_string(), Style::default().fg(Color::White)),
        Span::styled(cursor(app), Style::default().fg(SAFFRON)),
    ]);
    let prompt = Paragraph::new(line).block(
        Block::default()
            .title("Go to path (Enter to open, Esc to cancel)")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(prompt, prompt_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_carries_year_and_links() {
        let text = footer_text(2026);
        assert!(text.starts_with("© 2026 Base Bharat | Builders of the Future"));
        assert!(text.ends_with("Terms · Privacy · Contact"));
    }
}
