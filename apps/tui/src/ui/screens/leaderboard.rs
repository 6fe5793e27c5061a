use crate::app::App;
use crate::ui::widgets::charts::render_leaderboard_chart;
use crate::ui::widgets::palette::{fade, MUTED, SAFFRON};
use base_bharat_core::data::{LEADERBOARD_DISCLAIMER, LEADERBOARD_SUBTITLE, LEADERBOARD_TITLE};
use base_bharat_core::domain::parse_hex_color;
use base_bharat_core::{Category, ChartEntry};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

const CARD_HEIGHT: u16 = 7;

fn category_tabs(selected: Category) -> Tabs<'static> {
    let titles = Category::ALL
        .iter()
        .map(|category| TextLine::from(format!("{} {}", category.icon(), category.label())))
        .collect::<Vec<_>>();

    Tabs::new(titles)
        .select(selected.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(SAFFRON)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"))
}

fn render_country_card(f: &mut Frame<'_>, area: Rect, entry: &ChartEntry, shown: u32, growth: f64) {
    let rgb = parse_hex_color(entry.color).unwrap_or((170, 170, 170));
    let block = Block::default()
        .title(Span::styled(
            entry.name,
            Style::default().fg(fade(rgb, growth.max(0.4))).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(fade(rgb, growth.max(0.3))));

    let text = Text::from(vec![
        TextLine::from(Span::styled(
            shown.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(entry.description, Style::default().fg(MUTED))),
    ]);

    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

pub fn render_leaderboard(app: &App, f: &mut Frame<'_>, area: Rect) {
    let board = app.site.leaderboard();
    let category = board.category();
    let entries = board.entries();
    let grown = board.chart(app.now);
    let growth = board.growth(app.now);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Length(2),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            LEADERBOARD_TITLE,
            Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(LEADERBOARD_SUBTITLE, Style::default().fg(Color::Gray)))
            .alignment(Alignment::Center),
        chunks[1],
    );
    f.render_widget(category_tabs(category), chunks[2]);
    f.render_widget(
        Paragraph::new(Span::styled(
            "←/→ switch category · Enter replay",
            Style::default().fg(MUTED),
        )),
        chunks[3],
    );

    let title = format!(" {} {} ", category.icon(), category.label());
    render_leaderboard_chart(f, chunks[4], &title, &grown, board.max_value());

    let count = u32::try_from(entries.len().max(1)).unwrap_or(1);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); entries.len()])
        .split(chunks[5]);
    for ((entry, shown), card) in entries.iter().zip(&grown).zip(cards.iter()) {
        render_country_card(f, *card, entry, shown.value, growth);
    }

    f.render_widget(
        Paragraph::new(Span::styled(LEADERBOARD_DISCLAIMER, Style::default().fg(MUTED)))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center),
        chunks[6],
    );
}
