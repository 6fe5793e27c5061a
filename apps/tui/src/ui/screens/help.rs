use crate::cli::CliArgs;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const SHORTCUTS: [(&str, &str); 15] = [
    ("?/F1", "Toggle this help popup"),
    ("1-4", "Jump to Home, Obstacle Course, Leaderboard, Pledge Wall"),
    ("Tab", "Next page (Shift+Tab for previous)"),
    ("m", "Open the navigation menu"),
    ("g", "Go to a path, e.g. /pledge-wall"),
    ("Space", "Pause/resume animations"),
    ("↑/↓ j/k", "Scroll the page"),
    ("PgUp/PgDn", "Scroll a screen at a time"),
    ("Home/End", "Jump to the top or bottom"),
    ("←/→", "Switch leaderboard category"),
    ("Enter", "Activate: replay chart, edit field, submit, open pledge"),
    ("Tab/↓", "Next field while typing a pledge"),
    ("Esc", "Stop typing / close a popup"),
    ("q", "Quit"),
    ("Backspace", "Delete a character"),
];

fn key_line(key: &str, description: &str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key}"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" - {description}"), Style::default()),
    ])
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(vec![Span::styled(
            "Base Bharat",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]),
        TextLine::from(""),
        TextLine::from(
            "A tour of India's deep-tech journey: the obstacles, the solutions, how India compares and the pledges of its builders.",
        ),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
    ];

    lines.extend(SHORTCUTS.iter().map(|(key, description)| key_line(key, description)));

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(vec![Span::styled(
        "Command Line:",
        Style::default().add_modifier(Modifier::BOLD),
    )]));
    lines.extend(CliArgs::help_text().lines().map(|line| TextLine::from(line.to_string())));
    lines
}

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(80, 80, area);
    f.render_widget(ClearWidget, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(Text::from(TextLine::from(vec![Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::Gray),
    )])))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };

    f.render_widget(hint, hint_area);
}
