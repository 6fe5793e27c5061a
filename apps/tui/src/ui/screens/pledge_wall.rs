use crate::app::App;
use crate::ui::widgets::layout::cursor;
use crate::ui::widgets::palette::{hex, CHAKRA_BLUE, INDIA_GREEN, MUTED, SAFFRON};
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use base_bharat_core::data::{self, MOVEMENT_INTRO, MOVEMENT_TITLE, PLEDGE_EMPTY, PLEDGE_INVITE, PLEDGE_QUOTE, PLEDGE_TITLE};
use base_bharat_core::pages::{FormFocus, PledgeWallPage};
use base_bharat_core::{Pledge, PledgeField};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

const SIDE_BY_SIDE_WIDTH: u16 = 80;
const PLEDGE_ROWS: usize = 3;
const PLEDGE_COLORS: [Color; 3] = [SAFFRON, Color::White, INDIA_GREEN];

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(MUTED)
    }
}

fn render_field(app: &App, f: &mut Frame<'_>, area: Rect, field: PledgeField, focus: FormFocus) {
    let wall = app.site.pledge_wall();
    let focused = wall.focus() == focus;
    let editing = focused && wall.is_editing();
    let value = wall.form().value(field);

    let mut spans = if value.is_empty() && !editing {
        vec![Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))]
    } else {
        vec![Span::styled(value.to_string(), Style::default().fg(Color::White))]
    };
    if editing {
        spans.push(Span::styled(cursor(app), Style::default().fg(SAFFRON)));
    }

    let count = value.chars().count();
    let block = Block::default()
        .title(field.label())
        .title_bottom(TextLine::from(format!("{count}/{}", field.max_chars())).right_aligned())
        .borders(Borders::ALL)
        .border_style(focus_style(focused));

    f.render_widget(
        Paragraph::new(TextLine::from(spans))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_submit(wall: &PledgeWallPage, f: &mut Frame<'_>, area: Rect) {
    let focused = wall.focus() == FormFocus::Submit;
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(SAFFRON)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD)
    };

    f.render_widget(
        Paragraph::new(Span::styled(" Add Your Pledge ", style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(focus_style(focused)),
            ),
        area,
    );
}

fn render_movement(f: &mut Frame<'_>, area: Rect) {
    let mut lines = vec![
        TextLine::from(Span::styled(MOVEMENT_INTRO, Style::default().fg(Color::Gray))),
        TextLine::from(""),
    ];
    lines.extend(data::commitments().iter().map(|commitment| {
        TextLine::from(vec![
            Span::styled("● ", Style::default().fg(hex(commitment.color))),
            Span::raw(commitment.text),
        ])
    }));

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(
                        MOVEMENT_TITLE,
                        Style::default().fg(CHAKRA_BLUE).add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(MUTED)),
            ),
        area,
    );
}

fn render_form(app: &App, f: &mut Frame<'_>, area: Rect) {
    let wall = app.site.pledge_wall();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            PLEDGE_QUOTE,
            Style::default().fg(SAFFRON).add_modifier(Modifier::ITALIC),
        ))
        .wrap(Wrap { trim: true }),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(PLEDGE_INVITE, Style::default().fg(Color::Gray)))
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    render_field(app, f, chunks[2], PledgeField::Name, FormFocus::Name);
    render_field(app, f, chunks[3], PledgeField::Idea, FormFocus::Idea);

    if let Some(error) = wall.form().error() {
        f.render_widget(
            Paragraph::new(Span::styled(error.to_string(), Style::default().fg(Color::Red))),
            chunks[4],
        );
    }

    render_submit(wall, f, chunks[5]);
    render_movement(f, chunks[6]);
}

fn pledge_item(pledge: &Pledge, index: usize, width: u16, highlighted: bool) -> ListItem<'static> {
    let color = PLEDGE_COLORS[index % PLEDGE_COLORS.len()];
    let width = usize::from(width.saturating_sub(4));
    let mut idea: String = pledge.idea.chars().take(width).collect();
    if pledge.idea.chars().count() > width && width > 3 {
        idea = idea.chars().take(width - 3).collect::<String>() + "...";
    }

    let item = ListItem::new(Text::from(vec![
        TextLine::from(vec![
            Span::styled("✦ ", Style::default().fg(color)),
            Span::styled(
                pledge.name.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(Span::styled(format!("  {idea}"), Style::default().fg(Color::Gray))),
        TextLine::from(""),
    ]));

    if highlighted {
        item.style(Style::default().bg(Color::Rgb(40, 40, 60)))
    } else {
        item
    }
}

fn render_wall(app: &App, f: &mut Frame<'_>, area: Rect) {
    let wall = app.site.pledge_wall();
    let pledges = wall.pledges();
    let focused = wall.focus() == FormFocus::Wall;

    let block = Block::default()
        .title(format!("Wall of Pledges ({})", pledges.len()))
        .title_bottom(TextLine::from("Enter: open pledge").right_aligned())
        .borders(Borders::ALL)
        .border_style(focus_style(focused));
    let inner = block.inner(area);

    if pledges.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(PLEDGE_EMPTY, Style::default().fg(MUTED)))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    let visible = (usize::from(inner.height) / PLEDGE_ROWS).max(1);
    let offset = wall
        .wall_offset()
        .min(pledges.len().saturating_sub(visible));

    let items: Vec<ListItem<'_>> = pledges
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, pledge)| {
            pledge_item(pledge, index, inner.width, focused && index == wall.selected())
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn render_modal(pledge: &Pledge, f: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(60, 50, area);
    f.render_widget(ClearWidget, popup);

    let text = Text::from(vec![
        TextLine::from(""),
        TextLine::from(Span::styled(pledge.idea.clone(), Style::default().fg(Color::White))),
        TextLine::from(""),
        TextLine::from(Span::styled(
            format!("Pledge #{}", pledge.id),
            Style::default().fg(MUTED),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled("Press Esc to close", Style::default().fg(Color::Gray))),
    ]);

    f.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(Span::styled(
                    format!(" ✦ {} ", pledge.name),
                    Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(SAFFRON)),
        ),
        popup,
    );
}

/// Title row, form and wall list of the page.
fn page_areas(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let columns = if area.width >= SIDE_BY_SIDE_WIDTH {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[1])
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(20), Constraint::Min(3)])
            .split(rows[1])
    };

    (rows[0], columns[0], columns[1])
}

/// Pledges the wall list shows at once inside a page of `area`.
pub fn wall_capacity(area: Rect) -> usize {
    let (_, _, wall) = page_areas(area);
    (usize::from(wall.height.saturating_sub(2)) / PLEDGE_ROWS).max(1)
}

pub fn render_pledge_wall(app: &App, f: &mut Frame<'_>, area: Rect) {
    let (title, form, wall) = page_areas(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            PLEDGE_TITLE,
            Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        title,
    );

    render_form(app, f, form);
    render_wall(app, f, wall);

    if let Some(pledge) = app.site.pledge_wall().modal_pledge() {
        render_modal(pledge, f, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_capacity_follows_the_layout() {
        assert_eq!(wall_capacity(Rect::new(0, 0, 96, 22)), 6);
        assert_eq!(wall_capacity(Rect::new(0, 0, 60, 30)), 2);
        assert_eq!(wall_capacity(Rect::new(0, 0, 60, 10)), 1);
    }
}
