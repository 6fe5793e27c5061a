use crate::state::WebApp;
use base_bharat_core::animation::frame_index;
use base_bharat_core::data::{self, FOOTER_LINKS, FOOTER_TAGLINE, SITE_TITLE};
use base_bharat_core::domain::parse_hex_color;
use base_bharat_core::pages::{home, Document, FormFocus, LineRole};
use base_bharat_core::router::suggest;
use base_bharat_core::{Category, PledgeField, RevealPhase, Route};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Clear, List, ListItem, Paragraph, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Tabs, Wrap,
    },
    Frame,
};

const SAFFRON: Color = Color::Rgb(255, 153, 51);
const GREEN: Color = Color::Rgb(74, 222, 128);
const MUTED: Color = Color::Rgb(120, 120, 130);
const SPINNER: [&str; 6] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴"];

fn hex(value: &str) -> Color {
    parse_hex_color(value).map_or(Color::Gray, |(r, g, b)| Color::Rgb(r, g, b))
}

fn fade(color: &str, amount: f64) -> Color {
    let (r, g, b) = parse_hex_color(color).unwrap_or((200, 200, 210));
    let scale = |channel: u8| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scaled = (f64::from(channel) * amount.clamp(0.0, 1.0)).round() as u8;
        scaled
    };
    Color::Rgb(scale(r), scale(g), scale(b))
}

/// Header, body and footer rows of the page.
pub fn frame_areas(area: Rect, compact: bool) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if compact { 1 } else { 3 }),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1].inner(Margin::new(2, 0)), chunks[2])
}

pub fn render(app: &WebApp, f: &mut Frame<'_>) {
    let (header, body, footer) = frame_areas(f.area(), app.site.is_header_compact());

    render_header(app, f, header);
    match app.site.route() {
        Route::Home => render_home(app, f, body),
        Route::ObstacleCourse => render_course(app, f, body),
        Route::GlobalLeaderboard => render_leaderboard(app, f, body),
        Route::PledgeWall => render_pledge_wall(app, f, body),
        Route::NotFound(path) => render_not_found(path, f, body),
    }
    render_footer(app, f, footer);

    if app.site.is_menu_open() {
        render_menu(app, f, body);
    }
}

fn render_header(app: &WebApp, f: &mut Frame<'_>, area: Rect) {
    let titles = Route::NAVIGATION
        .iter()
        .enumerate()
        .map(|(index, route)| TextLine::from(format!("{} {}", index + 1, route.label())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.site.route().nav_index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD))
        .divider(Span::raw("|"));

    let block = if app.site.is_header_compact() {
        Block::default()
    } else {
        Block::default()
            .title(Span::styled(
                format!("✦ {SITE_TITLE}"),
                Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(MUTED))
    };
    f.render_widget(tabs.block(block), area);
}

fn render_footer(app: &WebApp, f: &mut Frame<'_>, area: Rect) {
    let year = js_sys::Date::new_0().get_full_year();
    let text = if app.status.is_empty() {
        format!(
            "© {year} {SITE_TITLE} | {FOOTER_TAGLINE}  {}",
            FOOTER_LINKS.join(" · ")
        )
    } else {
        app.status.clone()
    };
    f.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(MUTED))).alignment(Alignment::Center),
        area,
    );
}

fn render_menu(app: &WebApp, f: &mut Frame<'_>, area: Rect) {
    let width = 26.min(area.width);
    let menu = Rect {
        x: area.right().saturating_sub(width),
        y: area.y,
        width,
        height: 6.min(area.height),
    };
    let items = Route::NAVIGATION
        .iter()
        .enumerate()
        .map(|(index, route)| {
            let style = if route == app.site.route() {
                Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{} {}", index + 1, route.label())).style(style)
        })
        .collect::<Vec<_>>();

    f.render_widget(Clear, menu);
    f.render_widget(
        List::new(items).block(Block::default().title("Menu").borders(Borders::ALL)),
        menu,
    );
}

fn render_scrollbar(document: &Document, offset: u32, f: &mut Frame<'_>, area: Rect) {
    let content = usize::try_from(document.max_scroll(area.height)).unwrap_or(0);
    if content == 0 {
        return;
    }
    let mut state = ScrollbarState::new(content).position(usize::try_from(offset).unwrap_or(0));
    f.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight).thumb_style(Style::default().fg(SAFFRON)),
        area,
        &mut state,
    );
}

fn draw_lines(
    document: &Document,
    offset: u32,
    f: &mut Frame<'_>,
    area: Rect,
    style: impl Fn(LineRole, &str) -> Option<TextLine<'static>>,
) {
    for (line, y) in document.visible(offset, area.height).iter().zip(area.y..area.bottom()) {
        let indent = line.indent.min(area.width);
        let row = Rect {
            x: area.x + indent,
            y,
            width: area.width - indent,
            height: 1,
        };
        if let Some(styled) = style(line.role, &line.text) {
            f.render_widget(styled, row);
        }
    }
    render_scrollbar(document, offset, f, area);
}

fn render_home(app: &WebApp, f: &mut Frame<'_>, area: Rect) {
    let buffer = f.buffer_mut();
    for star in app.site.stars().stars() {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (x, y) = (star.x as u16, star.y as u16);
        if x < area.width && y < area.height {
            if let Some(cell) = buffer.cell_mut((area.x + x, area.y + y)) {
                let (r, g, b) = star.tint.rgb();
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let scale = |channel: u8| (f64::from(channel) * star.alpha()) as u8;
                cell.set_symbol("·").set_fg(Color::Rgb(scale(r), scale(g), scale(b)));
            }
        }
    }

    let page = app.site.home();
    let layout = home::layout(app.viewport);
    draw_lines(&layout.document, page.scroll().offset(), f, area, |role, text| {
        let line = match role {
            LineRole::Title => TextLine::styled(
                text.to_string(),
                Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD),
            )
            .centered(),
            LineRole::Subtitle => TextLine::from(text.to_string()).centered(),
            LineRole::Hint => {
                TextLine::styled(text.to_string(), Style::default().fg(MUTED)).centered()
            }
            LineRole::CardTitle { card } | LineRole::CardBody { card } => {
                let progress = page.card_progress(card, app.now);
                if progress <= 0.0 {
                    return None;
                }
                let accent = data::feature_cards().get(card).map_or("#c8c8d2", |c| c.accent);
                let color = if matches!(role, LineRole::CardTitle { .. }) {
                    fade(accent, progress)
                } else {
                    fade("#c8c8d2", progress)
                };
                TextLine::from(vec![
                    Span::styled("▍ ", Style::default().fg(fade(accent, progress))),
                    Span::styled(text.to_string(), Style::default().fg(color)),
                ])
            }
            _ => return None,
        };
        Some(line)
    });
}

fn render_course(app: &WebApp, f: &mut Frame<'_>, area: Rect) {
    let course = app.site.course();
    let layout = course.layout(area.width);
    let spinner = SPINNER[frame_index(app.site.animation_counter(), SPINNER.len())];

    draw_lines(&layout.document, course.scroll().offset(), f, area, |role, text| {
        let line = match role {
            LineRole::Title => TextLine::styled(
                text.to_string(),
                Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD),
            )
            .centered(),
            LineRole::Subtitle => {
                TextLine::styled(text.to_string(), Style::default().fg(Color::Gray)).centered()
            }
            LineRole::ObstacleTitle { index } | LineRole::ObstacleBody { index } => {
                let active = course.obstacle_in_view(index);
                let color = match (active, matches!(role, LineRole::ObstacleTitle { .. })) {
                    (true, true) => SAFFRON,
                    (true, false) => Color::White,
                    (false, _) => MUTED,
                };
                TextLine::from(vec![
                    Span::styled("┃ ", Style::default().fg(if active { SAFFRON } else { MUTED })),
                    Span::styled(text.to_string(), Style::default().fg(color)),
                ])
            }
            LineRole::ObstacleMarker { index } => match course.phase(index) {
                RevealPhase::Hidden => TextLine::styled("┃ · · ·", Style::default().fg(MUTED)),
                RevealPhase::Pending => TextLine::styled(
                    format!("┃ {spinner} Finding a way through..."),
                    Style::default().fg(Color::Yellow),
                ),
                RevealPhase::Revealed => {
                    TextLine::styled("┃ ✔ Solution unlocked", Style::default().fg(GREEN))
                }
            },
            LineRole::SolutionTitle { index } | LineRole::SolutionBody { index } => {
                let color = if course.solution_in_view(index) { GREEN } else { MUTED };
                TextLine::from(vec![
                    Span::styled("│ ", Style::default().fg(GREEN)),
                    Span::styled(text.to_string(), Style::default().fg(color)),
                ])
            }
            _ => return None,
        };
        Some(line)
    });
}

fn render_leaderboard(app: &WebApp, f: &mut Frame<'_>, area: Rect) {
    let board = app.site.leaderboard();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Text::from(vec![
            TextLine::styled(
                data::LEADERBOARD_TITLE,
                Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD),
            ),
            TextLine::styled(data::LEADERBOARD_SUBTITLE, Style::default().fg(Color::Gray)),
        ]))
        .alignment(Alignment::Center),
        chunks[0],
    );

    let titles = Category::ALL
        .iter()
        .map(|category| TextLine::from(format!("{} {}", category.icon(), category.label())))
        .collect::<Vec<_>>();
    f.render_widget(
        Tabs::new(titles)
            .select(board.category().index())
            .highlight_style(Style::default().fg(Color::Black).bg(SAFFRON))
            .divider(Span::raw("|")),
        chunks[1],
    );

    let grown = board.chart(app.now);
    let bars: Vec<Bar<'_>> = grown
        .iter()
        .map(|entry| {
            Bar::default()
                .value(u64::from(entry.value))
                .label(TextLine::from(entry.name))
                .style(Style::default().fg(hex(entry.color)))
                .value_style(Style::default().fg(Color::Black).bg(hex(entry.color)))
        })
        .collect();
    let inner_width = chunks[2].width.saturating_sub(2);
    f.render_widget(
        BarChart::default()
            .block(Block::default().borders(Borders::ALL).title(board.category().label()))
            .data(BarGroup::default().bars(&bars))
            .max(u64::from(board.max_value().max(1)))
            .bar_gap(3)
            .bar_width((inner_width.saturating_sub(9) / 4).clamp(3, 14)),
        chunks[2],
    );

    f.render_widget(
        Paragraph::new(Span::styled(data::LEADERBOARD_DISCLAIMER, Style::default().fg(MUTED)))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center),
        chunks[3],
    );
}

const PLEDGE_ROWS: usize = 2;

fn pledge_columns(area: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    (columns[0], columns[1])
}

/// Pledges the wall list shows at once inside a body of `area`.
pub fn wall_capacity(area: Rect) -> usize {
    let (_, list) = pledge_columns(area);
    (usize::from(list.height.saturating_sub(2)) / PLEDGE_ROWS).max(1)
}

fn render_pledge_wall(app: &WebApp, f: &mut Frame<'_>, area: Rect) {
    let wall = app.site.pledge_wall();
    let (form_area, list_area) = pledge_columns(area);
    let form = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(form_area);

    f.render_widget(
        Paragraph::new(Text::from(vec![
            TextLine::styled(
                data::PLEDGE_TITLE,
                Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD),
            ),
            TextLine::styled(data::PLEDGE_QUOTE, Style::default().fg(Color::Gray)),
        ]))
        .wrap(Wrap { trim: true }),
        form[0],
    );

    for (field, focus, area) in [
        (PledgeField::Name, FormFocus::Name, form[1]),
        (PledgeField::Idea, FormFocus::Idea, form[2]),
    ] {
        let focused = wall.focus() == focus;
        let mut value = wall.form().value(field).to_string();
        if focused && wall.is_editing() {
            value.push('▏');
        }
        let border = if focused { Color::Yellow } else { MUTED };
        f.render_widget(
            Paragraph::new(value).wrap(Wrap { trim: false }).block(
                Block::default()
                    .title(field.label())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            ),
            area,
        );
    }

    if let Some(error) = wall.form().error() {
        f.render_widget(
            Paragraph::new(Span::styled(error.to_string(), Style::default().fg(Color::Red))),
            form[3],
        );
    }

    let submit_style = if wall.focus() == FormFocus::Submit {
        Style::default().fg(Color::Black).bg(SAFFRON)
    } else {
        Style::default().fg(SAFFRON)
    };
    f.render_widget(
        Paragraph::new(Span::styled(" Add Your Pledge ", submit_style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        form[4],
    );

    let commitments = data::commitments()
        .iter()
        .map(|commitment| {
            TextLine::from(vec![
                Span::styled("● ", Style::default().fg(hex(commitment.color))),
                Span::raw(commitment.text),
            ])
        })
        .collect::<Vec<_>>();
    f.render_widget(
        Paragraph::new(commitments)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(data::MOVEMENT_TITLE).borders(Borders::ALL)),
        form[5],
    );

    let pledges = wall.pledges();
    let visible = wall_capacity(area);
    let offset = wall
        .wall_offset()
        .min(pledges.len().saturating_sub(visible));
    let items = pledges
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, pledge)| {
            let selected = wall.focus() == FormFocus::Wall && index == wall.selected();
            let item = ListItem::new(Text::from(vec![
                TextLine::styled(
                    format!("✦ {}", pledge.name),
                    Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD),
                ),
                TextLine::styled(format!("  {}", pledge.idea), Style::default().fg(Color::Gray)),
            ]));
            if selected {
                item.style(Style::default().bg(Color::Rgb(40, 40, 60)))
            } else {
                item
            }
        })
        .collect::<Vec<_>>();
    let list = if items.is_empty() {
        List::new(vec![ListItem::new(data::PLEDGE_EMPTY)])
    } else {
        List::new(items)
    };
    f.render_widget(
        list.block(
            Block::default()
                .title(format!("Wall of Pledges ({})", pledges.len()))
                .borders(Borders::ALL),
        ),
        list_area,
    );

    if let Some(pledge) = wall.modal_pledge() {
        let popup = Rect {
            x: area.x + area.width / 5,
            y: area.y + area.height / 4,
            width: area.width * 3 / 5,
            height: area.height / 2,
        };
        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(pledge.idea.clone()).wrap(Wrap { trim: true }).block(
                Block::default()
                    .title(format!("✦ {}", pledge.name))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(SAFFRON)),
            ),
            popup,
        );
    }
}

fn render_not_found(path: &str, f: &mut Frame<'_>, area: Rect) {
    let mut lines = vec![
        TextLine::styled("404", Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD)),
        TextLine::from(format!("There is no page at {path}")),
        TextLine::from(""),
    ];
    lines.push(match suggest(path) {
        Some(route) => TextLine::from(format!("Enter: go to {}", route.path())),
        None => TextLine::from("Enter: back to Home"),
    });
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area.inner(Margin::new(0, area.height / 3)),
    );
}
