use crate::app::App;
use crate::ui::widgets::document::visible_rows;
use crate::ui::widgets::palette::{fade, MUTED, SAFFRON};
use crate::ui::widgets::starfield::render_starfield;
use base_bharat_core::data;
use base_bharat_core::domain::parse_hex_color;
use base_bharat_core::pages::home::layout;
use base_bharat_core::pages::{LineRole, Viewport};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::Frame;

const CARD_BODY: (u8, u8, u8) = (200, 200, 210);

pub fn render_home(app: &App, f: &mut Frame<'_>, area: Rect) {
    render_starfield(app.site.stars(), f.buffer_mut(), area);

    let home = app.site.home();
    let page = layout(Viewport::new(area.width, area.height));
    let hint_lit = (app.site.animation_counter() * 1.5).sin() > -0.3;

    for (rect, line) in visible_rows(&page.document, home.scroll().offset(), area) {
        let styled = match line.role {
            LineRole::Title => TextLine::styled(
                line.text.clone(),
                Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD),
            )
            .centered(),
            LineRole::Subtitle => {
                TextLine::styled(line.text.clone(), Style::default().fg(Color::White)).centered()
            }
            LineRole::Hint => {
                let color = if hint_lit { MUTED } else { Color::DarkGray };
                TextLine::styled(line.text.clone(), Style::default().fg(color)).centered()
            }
            LineRole::CardTitle { card } | LineRole::CardBody { card } => {
                let progress = home.card_progress(card, app.now);
                if progress <= 0.0 {
                    continue;
                }
                let accent = data::feature_cards()
                    .get(card)
                    .and_then(|feature| parse_hex_color(feature.accent))
                    .unwrap_or(CARD_BODY);
                let text_style = if matches!(line.role, LineRole::CardTitle { .. }) {
                    Style::default()
                        .fg(fade(accent, progress))
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(fade(CARD_BODY, progress))
                };
                TextLine::from(vec![
                    Span::styled("▍ ", Style::default().fg(fade(accent, progress))),
                    Span::styled(line.text.clone(), text_style),
                ])
            }
            _ => TextLine::from(line.text.clone()),
        };
        f.render_widget(styled, rect);
    }
}
