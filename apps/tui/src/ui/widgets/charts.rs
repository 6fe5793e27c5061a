use super::palette::{hex, MUTED};
use base_bharat_core::ChartEntry;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

const MIN_BAR_WIDTH: u16 = 3;
const MAX_BAR_WIDTH: u16 = 14;
const BAR_GAP: u16 = 3;

/// Widest bar that lets `count` bars and their gaps fit inside `width`.
pub fn bar_width(width: u16, count: u16) -> u16 {
    if count == 0 {
        return MIN_BAR_WIDTH;
    }
    let gaps = BAR_GAP * count.saturating_sub(1);
    (width.saturating_sub(gaps) / count).clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
}

/// Country bars for one category. `entries` carry the grown values and
/// `max` is the full-height value, so bars scale as they grow.
pub fn render_leaderboard_chart(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    entries: &[ChartEntry],
    max: u32,
) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED));
    let inner = block.inner(area);

    let bars: Vec<Bar<'_>> = entries
        .iter()
        .map(|entry| {
            Bar::default()
                .value(u64::from(entry.value))
                .label(TextLine::from(entry.name))
                .style(Style::default().fg(hex(entry.color)))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(hex(entry.color))
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let count = u16::try_from(entries.len()).unwrap_or(u16::MAX);
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .max(u64::from(max.max(1)))
        .bar_gap(BAR_GAP)
        .bar_width(bar_width(inner.width, count));

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_share_the_width() {
        assert_eq!(bar_width(60, 4), 12);
        assert_eq!(bar_width(200, 4), MAX_BAR_WIDTH);
        assert_eq!(bar_width(8, 4), MIN_BAR_WIDTH);
        assert_eq!(bar_width(8, 0), MIN_BAR_WIDTH);
    }
}
