use base_bharat_core::pages::{DocLine, Document};
use ratatui::layout::Rect;

/// Pairs each visible document line with the single-row area it is drawn
/// into, after its indent.
pub fn visible_rows(
    document: &Document,
    scroll: u32,
    area: Rect,
) -> impl Iterator<Item = (Rect, &DocLine)> {
    document
        .visible(scroll, area.height)
        .iter()
        .zip(area.y..area.bottom())
        .filter_map(move |(line, y)| {
            let indent = line.indent.min(area.width);
            let width = area.width - indent;
            (width > 0).then(|| {
                (
                    Rect {
                        x: area.x + indent,
                        y,
                        width,
                        height: 1,
                    },
                    line,
                )
            })
        })
}
