use super::palette::fade;
use base_bharat_core::starfield::StarField;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

const SHOOTING_TAIL: (u8, u8, u8) = (255, 236, 200);

/// Glyph for a star of the given size and twinkled brightness.
fn star_symbol(size: f64, alpha: f64) -> &'static str {
    match (size > 2.2, alpha > 0.6) {
        (true, true) => "✦",
        (true, false) => "+",
        (false, true) => "·",
        (false, false) => ".",
    }
}

fn cell_at(area: Rect, x: f64, y: f64) -> Option<(u16, u16)> {
    if x < 0.0 || y < 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (col, row) = (x.floor() as u16, y.floor() as u16);
    (col < area.width && row < area.height).then(|| (area.x + col, area.y + row))
}

/// Draws the field behind whatever is rendered afterwards. Only cells with
/// a star are touched.
pub fn render_starfield(stars: &StarField, buf: &mut Buffer, area: Rect) {
    for star in stars.stars() {
        let Some(position) = cell_at(area, star.x, star.y) else {
            continue;
        };
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_symbol(star_symbol(star.size, star.alpha()))
                .set_fg(fade(star.tint.rgb(), star.alpha()));
        }
    }

    for shooting in stars.shooting_stars().iter().filter(|star| star.active) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let tail = (shooting.length / 4.0).clamp(1.0, 8.0) as u16;
        for step in 0..tail {
            let back = f64::from(step);
            let Some(position) = cell_at(area, shooting.x - back * 2.0, shooting.y - back)
            else {
                continue;
            };
            if let Some(cell) = buf.cell_mut(position) {
                let symbol = if step == 0 { "*" } else { "`" };
                cell.set_symbol(symbol)
                    .set_fg(fade(SHOOTING_TAIL, 1.0 - back / f64::from(tail)));
            }
        }
    }
}
