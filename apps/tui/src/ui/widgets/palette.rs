use base_bharat_core::domain::parse_hex_color;
use ratatui::style::Color;

pub const SAFFRON: Color = Color::Rgb(255, 153, 51);
pub const INDIA_GREEN: Color = Color::Rgb(19, 136, 8);
pub const SOLUTION_GREEN: Color = Color::Rgb(74, 222, 128);
pub const CHAKRA_BLUE: Color = Color::Rgb(96, 165, 250);
pub const MUTED: Color = Color::Rgb(120, 120, 130);
pub const FAINT: Color = Color::Rgb(70, 70, 80);

pub const fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Converts a `#rrggbb` string, falling back to gray for anything else.
pub fn hex(value: &str) -> Color {
    parse_hex_color(value).map_or(Color::Gray, rgb)
}

/// Mixes `color` towards black; `amount` of 1.0 keeps the full color.
pub fn fade((r, g, b): (u8, u8, u8), amount: f64) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    let scale = |channel: u8| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scaled = (f64::from(channel) * amount).round() as u8;
        scaled
    };
    Color::Rgb(scale(r), scale(g), scale(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse_or_fall_back() {
        assert_eq!(hex("#ff9933"), SAFFRON);
        assert_eq!(hex("saffron"), Color::Gray);
    }

    #[test]
    fn fading_scales_towards_black() {
        assert_eq!(fade((200, 100, 50), 1.0), Color::Rgb(200, 100, 50));
        assert_eq!(fade((200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(fade((200, 100, 50), -1.0), Color::Rgb(0, 0, 0));
    }
}
