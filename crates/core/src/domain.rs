use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ev,
    Quantum,
    Space,
    Ai,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Ev, Self::Quantum, Self::Space, Self::Ai];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ev => "ev",
            Self::Quantum => "quantum",
            Self::Space => "space",
            Self::Ai => "ai",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Ev => 0,
            Self::Quantum => 1,
            Self::Space => 2,
            Self::Ai => 3,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ev" => Some(Self::Ev),
            "quantum" => Some(Self::Quantum),
            "space" => Some(Self::Space),
            "ai" => Some(Self::Ai),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ev => "EV Market Share",
            Self::Quantum => "Quantum Research Papers",
            Self::Space => "Space Launches",
            Self::Ai => "AI Startups Funded",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Ev => "🚗",
            Self::Quantum => "⚛",
            Self::Space => "🚀",
            Self::Ai => "🧠",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Ev => Self::Quantum,
            Self::Quantum => Self::Space,
            Self::Space => Self::Ai,
            Self::Ai => Self::Ev,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Ev => Self::Ai,
            Self::Quantum => Self::Ev,
            Self::Space => Self::Quantum,
            Self::Ai => Self::Space,
        }
    }
}

/// A challenge on the obstacle course together with the way past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Obstacle {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub solution_title: &'static str,
    pub solution: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryMetric {
    pub name: &'static str,
    pub color: &'static str,
    pub ev: u32,
    pub ev_description: &'static str,
    pub quantum: u32,
    pub quantum_description: &'static str,
    pub space: u32,
    pub space_description: &'static str,
    pub ai: u32,
    pub ai_description: &'static str,
}

impl CountryMetric {
    pub const fn score(&self, category: Category) -> u32 {
        match category {
            Category::Ev => self.ev,
            Category::Quantum => self.quantum,
            Category::Space => self.space,
            Category::Ai => self.ai,
        }
    }

    pub const fn description(&self, category: Category) -> &'static str {
        match category {
            Category::Ev => self.ev_description,
            Category::Quantum => self.quantum_description,
            Category::Space => self.space_description,
            Category::Ai => self.ai_description,
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(self.color).unwrap_or((170, 170, 170))
    }
}

/// One bar of the leaderboard chart for the selected category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pledge {
    pub id: u64,
    pub name: String,
    pub idea: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub brightness: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub title: &'static str,
    pub body: &'static str,
    pub accent: &'static str,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Commitment {
    pub text: &'static str,
    pub color: &'static str,
}

/// Parses `#rrggbb` into its channels.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_cycles_through_all_four() {
        let mut category = Category::Ev;
        for expected in [Category::Quantum, Category::Space, Category::Ai, Category::Ev] {
            category = category.next();
            assert_eq!(category, expected);
        }
        assert_eq!(Category::Ev.prev(), Category::Ai);
    }

    #[test]
    fn category_parse_accepts_ids_case_insensitively() {
        assert_eq!(Category::parse(" Quantum "), Some(Category::Quantum));
        assert_eq!(Category::parse("AI"), Some(Category::Ai));
        assert_eq!(Category::parse("rockets"), None);
    }

    #[test]
    fn category_index_matches_tab_order() {
        for (position, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), position);
        }
    }

    #[test]
    fn hex_colors_parse_and_reject_garbage() {
        assert_eq!(parse_hex_color("#ff9f40"), Some((255, 159, 64)));
        assert_eq!(parse_hex_color("#4795EC"), Some((71, 149, 236)));
        assert_eq!(parse_hex_color("ff9f40"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zz9f40"), None);
    }
}
