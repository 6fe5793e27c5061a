use super::{Document, LineRole, Scroll, Viewport};
use crate::animation::ease_out;
use crate::data::{self, HERO_SUBTITLE, HERO_TITLE};
use crate::visibility::{Extent, VisibilityConfig, VisibilityDetector};
use std::time::Duration;

pub const SCROLL_HINT: &str = "Scroll to Explore \u{2193}";

/// Feature cards appear once, as soon as any row clears two rows of the
/// viewport.
pub const CARD_VISIBILITY: VisibilityConfig = VisibilityConfig::new(0.0, true).with_margin(2);

const CARD_FADE: Duration = Duration::from_millis(600);
const CARD_INSET: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeLayout {
    pub document: Document,
    pub hero: Extent,
    pub cards: Vec<Extent>,
}

/// The hero takes at least four fifths of the viewport, with its content
/// centred inside.
pub fn layout(viewport: Viewport) -> HomeLayout {
    let width = viewport.width;
    let mut hero_content = Document::default();
    for line in HERO_TITLE {
        hero_content.push_wrapped(line, width, 0, LineRole::Title);
    }
    hero_content.push_blank(1);
    hero_content.push_wrapped(HERO_SUBTITLE, width, 0, LineRole::Subtitle);
    hero_content.push_blank(1);
    hero_content.push_wrapped(SCROLL_HINT, width, 0, LineRole::Hint);

    let hero_rows = hero_content
        .rows()
        .max(u32::from(viewport.height) * 4 / 5);
    let padding = hero_rows - hero_content.rows();
    let above = usize::try_from(padding / 2).unwrap_or(0);
    let below = usize::try_from(padding - padding / 2).unwrap_or(0);

    let mut document = Document::default();
    document.push_blank(above);
    document.lines.extend(hero_content.lines);
    document.push_blank(below);
    let hero = Extent::new(0, document.rows());

    let text_width = width.saturating_sub(CARD_INSET * 2);
    let cards = data::feature_cards()
        .iter()
        .enumerate()
        .map(|(card, feature)| {
            let start = document.rows();
            document.push_wrapped(feature.title, text_width, CARD_INSET, LineRole::CardTitle { card });
            document.push_wrapped(feature.body, text_width, CARD_INSET, LineRole::CardBody { card });
            let extent = Extent::new(start, document.rows() - start);
            document.push_blank(1);
            extent
        })
        .collect();

    HomeLayout {
        document,
        hero,
        cards,
    }
}

#[derive(Debug, Clone)]
pub struct HomePage {
    cards: Vec<VisibilityDetector>,
    seen_at: Vec<Option<Duration>>,
    scroll: Scroll,
    max_scroll: u32,
}

impl HomePage {
    pub fn new() -> Self {
        let count = data::feature_cards().len();
        Self {
            cards: vec![VisibilityDetector::new(CARD_VISIBILITY); count],
            seen_at: vec![None; count],
            scroll: Scroll::default(),
            max_scroll: 0,
        }
    }

    pub const fn scroll(&self) -> Scroll {
        self.scroll
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll.scroll_by(delta, self.max_scroll);
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll.scroll_to(self.max_scroll, self.max_scroll);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.scroll_to(0, self.max_scroll);
    }

    pub fn card_in_view(&self, index: usize) -> bool {
        self.cards.get(index).is_some_and(VisibilityDetector::in_view)
    }

    /// Fade-in progress of a card, honouring its stagger delay.
    pub fn card_progress(&self, index: usize, now: Duration) -> f64 {
        let seen = self.seen_at.get(index).copied().flatten();
        let (Some(seen), Some(card)) = (seen, data::feature_cards().get(index)) else {
            return 0.0;
        };

        let starts = seen + Duration::from_millis(u64::from(card.delay_ms));
        if now < starts {
            return 0.0;
        }
        ease_out(now - starts, CARD_FADE)
    }

    pub fn card_shown(&self, index: usize, now: Duration) -> bool {
        self.card_progress(index, now) > 0.0
    }

    pub fn update(&mut self, viewport: Viewport, now: Duration) {
        let layout = layout(viewport);
        self.max_scroll = layout.document.max_scroll(viewport.height);
        self.scroll.clamp(self.max_scroll);
        let rows = viewport.rows_at(self.scroll.offset());

        for (index, extent) in layout.cards.iter().enumerate() {
            if self.cards[index].observe(Some(*extent), rows) && self.seen_at[index].is_none() {
                self.seen_at[index] = Some(now);
            }
        }
    }

    /// Forgets which cards were seen, as when the page is left.
    pub fn teardown(&mut self) {
        for detector in &mut self.cards {
            detector.reset();
        }
        self.seen_at.fill(None);
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn hero_fills_most_of_a_tall_viewport() {
        let layout = layout(Viewport::new(80, 40));
        assert_eq!(layout.hero, Extent::new(0, 32));
        assert_eq!(layout.cards.len(), 3);
        assert_eq!(layout.cards[0].start, 32);
    }

    #[test]
    fn hero_never_clips_its_content() {
        let layout = layout(Viewport::new(20, 4));
        assert!(layout.hero.len > 4);
        assert!(layout
            .document
            .lines
            .iter()
            .any(|line| line.role == LineRole::Hint));
    }

    #[test]
    fn cards_wait_until_scrolled_to() {
        let mut page = HomePage::new();
        let viewport = Viewport::new(80, 20);

        page.update(viewport, ms(0));
        assert!(!page.card_in_view(2));
        assert!(!page.card_shown(2, ms(5_000)));

        page.scroll_to_end();
        page.update(viewport, ms(1_000));
        assert!(page.card_in_view(2));
        assert!(page.card_shown(0, ms(1_100)));
    }

    #[test]
    fn one_row_past_the_margin_shows_a_card() {
        let viewport = Extent::new(0, 20);

        let mut peeking = VisibilityDetector::new(CARD_VISIBILITY);
        assert!(peeking.observe(Some(Extent::new(17, 30)), viewport));

        let mut hidden = VisibilityDetector::new(CARD_VISIBILITY);
        assert!(!hidden.observe(Some(Extent::new(18, 30)), viewport));
    }

    #[test]
    fn cards_stay_shown_after_scrolling_back() {
        let mut page = HomePage::new();
        let viewport = Viewport::new(80, 20);
        page.update(viewport, ms(0));
        page.scroll_to_end();
        page.update(viewport, ms(0));
        assert!(page.card_in_view(2));
        page.scroll_to_top();
        page.update(viewport, ms(50));
        assert!(page.card_in_view(2));
    }

    #[test]
    fn later_cards_are_staggered() {
        let mut page = HomePage::new();
        let viewport = Viewport::new(80, 200);
        page.update(viewport, ms(0));

        assert!(page.card_shown(0, ms(100)));
        assert!(!page.card_shown(1, ms(100)));
        assert!(!page.card_shown(2, ms(300)));
        assert!(page.card_shown(2, ms(500)));
        assert!((page.card_progress(0, ms(5_000)) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn teardown_forgets_seen_cards() {
        let mut page = HomePage::new();
        page.update(Viewport::new(80, 200), ms(0));
        page.teardown();
        assert!(!page.card_in_view(0));
        assert!(!page.card_shown(0, ms(1_000)));
    }
}
