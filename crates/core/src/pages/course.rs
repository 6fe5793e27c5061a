use super::{DocLine, Document, LineRole, Scroll, Viewport};
use crate::data::{self, COURSE_INTRO, COURSE_TITLE};
use crate::reveal::{RevealPhase, RevealSequencer};
use crate::visibility::{Extent, VisibilityConfig, VisibilityDetector};
use std::time::Duration;

/// An obstacle is active while most of it is on screen, and goes inactive
/// again when scrolled away.
pub const OBSTACLE_VISIBILITY: VisibilityConfig = VisibilityConfig::new(0.6, false);
/// A revealed solution fades in the first time a third of it is on screen.
pub const SOLUTION_VISIBILITY: VisibilityConfig = VisibilityConfig::new(0.3, true);

const ITEM_GAP: usize = 2;
const SOLUTION_INSET: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleExtents {
    /// The card plus its solution, when shown.
    pub item: Extent,
    pub card: Extent,
    pub solution: Option<Extent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseLayout {
    pub document: Document,
    pub items: Vec<ObstacleExtents>,
}

/// Lays the course out for `width` columns. Solutions are only placed for
/// obstacles `revealed` reports as revealed.
pub fn layout(width: u16, revealed: impl Fn(usize) -> bool) -> CourseLayout {
    let mut document = Document::default();
    document.push_wrapped(COURSE_TITLE, width, 0, LineRole::Title);
    document.push_blank(1);
    document.push_wrapped(COURSE_INTRO, width, 0, LineRole::Subtitle);
    document.push_blank(2);

    let side = width / 8;
    let card_width = width.saturating_sub(side);
    let mut items = Vec::with_capacity(data::obstacles().len());

    for (index, obstacle) in data::obstacles().iter().enumerate() {
        // Cards alternate sides down the course.
        let indent = if index % 2 == 0 { 0 } else { side };
        let text_width = card_width.saturating_sub(2);

        let start = document.rows();
        document.push_wrapped(obstacle.title, text_width, indent, LineRole::ObstacleTitle { index });
        document.push_wrapped(
            obstacle.description,
            text_width,
            indent,
            LineRole::ObstacleBody { index },
        );
        document.push(DocLine::new("", indent, LineRole::ObstacleMarker { index }));
        let card = Extent::new(start, document.rows() - start);

        let solution = if revealed(index) {
            let inset = indent + SOLUTION_INSET;
            let solution_width = card_width.saturating_sub(SOLUTION_INSET + 2);
            let solution_start = document.rows();
            document.push_wrapped(
                obstacle.solution_title,
                solution_width,
                inset,
                LineRole::SolutionTitle { index },
            );
            document.push_wrapped(
                obstacle.solution,
                solution_width,
                inset,
                LineRole::SolutionBody { index },
            );
            Some(Extent::new(solution_start, document.rows() - solution_start))
        } else {
            None
        };

        items.push(ObstacleExtents {
            item: Extent::new(start, document.rows() - start),
            card,
            solution,
        });
        document.push_blank(ITEM_GAP);
    }

    CourseLayout { document, items }
}

#[derive(Debug, Clone)]
pub struct CoursePage {
    obstacles: Vec<VisibilityDetector>,
    solutions: Vec<VisibilityDetector>,
    sequencer: RevealSequencer<&'static str>,
    scroll: Scroll,
    max_scroll: u32,
}

impl CoursePage {
    pub fn new(reveal_delay: Duration) -> Self {
        let count = data::obstacles().len();
        Self {
            obstacles: vec![VisibilityDetector::new(OBSTACLE_VISIBILITY); count],
            solutions: vec![VisibilityDetector::new(SOLUTION_VISIBILITY); count],
            sequencer: RevealSequencer::new(reveal_delay),
            scroll: Scroll::default(),
            max_scroll: 0,
        }
    }

    fn id(index: usize) -> Option<&'static str> {
        data::obstacles().get(index).map(|obstacle| obstacle.id)
    }

    pub fn phase(&self, index: usize) -> RevealPhase {
        Self::id(index).map_or(RevealPhase::Hidden, |id| self.sequencer.phase(&id))
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.phase(index) == RevealPhase::Revealed
    }

    pub fn obstacle_in_view(&self, index: usize) -> bool {
        self.obstacles
            .get(index)
            .is_some_and(VisibilityDetector::in_view)
    }

    pub fn solution_in_view(&self, index: usize) -> bool {
        self.solutions
            .get(index)
            .is_some_and(VisibilityDetector::in_view)
    }

    pub fn pending_reveals(&self) -> usize {
        self.sequencer.pending_count()
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

    pub fn layout(&self, width: u16) -> CourseLayout {
        layout(width, |index| self.is_revealed(index))
    }

    /// Fires due reveals, then feeds every detector the current viewport.
    ///
    /// Returns the ids of obstacles revealed during this update.
    pub fn update(&mut self, viewport: Viewport, now: Duration) -> Vec<&'static str> {
        let mut revealed = self.sequencer.advance(now);

        let layout = self.layout(viewport.width);
        self.max_scroll = layout.document.max_scroll(viewport.height);
        self.scroll.clamp(self.max_scroll);
        let rows = viewport.rows_at(self.scroll.offset());

        for (index, extents) in layout.items.iter().enumerate() {
            let Some(id) = Self::id(index) else {
                continue;
            };

            let visible = self.obstacles[index].observe(Some(extents.item), rows);
            let before = self.sequencer.phase(&id);
            let after = self.sequencer.set_visible(id, visible, now);
            if before != RevealPhase::Revealed && after == RevealPhase::Revealed {
                revealed.push(id);
            }

            self.solutions[index].observe(extents.solution, rows);
        }

        revealed
    }

    /// Called when the page is left: cancels pending reveals and forgets
    /// what was on screen. Revealed solutions stay revealed.
    pub fn teardown(&mut self) -> usize {
        for detector in self.obstacles.iter_mut().chain(self.solutions.iter_mut()) {
            detector.reset();
        }
        self.sequencer.teardown()
    }
}

impl Default for CoursePage {
    fn default() -> Self {
        Self::new(crate::reveal::DEFAULT_REVEAL_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn card_row(page: &CoursePage, index: usize, width: u16) -> u32 {
        page.layout(width).items[index].card.start
    }

    #[test]
    fn layout_places_every_obstacle_once() {
        let layout = layout(60, |_| false);
        assert_eq!(layout.items.len(), 5);
        assert!(layout.items.iter().all(|item| item.solution.is_none()));
        assert!(layout
            .items
            .windows(2)
            .all(|pair| pair[0].item.end() < pair[1].item.start));
    }

    #[test]
    fn revealed_obstacles_grow_a_solution_block() {
        let layout = layout(60, |index| index == 1);
        let item = layout.items[1];
        let solution = item.solution.unwrap_or_default();
        assert!(solution.len > 0);
        assert_eq!(solution.start, item.card.end());
        assert_eq!(item.item.end(), solution.end());
    }

    #[test]
    fn odd_obstacles_are_indented() {
        let layout = layout(80, |_| false);
        let indent_of = |index: usize| {
            layout
                .document
                .lines
                .iter()
                .find(|line| line.role == LineRole::ObstacleTitle { index })
                .map(|line| line.indent)
        };
        assert_eq!(indent_of(0), Some(0));
        assert_eq!(indent_of(1), Some(10));
    }

    #[test]
    fn first_obstacle_reveals_after_the_delay() {
        let mut page = CoursePage::default();
        let viewport = Viewport::new(60, 12);

        page.update(viewport, ms(0));
        assert!(page.obstacle_in_view(0));
        assert_eq!(page.phase(0), RevealPhase::Pending);

        assert!(page.update(viewport, ms(799)).is_empty());
        assert_eq!(page.update(viewport, ms(800)), vec!["funding"]);
        assert!(page.is_revealed(0));
    }

    #[test]
    fn scrolling_away_before_the_delay_cancels() {
        let mut page = CoursePage::default();
        let viewport = Viewport::new(60, 12);

        page.update(viewport, ms(0));
        let row = card_row(&page, 1, 60);
        page.scroll_by(i32::try_from(row).unwrap_or(i32::MAX));
        page.update(viewport, ms(100));
        assert_eq!(page.phase(1), RevealPhase::Pending);

        page.scroll_to_end();
        page.update(viewport, ms(500));
        assert_eq!(page.phase(1), RevealPhase::Hidden);
        page.update(viewport, ms(2_000));
        assert!(!page.is_revealed(1));
    }

    #[test]
    fn teardown_cancels_pending_but_keeps_revealed() {
        let mut page = CoursePage::new(ms(100));
        let viewport = Viewport::new(60, 200);

        page.update(viewport, ms(0));
        page.update(viewport, ms(100));
        assert!(page.is_revealed(0));

        let mut later = CoursePage::new(ms(100));
        later.update(viewport, ms(0));
        assert!(later.pending_reveals() > 0);
        assert!(later.teardown() > 0);
        assert_eq!(later.pending_reveals(), 0);
        assert!(!later.obstacle_in_view(0));

        page.teardown();
        assert!(page.is_revealed(0));
    }

    #[test]
    fn solution_fades_in_once_seen() {
        let mut page = CoursePage::new(ms(10));
        let viewport = Viewport::new(60, 200);
        page.update(viewport, ms(0));
        page.update(viewport, ms(10));
        page.update(viewport, ms(20));
        assert!(page.solution_in_view(0));

        page.scroll_to_end();
        page.update(viewport, ms(30));
        assert!(page.solution_in_view(0));
    }
}
