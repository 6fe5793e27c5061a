//! Per-page view state shared by the terminal and browser front-ends.
//!
//! Scrolling pages are laid out as a [`Document`] of wrapped lines, each
//! tagged with the role it plays. Front-ends only style lines by role; row
//! extents used for visibility come from the same document.

pub mod course;
pub mod home;
pub mod leaderboard;
pub mod pledge_wall;

use crate::visibility::Extent;

pub use course::CoursePage;
pub use home::HomePage;
pub use leaderboard::LeaderboardPage;
pub use pledge_wall::{FormFocus, PledgeWallPage};

/// Rows scrolled before the header switches to its compact form.
pub const COMPACT_HEADER_AFTER: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Blank,
    Title,
    Subtitle,
    Body,
    Hint,
    CardTitle { card: usize },
    CardBody { card: usize },
    ObstacleTitle { index: usize },
    ObstacleBody { index: usize },
    ObstacleMarker { index: usize },
    SolutionTitle { index: usize },
    SolutionBody { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLine {
    pub text: String,
    pub indent: u16,
    pub role: LineRole,
}

impl DocLine {
    pub fn new(text: impl Into<String>, indent: u16, role: LineRole) -> Self {
        Self {
            text: text.into(),
            indent,
            role,
        }
    }

    pub fn blank() -> Self {
        Self::new(String::new(), 0, LineRole::Blank)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub lines: Vec<DocLine>,
}

impl Document {
    pub fn push(&mut self, line: DocLine) -> u32 {
        let row = self.rows();
        self.lines.push(line);
        row
    }

    pub fn push_blank(&mut self, count: usize) {
        for _ in 0..count {
            self.lines.push(DocLine::blank());
        }
    }

    /// Appends wrapped lines and returns the rows they occupy.
    pub fn push_wrapped(&mut self, text: &str, width: u16, indent: u16, role: LineRole) -> Extent {
        let start = self.rows();
        for line in crate::text::wrap(text, usize::from(width)) {
            self.lines.push(DocLine::new(line, indent, role));
        }
        Extent::new(start, self.rows() - start)
    }

    pub fn rows(&self) -> u32 {
        u32::try_from(self.lines.len()).unwrap_or(u32::MAX)
    }

    pub fn max_scroll(&self, viewport_rows: u16) -> u32 {
        self.rows().saturating_sub(u32::from(viewport_rows))
    }

    pub fn visible(&self, scroll: u32, viewport_rows: u16) -> &[DocLine] {
        let start = usize::try_from(scroll).unwrap_or(usize::MAX).min(self.lines.len());
        let end = start
            .saturating_add(usize::from(viewport_rows))
            .min(self.lines.len());
        &self.lines[start..end]
    }
}

/// Size of the scrollable content area, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn rows_at(self, scroll: u32) -> Extent {
        Extent::new(scroll, u32::from(self.height))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 20)
    }
}

/// Vertical scroll offset of a page, kept inside its document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scroll {
    offset: u32,
}

impl Scroll {
    pub const fn new() -> Self {
        Self { offset: 0 }
    }

    pub const fn offset(self) -> u32 {
        self.offset
    }

    pub fn scroll_by(&mut self, delta: i32, max: u32) {
        let next = i64::from(self.offset) + i64::from(delta);
        self.offset = u32::try_from(next.clamp(0, i64::from(max))).unwrap_or(max);
    }

    pub fn scroll_to(&mut self, offset: u32, max: u32) {
        self.offset = offset.min(max);
    }

    pub fn clamp(&mut self, max: u32) {
        self.offset = self.offset.min(max);
    }

    pub const fn is_compact(self) -> bool {
        self.offset > COMPACT_HEADER_AFTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_lines_report_their_extent() {
        let mut doc = Document::default();
        doc.push_blank(2);
        let extent = doc.push_wrapped("one two three four", 13, 0, LineRole::Body);
        assert_eq!(extent, Extent::new(2, 2));
        assert_eq!(doc.rows(), 4);
    }

    #[test]
    fn visible_slice_is_bounded() {
        let mut doc = Document::default();
        doc.push_blank(5);
        assert_eq!(doc.visible(3, 10).len(), 2);
        assert!(doc.visible(50, 10).is_empty());
        assert_eq!(doc.max_scroll(2), 3);
    }

    #[test]
    fn scroll_is_clamped_to_the_document() {
        let mut scroll = Scroll::default();
        scroll.scroll_by(-4, 10);
        assert_eq!(scroll.offset(), 0);
        scroll.scroll_by(25, 10);
        assert_eq!(scroll.offset(), 10);
        scroll.clamp(6);
        assert_eq!(scroll.offset(), 6);
        assert!(scroll.is_compact());
    }
}
