//! Viewport intersection for regions of a vertically scrolled document.
//!
//! Regions and the viewport are measured in rows of the rendered document.
//! A [`VisibilityDetector`] turns those measurements into the boolean "in
//! view" signal the pages react to.

/// A run of document rows: `start..start + len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub start: u32,
    pub len: u32,
}

impl Extent {
    pub const fn new(start: u32, len: u32) -> Self {
        Self { start, len }
    }

    pub const fn end(self) -> u32 {
        self.start.saturating_add(self.len)
    }

    pub const fn contains_row(self, row: u32) -> bool {
        row >= self.start && row < self.end()
    }

    /// Number of rows shared with `other`.
    pub fn overlap(self, other: Self) -> u32 {
        let start = self.start.max(other.start);
        let end = self.end().min(other.end());
        end.saturating_sub(start)
    }

    /// Shrinks the extent by `margin` rows at both ends.
    #[must_use]
    pub fn shrink(self, margin: u32) -> Self {
        let len = self.len.saturating_sub(margin.saturating_mul(2));
        Self {
            start: self.start.saturating_add(margin.min(self.len / 2)),
            len,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityConfig {
    /// Fraction of the region that has to be inside the viewport.
    pub threshold: f32,
    /// Latch the signal once it turns true.
    pub trigger_once: bool,
    /// Rows trimmed from both viewport edges before intersecting.
    pub margin: u32,
}

impl VisibilityConfig {
    pub const fn new(threshold: f32, trigger_once: bool) -> Self {
        Self {
            threshold,
            trigger_once,
            margin: 0,
        }
    }

    #[must_use]
    pub const fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self::new(0.0, false)
    }
}

#[derive(Debug, Clone)]
pub struct VisibilityDetector {
    config: VisibilityConfig,
    in_view: bool,
}

impl VisibilityDetector {
    pub const fn new(config: VisibilityConfig) -> Self {
        Self {
            config,
            in_view: false,
        }
    }

    pub const fn config(&self) -> VisibilityConfig {
        self.config
    }

    pub const fn in_view(&self) -> bool {
        self.in_view
    }

    /// Recomputes the signal for `region` against `viewport` and returns it.
    ///
    /// A missing region reads as out of view. A latched one-shot detector
    /// keeps reporting true.
    pub fn observe(&mut self, region: Option<Extent>, viewport: Extent) -> bool {
        if self.config.trigger_once && self.in_view {
            return true;
        }

        self.in_view = region.is_some_and(|region| self.intersects(region, viewport));
        self.in_view
    }

    /// Drops a latched signal, as if the region had been unmounted.
    pub fn reset(&mut self) {
        self.in_view = false;
    }

    fn intersects(&self, region: Extent, viewport: Extent) -> bool {
        let viewport = viewport.shrink(self.config.margin);

        if region.len == 0 {
            return viewport.contains_row(region.start);
        }

        let overlap = region.overlap(viewport);
        if overlap == 0 {
            return false;
        }

        #[allow(clippy::cast_precision_loss)]
        let ratio = overlap as f32 / region.len as f32;
        ratio >= self.config.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Extent = Extent::new(10, 20);

    #[test]
    fn overlap_counts_shared_rows() {
        assert_eq!(Extent::new(0, 15).overlap(VIEWPORT), 5);
        assert_eq!(Extent::new(12, 4).overlap(VIEWPORT), 4);
        assert_eq!(Extent::new(30, 4).overlap(VIEWPORT), 0);
    }

    #[test]
    fn threshold_requires_enough_of_the_region() {
        let mut detector = VisibilityDetector::new(VisibilityConfig::new(0.6, false));

        // 5 of 10 rows visible.
        assert!(!detector.observe(Some(Extent::new(25, 10)), VIEWPORT));
        // 6 of 10 rows visible.
        assert!(detector.observe(Some(Extent::new(24, 10)), VIEWPORT));
    }

    #[test]
    fn zero_threshold_fires_on_any_overlap() {
        let mut detector = VisibilityDetector::new(VisibilityConfig::default());
        assert!(detector.observe(Some(Extent::new(29, 50)), VIEWPORT));
        assert!(!detector.observe(Some(Extent::new(30, 50)), VIEWPORT));
    }

    #[test]
    fn repeatable_detector_tracks_scrolling_away() {
        let mut detector = VisibilityDetector::new(VisibilityConfig::new(0.6, false));
        let region = Some(Extent::new(12, 4));

        assert!(detector.observe(region, VIEWPORT));
        assert!(!detector.observe(region, Extent::new(40, 20)));
        assert!(detector.observe(region, VIEWPORT));
    }

    #[test]
    fn one_shot_detector_never_reverts() {
        let mut detector = VisibilityDetector::new(VisibilityConfig::new(0.3, true));
        let region = Some(Extent::new(12, 4));

        assert!(detector.observe(region, VIEWPORT));
        assert!(detector.observe(region, Extent::new(100, 20)));
        assert!(detector.observe(None, VIEWPORT));
    }

    #[test]
    fn missing_region_is_never_in_view() {
        let mut detector = VisibilityDetector::new(VisibilityConfig::new(0.0, true));
        for _ in 0..3 {
            assert!(!detector.observe(None, VIEWPORT));
        }
    }

    #[test]
    fn margin_shrinks_the_viewport() {
        let config = VisibilityConfig::new(0.0, true).with_margin(3);
        let mut detector = VisibilityDetector::new(config);

        // Rows 27..30 are inside the raw viewport but inside the trimmed margin.
        assert!(!detector.observe(Some(Extent::new(27, 3)), VIEWPORT));
        assert!(detector.observe(Some(Extent::new(26, 3)), VIEWPORT));
    }

    #[test]
    fn zero_height_region_uses_its_start_row() {
        let mut detector = VisibilityDetector::new(VisibilityConfig::new(1.0, false));
        assert!(detector.observe(Some(Extent::new(10, 0)), VIEWPORT));
        assert!(!detector.observe(Some(Extent::new(30, 0)), VIEWPORT));
    }

    #[test]
    fn reset_clears_a_latched_signal() {
        let mut detector = VisibilityDetector::new(VisibilityConfig::new(0.0, true));
        assert!(detector.observe(Some(Extent::new(12, 1)), VIEWPORT));
        detector.reset();
        assert!(!detector.in_view());
    }
}
