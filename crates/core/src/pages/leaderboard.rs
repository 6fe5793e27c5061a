use crate::animation::{ease_out, grown_value, BAR_GROWTH};
use crate::data;
use crate::domain::{Category, ChartEntry};
use std::time::Duration;

/// Selected category and the moment the bars started growing for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardPage {
    category: Category,
    selected_at: Duration,
}

impl LeaderboardPage {
    pub const fn new(category: Category) -> Self {
        Self {
            category,
            selected_at: Duration::ZERO,
        }
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    /// Switches category and restarts the bar growth from zero.
    pub fn select(&mut self, category: Category, now: Duration) {
        if category != self.category {
            self.category = category;
            self.selected_at = now;
        }
    }

    pub fn select_next(&mut self, now: Duration) {
        self.select(self.category.next(), now);
    }

    pub fn select_prev(&mut self, now: Duration) {
        self.select(self.category.prev(), now);
    }

    /// Restarts the growth animation, as when the page is entered.
    pub fn replay(&mut self, now: Duration) {
        self.selected_at = now;
    }

    pub fn entries(&self) -> Vec<ChartEntry> {
        data::chart_data(self.category)
    }

    /// Entries with their values as grown by `now`.
    pub fn chart(&self, now: Duration) -> Vec<ChartEntry> {
        let elapsed = now.saturating_sub(self.selected_at);
        self.entries()
            .into_iter()
            .map(|entry| ChartEntry {
                value: grown_value(entry.value, elapsed),
                ..entry
            })
            .collect()
    }

    pub fn growth(&self, now: Duration) -> f64 {
        ease_out(now.saturating_sub(self.selected_at), BAR_GROWTH)
    }

    /// Fixed scale for the chart so bars grow into it rather than rescale.
    pub fn max_value(&self) -> u32 {
        self.entries()
            .iter()
            .map(|entry| entry.value)
            .max()
            .unwrap_or(0)
    }
}

impl Default for LeaderboardPage {
    fn default() -> Self {
        Self::new(Category::Ev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn values(entries: &[ChartEntry]) -> Vec<(&'static str, u32)> {
        entries.iter().map(|entry| (entry.name, entry.value)).collect()
    }

    #[test]
    fn quantum_category_shows_research_scores() {
        let mut page = LeaderboardPage::default();
        page.select(Category::Quantum, ms(0));
        assert_eq!(
            values(&page.chart(ms(2_000))),
            vec![("India", 48), ("USA", 92), ("China", 65), ("EU", 76)]
        );
        assert_eq!(page.max_value(), 92);
    }

    #[test]
    fn switching_category_restarts_growth() {
        let mut page = LeaderboardPage::default();
        assert_eq!(page.chart(ms(1_500))[0].value, 38);

        page.select_next(ms(1_500));
        assert_eq!(page.category(), Category::Quantum);
        assert!(page.chart(ms(1_500)).iter().all(|entry| entry.value == 0));
        assert!(page.growth(ms(2_000)) < 1.0);
        assert_eq!(page.chart(ms(2_500))[1].value, 92);
    }

    #[test]
    fn reselecting_the_same_category_keeps_bars() {
        let mut page = LeaderboardPage::default();
        page.select(Category::Ev, ms(5_000));
        assert_eq!(page.chart(ms(5_000))[1].value, 47);
    }

    #[test]
    fn prev_wraps_around() {
        let mut page = LeaderboardPage::default();
        page.select_prev(ms(0));
        assert_eq!(page.category(), Category::Ai);
        assert_eq!(page.max_value(), 380);
    }
}
