//! Delayed, cancellable reveal of paired content.
//!
//! Each tracked item moves `Hidden -> Pending -> Revealed`. Entering
//! `Pending` schedules a timer in a [`TimerTable`]; losing visibility before
//! it fires cancels it. `Revealed` is terminal.
//!
//! Time is passed in explicitly as the elapsed time since the owner started,
//! which keeps the sequencer usable in the terminal and in the browser.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::time::Duration;

pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(800);

/// One-shot timers keyed by item identity.
#[derive(Debug, Clone)]
pub struct TimerTable<K> {
    due: HashMap<K, Duration>,
}

impl<K: Eq + Hash + Clone> TimerTable<K> {
    pub fn new() -> Self {
        Self {
            due: HashMap::new(),
        }
    }

    /// Schedules `key` to fire at `at`, replacing any earlier schedule.
    pub fn schedule(&mut self, key: K, at: Duration) {
        self.due.insert(key, at);
    }

    pub fn cancel(&mut self, key: &K) -> bool {
        self.due.remove(key).is_some()
    }

    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.due.len();
        self.due.clear();
        cancelled
    }

    pub fn due_at(&self, key: &K) -> Option<Duration> {
        self.due.get(key).copied()
    }

    pub fn is_scheduled(&self, key: &K) -> bool {
        self.due.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.due.len()
    }

    pub fn is_empty(&self) -> bool {
        self.due.is_empty()
    }

    /// Removes and returns every timer due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: Duration) -> Vec<K> {
        let mut fired: Vec<(Duration, K)> = self
            .due
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(key, at)| (*at, key.clone()))
            .collect();
        fired.sort_by_key(|(at, _)| *at);

        for (_, key) in &fired {
            self.due.remove(key);
        }

        fired.into_iter().map(|(_, key)| key).collect()
    }
}

impl<K: Eq + Hash + Clone> Default for TimerTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealPhase {
    Hidden,
    Pending,
    Revealed,
}

impl fmt::Display for RevealPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => write!(f, "Hidden"),
            Self::Pending => write!(f, "Pending"),
            Self::Revealed => write!(f, "Revealed"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RevealSequencer<K> {
    delay: Duration,
    phases: HashMap<K, RevealPhase>,
    timers: TimerTable<K>,
}

impl<K: Eq + Hash + Clone> RevealSequencer<K> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            phases: HashMap::new(),
            timers: TimerTable::new(),
        }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    pub fn phase(&self, key: &K) -> RevealPhase {
        self.phases.get(key).copied().unwrap_or(RevealPhase::Hidden)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.phase(key) == RevealPhase::Revealed
    }

    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Feeds the visibility signal of `key` observed at `now`.
    ///
    /// Returns the phase after the transition.
    pub fn set_visible(&mut self, key: K, visible: bool, now: Duration) -> RevealPhase {
        match (self.phase(&key), visible) {
            (RevealPhase::Hidden, true) => {
                self.timers.schedule(key.clone(), now + self.delay);
                self.phases.insert(key, RevealPhase::Pending);
                RevealPhase::Pending
            }
            (RevealPhase::Pending, false) => {
                let fired = self.timers.due_at(&key).is_some_and(|at| at <= now);
                self.timers.cancel(&key);
                let next = if fired {
                    RevealPhase::Revealed
                } else {
                    RevealPhase::Hidden
                };
                self.phases.insert(key, next);
                next
            }
            (phase, _) => phase,
        }
    }

    /// Fires every timer due by `now` and returns the items revealed by it.
    pub fn advance(&mut self, now: Duration) -> Vec<K> {
        let fired = self.timers.drain_due(now);
        for key in &fired {
            self.phases.insert(key.clone(), RevealPhase::Revealed);
        }
        fired
    }

    /// Cancels every pending reveal; revealed items stay revealed.
    pub fn teardown(&mut self) -> usize {
        self.timers.cancel_all();
        let mut cancelled = 0;
        for phase in self.phases.values_mut() {
            if *phase == RevealPhase::Pending {
                *phase = RevealPhase::Hidden;
                cancelled += 1;
            }
        }
        cancelled
    }
}

impl<K: Eq + Hash + Clone> Default for RevealSequencer<K> {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn timers_fire_in_due_order() {
        let mut timers = TimerTable::new();
        timers.schedule("late", ms(300));
        timers.schedule("early", ms(100));
        timers.schedule("future", ms(900));

        assert_eq!(timers.drain_due(ms(300)), vec!["early", "late"]);
        assert!(timers.is_scheduled(&"future"));
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timers = TimerTable::new();
        timers.schedule(1_u8, ms(10));
        assert!(timers.cancel(&1));
        assert!(!timers.cancel(&1));
        assert!(timers.drain_due(ms(1_000)).is_empty());
    }

    #[test]
    fn becoming_visible_enters_pending() {
        let mut sequencer = RevealSequencer::default();
        assert_eq!(sequencer.phase(&"funding"), RevealPhase::Hidden);
        assert_eq!(
            sequencer.set_visible("funding", true, ms(0)),
            RevealPhase::Pending
        );
        assert_eq!(sequencer.pending_count(), 1);
    }

    #[test]
    fn reveal_fires_after_the_delay() {
        let mut sequencer = RevealSequencer::default();
        sequencer.set_visible("funding", true, ms(100));

        assert!(sequencer.advance(ms(899)).is_empty());
        assert_eq!(sequencer.phase(&"funding"), RevealPhase::Pending);

        assert_eq!(sequencer.advance(ms(900)), vec!["funding"]);
        assert!(sequencer.is_revealed(&"funding"));
    }

    #[test]
    fn losing_visibility_cancels_the_reveal() {
        let mut sequencer = RevealSequencer::default();
        sequencer.set_visible("talent", true, ms(0));

        assert_eq!(
            sequencer.set_visible("talent", false, ms(799)),
            RevealPhase::Hidden
        );
        assert!(sequencer.advance(ms(5_000)).is_empty());
        assert_eq!(sequencer.phase(&"talent"), RevealPhase::Hidden);
    }

    #[test]
    fn losing_visibility_at_the_deadline_still_reveals() {
        let mut sequencer = RevealSequencer::default();
        sequencer.set_visible("talent", true, ms(0));
        assert_eq!(
            sequencer.set_visible("talent", false, ms(800)),
            RevealPhase::Revealed
        );
    }

    #[test]
    fn repeated_visible_signal_keeps_the_original_deadline() {
        let mut sequencer = RevealSequencer::default();
        sequencer.set_visible("market", true, ms(0));
        sequencer.set_visible("market", true, ms(500));
        assert_eq!(sequencer.advance(ms(800)), vec!["market"]);
    }

    #[test]
    fn revealed_is_sticky() {
        let mut sequencer = RevealSequencer::new(ms(10));
        sequencer.set_visible("regulatory", true, ms(0));
        sequencer.advance(ms(10));

        sequencer.set_visible("regulatory", false, ms(20));
        sequencer.teardown();
        sequencer.set_visible("regulatory", true, ms(30));
        assert!(sequencer.is_revealed(&"regulatory"));
        assert_eq!(sequencer.pending_count(), 0);
    }

    #[test]
    fn teardown_cancels_only_pending_items() {
        let mut sequencer = RevealSequencer::new(ms(100));
        sequencer.set_visible("a", true, ms(0));
        sequencer.advance(ms(100));
        sequencer.set_visible("b", true, ms(50));
        sequencer.set_visible("c", true, ms(60));

        assert_eq!(sequencer.teardown(), 2);
        assert!(sequencer.advance(ms(10_000)).is_empty());
        assert!(sequencer.is_revealed(&"a"));
        assert_eq!(sequencer.phase(&"b"), RevealPhase::Hidden);
        assert_eq!(sequencer.phase(&"c"), RevealPhase::Hidden);
    }

    #[test]
    fn items_are_sequenced_independently() {
        let mut sequencer = RevealSequencer::default();
        sequencer.set_visible(0_usize, true, ms(0));
        sequencer.set_visible(1_usize, true, ms(400));
        sequencer.set_visible(0_usize, false, ms(500));

        assert_eq!(sequencer.advance(ms(1_200)), vec![1]);
        assert_eq!(sequencer.phase(&0), RevealPhase::Hidden);
    }

    proptest! {
        #[test]
        fn revert_before_deadline_never_reveals(start in 0_u64..10_000, held in 0_u64..800) {
            let mut sequencer = RevealSequencer::default();
            sequencer.set_visible("item", true, ms(start));
            sequencer.advance(ms(start + held));
            let phase = sequencer.set_visible("item", false, ms(start + held));

            prop_assert_eq!(phase, RevealPhase::Hidden);
            prop_assert!(sequencer.advance(ms(start + 60_000)).is_empty());
        }

        #[test]
        fn staying_visible_always_reveals(start in 0_u64..10_000, extra in 0_u64..5_000) {
            let mut sequencer = RevealSequencer::default();
            sequencer.set_visible("item", true, ms(start));
            sequencer.advance(ms(start + 800 + extra));
            prop_assert!(sequencer.is_revealed(&"item"));
        }
    }
}
