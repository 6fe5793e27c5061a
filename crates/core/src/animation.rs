use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationMode {
    Running,
    Paused,
}

impl AnimationMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Running => Self::Paused,
            Self::Paused => Self::Running,
        }
    }
}

const ANIMATION_SWEEP_SPEED: f64 = 2.0;
const ANIMATION_MAX_FRAME_DELTA: f64 = 0.25;
const ANIMATION_FULL_ROTATION: f64 = 2.0 * std::f64::consts::PI;

/// How long leaderboard bars take to grow to their value.
pub const BAR_GROWTH: Duration = Duration::from_millis(1_000);

/// Advances the shared animation phase, clamping large frame gaps so a
/// stalled frame does not make the animation jump.
pub fn advance_animation_counter(
    counter: f64,
    last_tick: Option<f64>,
    now_seconds: f64,
    mode: AnimationMode,
) -> (f64, Option<f64>) {
    let delta = last_tick
        .map(|last| (now_seconds - last).clamp(0.0, ANIMATION_MAX_FRAME_DELTA))
        .unwrap_or(0.0);

    let next_counter = match mode {
        AnimationMode::Running => {
            (counter + delta * ANIMATION_SWEEP_SPEED).rem_euclid(ANIMATION_FULL_ROTATION)
        }
        AnimationMode::Paused => counter.rem_euclid(ANIMATION_FULL_ROTATION),
    };

    (next_counter, Some(now_seconds))
}

/// Cubic ease-out over `total`, returning progress in `0.0..=1.0`.
pub fn ease_out(elapsed: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 1.0;
    }

    let t = (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Value of a growing bar `elapsed` into its animation.
pub fn grown_value(value: u32, elapsed: Duration) -> u32 {
    let progress = ease_out(elapsed, BAR_GROWTH);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let grown = (f64::from(value) * progress).round() as u32;
    grown.min(value)
}

/// Step index for spinners and blinking cursors, derived from the counter.
pub fn frame_index(counter: f64, frames: usize) -> usize {
    if frames == 0 {
        return 0;
    }

    let phase = counter.rem_euclid(ANIMATION_FULL_ROTATION) / ANIMATION_FULL_ROTATION;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let index = (phase * frames as f64) as usize;
    index.min(frames - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual}, diff {diff}"
        );
    }

    #[test]
    fn first_tick_initializes_time_without_advancing() {
        let start_counter = 1.2345;
        let (counter, last_tick) =
            advance_animation_counter(start_counter, None, 10.0, AnimationMode::Running);

        assert_close(counter, start_counter);
        assert_eq!(last_tick, Some(10.0));
    }

    #[test]
    fn running_mode_advances_counter_and_wraps() {
        let start_counter = ANIMATION_FULL_ROTATION - 0.1;
        let (counter, _) =
            advance_animation_counter(start_counter, Some(4.0), 4.2, AnimationMode::Running);

        let expected =
            (start_counter + 0.2 * ANIMATION_SWEEP_SPEED).rem_euclid(ANIMATION_FULL_ROTATION);
        assert_close(counter, expected);
    }

    #[test]
    fn paused_mode_keeps_counter_stable_but_updates_clock() {
        let (counter, last_tick) =
            advance_animation_counter(2.25, Some(1.0), 1.2, AnimationMode::Paused);

        assert_close(counter, 2.25);
        assert_eq!(last_tick, Some(1.2));
    }

    #[test]
    fn large_frame_gap_is_clamped() {
        let (counter, _) = advance_animation_counter(0.0, Some(3.0), 30.0, AnimationMode::Running);
        assert_close(counter, ANIMATION_MAX_FRAME_DELTA * ANIMATION_SWEEP_SPEED);
    }

    #[test]
    fn ease_out_is_monotonic_and_bounded() {
        let mut previous = 0.0;
        for ms in (0..=1_200).step_by(100) {
            let progress = ease_out(Duration::from_millis(ms), BAR_GROWTH);
            assert!(progress >= previous);
            assert!((0.0..=1.0).contains(&progress));
            previous = progress;
        }
        assert_close(ease_out(BAR_GROWTH, BAR_GROWTH), 1.0);
        assert_close(ease_out(Duration::ZERO, Duration::ZERO), 1.0);
    }

    #[test]
    fn bars_reach_their_value() {
        assert_eq!(grown_value(92, Duration::ZERO), 0);
        assert_eq!(grown_value(92, BAR_GROWTH), 92);
        assert!(grown_value(92, Duration::from_millis(500)) > 46);
    }

    #[test]
    fn frame_index_stays_in_range() {
        assert_eq!(frame_index(0.0, 8), 0);
        assert_eq!(frame_index(ANIMATION_FULL_ROTATION - 1e-9, 8), 7);
        assert_eq!(frame_index(1.0, 0), 0);
    }

    #[test]
    fn toggling_mode_flips_it() {
        assert_eq!(AnimationMode::Running.toggled(), AnimationMode::Paused);
        assert_eq!(AnimationMode::Paused.toggled(), AnimationMode::Running);
    }
}
