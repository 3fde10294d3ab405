//! Time-based scroll tween.
//!
//! A tween is immutable once started; every frame recomputes the position
//! from the wall-clock timestamp, so a throttled tab stretches the perceived
//! duration but can never corrupt the end state.

use super::easing::ease_out_quart;

/// An in-flight viewport tween from one scroll offset to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTween {
    pub start_offset: f64,
    pub target_offset: f64,
    pub start_time_ms: f64,
    pub duration_ms: f64,
}

impl ScrollTween {
    pub fn new(start_offset: f64, target_offset: f64, start_time_ms: f64, duration_ms: f64) -> Self {
        Self {
            start_offset,
            target_offset,
            start_time_ms,
            duration_ms,
        }
    }

    /// Linear progress in [0, 1] at the given timestamp.
    #[inline]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_time_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Eased scroll offset at the given timestamp. Exactly `target_offset`
    /// once the duration has elapsed.
    pub fn position_at(&self, now_ms: f64) -> f64 {
        let eased = ease_out_quart(self.progress(now_ms));
        self.start_offset + (self.target_offset - self.start_offset) * eased
    }

    #[inline]
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Absolute distance this tween covers.
    #[inline]
    pub fn distance(&self) -> f64 {
        (self.target_offset - self.start_offset).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tween() -> ScrollTween {
        ScrollTween::new(100.0, 1100.0, 1_000.0, 600.0)
    }

    #[test]
    fn starts_at_start_offset() {
        let t = tween();
        assert_eq!(t.position_at(1_000.0), 100.0);
        // Timestamps before the start behave like t=0.
        assert_eq!(t.position_at(500.0), 100.0);
    }

    #[test]
    fn ends_exactly_at_target() {
        let t = tween();
        assert_eq!(t.position_at(1_600.0), 1_100.0);
        assert_eq!(t.position_at(10_000.0), 1_100.0);
        assert!(t.is_complete(1_600.0));
        assert!(!t.is_complete(1_599.0));
    }

    #[test]
    fn monotonic_approach_to_target() {
        let t = tween();
        let mut prev = t.position_at(1_000.0);
        for step in 1..=60 {
            let now = 1_000.0 + step as f64 * 10.0;
            let pos = t.position_at(now);
            assert!(pos >= prev, "position regressed at {now}");
            assert!(pos >= t.start_offset && pos <= t.target_offset);
            prev = pos;
        }
    }

    #[test]
    fn monotonic_when_scrolling_up() {
        let t = ScrollTween::new(2_000.0, 500.0, 0.0, 500.0);
        let mut prev = t.position_at(0.0);
        for step in 1..=50 {
            let pos = t.position_at(step as f64 * 10.0);
            assert!(pos <= prev, "position regressed at step {step}");
            prev = pos;
        }
        assert_eq!(t.position_at(500.0), 500.0);
    }

    #[test]
    fn zero_distance_is_idempotent() {
        let t = ScrollTween::new(1_120.0, 1_120.0, 0.0, 600.0);
        assert_eq!(t.distance(), 0.0);
        assert_eq!(t.position_at(0.0), 1_120.0);
        assert_eq!(t.position_at(300.0), 1_120.0);
        assert_eq!(t.position_at(600.0), 1_120.0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let t = ScrollTween::new(0.0, 400.0, 1_000.0, 0.0);
        assert!(t.is_complete(1_000.0));
        assert_eq!(t.position_at(1_000.0), 400.0);
    }
}
