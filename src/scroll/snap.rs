//! Section-snap heuristic.
//!
//! Decides, after the user's scrolling has settled, whether the viewport is
//! close enough to a section boundary that nudging it the rest of the way
//! feels like help rather than a fight. The gates are deliberately strict:
//! a snap only fires when scrolling has nearly stopped (velocity cutoff),
//! a section top sits in a narrow band around the viewport top, and the
//! remaining distance is tens of pixels.

/// Tunable parameters for smooth scrolling and snapping.
///
/// The defaults are the values the site shipped with. They are starting
/// points, not contracts; tweak per deployment if the page sections change
/// height dramatically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapConfig {
    /// Fixed navbar height subtracted from every section's offset except the
    /// first section in document order.
    pub navbar_height: f64,
    /// "Close enough" distance gate, as a fraction of viewport height.
    pub viewport_fraction: f64,
    /// Duration of the snap/navigation tween.
    pub snap_duration_ms: f64,
    /// How long scrolling must be quiet before a snap is considered.
    pub settle_delay_ms: u32,
    /// Velocity (px/ms) above which the user is still flinging; never snap.
    pub velocity_cutoff: f64,
    /// A section's top must sit within this band around the viewport top
    /// (px, either side) to be a candidate.
    pub near_top_band: f64,
    /// Commit gate: the best candidate's distance must be under this (px).
    pub commit_bound: f64,
    /// Distances below this are not worth animating at all.
    pub min_snap_distance: f64,
    /// Master switch for the automatic snap mode. Explicit navigation via
    /// `scroll_to_section` works regardless.
    pub enabled: bool,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            navbar_height: 80.0,
            viewport_fraction: 0.15,
            snap_duration_ms: 600.0,
            settle_delay_ms: 800,
            velocity_cutoff: 0.3,
            near_top_band: 100.0,
            commit_bound: 50.0,
            min_snap_distance: 20.0,
            enabled: true,
        }
    }
}

/// One section's measured geometry, in viewport coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGeometry {
    pub id: String,
    /// `getBoundingClientRect().top` — negative once scrolled past.
    pub viewport_top: f64,
    /// Whether navigation to this section subtracts the navbar height.
    /// False only for the first section in document order.
    pub offset_navbar: bool,
}

impl SectionGeometry {
    /// Document-relative scroll offset that aligns this section under the
    /// navbar (or at the very top for the first section).
    pub fn adjusted_top(&self, scroll_top: f64, navbar_height: f64) -> f64 {
        let document_top = scroll_top + self.viewport_top;
        if self.offset_navbar {
            document_top - navbar_height
        } else {
            document_top
        }
    }
}

/// Scroll velocity estimate from successive scroll events.
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocityTracker {
    last_time_ms: f64,
    last_position: f64,
    velocity: f64,
    primed: bool,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll sample and return the updated velocity in px/ms.
    pub fn observe(&mut self, now_ms: f64, position: f64) -> f64 {
        if self.primed {
            let dt = now_ms - self.last_time_ms;
            if dt > 0.0 {
                self.velocity = (position - self.last_position).abs() / dt;
            }
        }
        self.last_time_ms = now_ms;
        self.last_position = position;
        self.primed = true;
        self.velocity
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}

/// The section chosen by the snap heuristic.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapTarget {
    pub id: String,
    pub target_offset: f64,
    pub distance: f64,
}

/// Evaluate the snap heuristic over the currently mounted sections.
///
/// Returns the committed target, or `None` when nothing is close enough.
/// The velocity and guard-flag gates run before this in the controller; this
/// function only judges geometry.
pub fn pick_snap_target(
    scroll_top: f64,
    viewport_height: f64,
    sections: &[SectionGeometry],
    config: &SnapConfig,
) -> Option<SnapTarget> {
    let close_enough = viewport_height * config.viewport_fraction;
    let mut best: Option<SnapTarget> = None;

    for section in sections {
        let adjusted = section.adjusted_top(scroll_top, config.navbar_height);
        let distance = (scroll_top - adjusted).abs();

        let near_top = section.viewport_top > -config.near_top_band
            && section.viewport_top < config.near_top_band;
        if !near_top || distance >= close_enough {
            continue;
        }
        if best.as_ref().map_or(true, |b| distance < b.distance) {
            best = Some(SnapTarget {
                id: section.id.clone(),
                target_offset: adjusted,
                distance,
            });
        }
    }

    // Only near-exact alignment is auto-corrected; resting anywhere else is
    // the user's business.
    best.filter(|b| b.distance < config.commit_bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, viewport_top: f64, offset_navbar: bool) -> SectionGeometry {
        SectionGeometry {
            id: id.to_string(),
            viewport_top,
            offset_navbar,
        }
    }

    #[test]
    fn adjusted_top_subtracts_navbar_except_first() {
        // Document offsets hero=0, problem=1200, solution=2400, navbar 80.
        let scroll_top = 500.0;
        let hero = section("hero", -500.0, false);
        let problem = section("problem", 700.0, true);
        let solution = section("solution", 1_900.0, true);

        assert_eq!(hero.adjusted_top(scroll_top, 80.0), 0.0);
        assert_eq!(problem.adjusted_top(scroll_top, 80.0), 1_120.0);
        assert_eq!(solution.adjusted_top(scroll_top, 80.0), 2_320.0);
    }

    #[test]
    fn velocity_is_abs_delta_over_time() {
        let mut v = VelocityTracker::new();
        assert_eq!(v.observe(0.0, 100.0), 0.0); // first sample only primes
        assert!((v.observe(100.0, 160.0) - 0.6).abs() < 1e-9);
        assert!((v.observe(200.0, 130.0) - 0.3).abs() < 1e-9); // upward scroll
    }

    #[test]
    fn velocity_ignores_zero_dt() {
        let mut v = VelocityTracker::new();
        v.observe(0.0, 0.0);
        v.observe(10.0, 50.0);
        let before = v.velocity();
        assert_eq!(v.observe(10.0, 500.0), before);
    }

    #[test]
    fn fling_trace_never_drops_below_cutoff() {
        // Synthetic fling: strictly decreasing inter-event intervals with a
        // constant 100px step, so velocity keeps rising. The cutoff gate must
        // hold for every sample.
        let config = SnapConfig::default();
        let mut v = VelocityTracker::new();
        let mut now = 0.0;
        let mut pos = 0.0;
        v.observe(now, pos);
        for step in 0..10 {
            now += 200.0 - step as f64 * 18.0; // 200ms down to 38ms
            pos += 100.0;
            let velocity = v.observe(now, pos);
            if step > 0 {
                assert!(
                    velocity > config.velocity_cutoff,
                    "fling sample {step} fell below cutoff"
                );
            }
        }
    }

    #[test]
    fn snaps_to_nearly_aligned_section() {
        let config = SnapConfig::default();
        // Scrolled to 1130; problem's rect top is 70 (inside the band) and
        // its adjusted top is 1120, 10px away.
        let scroll_top = 1_130.0;
        let sections = vec![
            section("hero", -1_130.0, false),
            section("problem", 70.0, true),
            section("solution", 1_270.0, true),
        ];
        let target = pick_snap_target(scroll_top, 900.0, &sections, &config)
            .expect("should commit");
        assert_eq!(target.id, "problem");
        assert_eq!(target.target_offset, 1_120.0);
        assert!((target.distance - 10.0).abs() < 1e-9);
    }

    #[test]
    fn no_snap_from_arbitrary_resting_point() {
        let config = SnapConfig::default();
        // Mid-section: every section top is far from the viewport top.
        let scroll_top = 600.0;
        let sections = vec![
            section("hero", -600.0, false),
            section("problem", 600.0, true),
        ];
        assert_eq!(pick_snap_target(scroll_top, 900.0, &sections, &config), None);
    }

    #[test]
    fn commit_bound_is_stricter_than_close_enough() {
        let config = SnapConfig::default();
        // viewport 900 => close_enough = 135. A section 90px off passes the
        // band and the fraction gate but must not commit (90 >= 50).
        let scroll_top = 1_000.0;
        // adjusted top = 1_000 - 10 - 80 = 910 => 90px away, rect top -10
        // is well inside the ±100 band.
        let sections = vec![section("problem", -10.0, true)];
        assert_eq!(pick_snap_target(scroll_top, 900.0, &sections, &config), None);
    }

    #[test]
    fn prefers_section_inside_tight_bound() {
        let config = SnapConfig::default();
        // Two candidates within the loose band; only one inside the 50px
        // commit bound. The tight one wins.
        let scroll_top = 2_000.0;
        let sections = vec![
            // adjusted top 1_905 => 95px away
            section("solution", -15.0, true),
            // adjusted top 1_985 => 15px away
            section("problem", 65.0, true),
        ];
        let target = pick_snap_target(scroll_top, 900.0, &sections, &config)
            .expect("tight candidate should commit");
        assert_eq!(target.id, "problem");
    }

    #[test]
    fn disabled_band_excludes_far_sections() {
        let config = SnapConfig::default();
        // Section top 150px below the viewport top: outside the ±100 band
        // even though the distance gate would pass on a tall viewport.
        let sections = vec![section("contact", 150.0, true)];
        assert_eq!(
            pick_snap_target(3_000.0, 2_000.0, &sections, &config),
            None
        );
    }

    #[test]
    fn picks_minimum_distance_among_candidates() {
        let config = SnapConfig {
            commit_bound: 100.0,
            near_top_band: 200.0,
            ..SnapConfig::default()
        };
        let scroll_top = 1_000.0;
        let sections = vec![
            section("a", 40.0 + 80.0, true),  // 40px away
            section("b", -25.0 + 80.0, true), // 25px away
            section("c", 90.0 + 80.0, true),  // 90px away
        ];
        let target = pick_snap_target(scroll_top, 900.0, &sections, &config)
            .expect("should commit");
        assert_eq!(target.id, "b");
        assert!((target.distance - 25.0).abs() < 1e-9);
    }
}
