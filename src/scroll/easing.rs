//! Easing curve for scroll animations.

/// Quartic ease-out: f(t) = 1 - (1-t)^4.
///
/// Starts fast and settles gently, which reads as "the page arrives" rather
/// than "the page lurches". Input is clamped to [0, 1].
#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert!((ease_out_quart(0.0)).abs() < 1e-9);
        assert!((ease_out_quart(1.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn clamps_out_of_range_input() {
        assert!((ease_out_quart(-0.5)).abs() < 1e-9);
        assert!((ease_out_quart(1.5) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_out_quart(i as f64 / 100.0);
            assert!(v >= prev, "not monotonic at t={}", i as f64 / 100.0);
            prev = v;
        }
    }

    #[test]
    fn ease_out_shape() {
        // An ease-out curve stays above the linear diagonal in the interior.
        for i in 1..100 {
            let t = i as f64 / 100.0;
            assert!(ease_out_quart(t) > t, "not ease-out at t={t}");
        }
    }
}
