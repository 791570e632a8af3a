//! The rope's sag profile.

/// Vertical sag of the rope at normalized progress `t`, in `[0, 1]`.
///
/// Downward-opening parabola `1 − (2t − 1)²`: zero at both anchors,
/// peaking at `t = 0.5`. Stands in for a true catenary; the two curves
/// differ by at most ~0.005 of the slack.
pub fn sag_factor(t: f32) -> f32 {
    1.0 - (2.0 * t - 1.0).powi(2)
}

/// Linear interpolation with exact endpoints.
///
/// `t == 1` returns `b` itself, so the rope end sits exactly on the right
/// anchor instead of drifting off it through float rounding.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    if t == 1.0 { b } else { a + t * (b - a) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sag_is_zero_at_anchors() {
        assert_eq!(sag_factor(0.0), 0.0);
        assert_eq!(sag_factor(1.0), 0.0);
    }

    #[test]
    fn sag_peaks_at_midpoint() {
        assert_eq!(sag_factor(0.5), 1.0);
    }

    #[test]
    fn lerp_hits_both_endpoints_exactly() {
        assert_eq!(lerp(3.7, 19.1, 0.0), 3.7);
        assert_eq!(lerp(3.7, 19.1, 1.0), 19.1);
    }

    proptest! {
        #[test]
        fn sag_symmetric_about_midpoint(t in 0.0f32..=1.0) {
            let mirrored = sag_factor(1.0 - t);
            prop_assert!((sag_factor(t) - mirrored).abs() <= 1e-5);
        }

        #[test]
        fn sag_stays_in_unit_range(t in 0.0f32..=1.0) {
            let s = sag_factor(t);
            prop_assert!((0.0..=1.0).contains(&s));
        }

        #[test]
        fn lerp_endpoints_exact(a in -1e6f32..1e6, b in -1e6f32..1e6) {
            // t == 1 is special-cased, so the right endpoint is bit-exact.
            prop_assert_eq!(lerp(a, b, 1.0).to_bits(), b.to_bits());
            prop_assert_eq!(lerp(a, b, 0.0), a);
        }

        #[test]
        fn lerp_stays_between_endpoints(a in -1e6f32..1e6, b in -1e6f32..1e6, t in 0.0f32..=1.0) {
            let v = lerp(a, b, t);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let eps = 1e-4 * (1.0 + a.abs().max(b.abs()));
            prop_assert!(v >= lo - eps && v <= hi + eps);
        }
    }
}
