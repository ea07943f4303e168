/// Cubic ease-in-out: `t < 0.5 -> 4t^3`, else `1 - (-2t+2)^3 / 2`.
///
/// Zero velocity at both ends, so blends start and finish without snapping.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// GLSL-style `mix(a, b, t)` for scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Clamp that maps non-finite input to the lower bound instead of NaN.
#[inline]
pub fn clamp_finite(v: f32, lo: f32, hi: f32) -> f32 {
    if v.is_finite() {
        v.clamp(lo, hi)
    } else {
        lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_easing_monotonic() {
        let mut prev = ease_in_out_cubic(0.0);
        for i in 1..=100 {
            let cur = ease_in_out_cubic(i as f32 / 100.0);
            assert!(
                cur >= prev,
                "easing must be non-decreasing: f({}) = {} < {}",
                i as f32 / 100.0,
                cur,
                prev
            );
            prev = cur;
        }
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(3.0, 7.0, 0.0), 3.0);
        assert_eq!(lerp(3.0, 7.0, 1.0), 7.0);
    }

    #[test]
    fn test_clamp_finite_rejects_nan() {
        assert_eq!(clamp_finite(f32::NAN, 1.0, 2.0), 1.0);
        assert_eq!(clamp_finite(f32::INFINITY, 1.0, 2.0), 1.0);
        assert_eq!(clamp_finite(1.5, 1.0, 2.0), 1.5);
    }
}
