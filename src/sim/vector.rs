//! 2D vector helpers
//!
//! The simulation uses [`glam::Vec2`] as its vector type. Add, subtract,
//! scale, divide, dot and length come straight from glam. Division by a zero
//! scalar is a caller precondition and is not checked.
//!
//! The helpers here keep bounce math total: normalizing a zero (or non-finite)
//! vector yields zero instead of NaN.

use glam::Vec2;

/// Unit vector in the direction of `v`, or zero when `v` has no usable length
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Reflect a velocity across a unit surface normal
///
/// Standard elastic reflection: v' = v - 2(v·n)n. Speed is preserved when
/// `normal` is unit length.
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_arithmetic() {
        let a = Vec2::new(1.5, -2.0);
        let b = Vec2::new(-0.5, 4.0);
        assert_eq!(a + b, Vec2::new(1.0, 2.0));
        assert_eq!(Vec2::new(5.0, 3.0) - Vec2::new(2.0, 7.0), Vec2::new(3.0, -4.0));
        assert_eq!(Vec2::new(3.0, -4.0) * 2.0, Vec2::new(6.0, -8.0));
        assert_eq!(Vec2::new(8.0, -6.0) / 2.0, Vec2::new(4.0, -3.0));

        // ((a + b) * 2 - b) / 2 with a=(1,2), b=(3,4)
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(((a + b) * 2.0 - b) / 2.0, Vec2::new(2.5, 4.0));
    }

    #[test]
    fn test_dot_and_length() {
        let a = Vec2::new(3.0, 4.0);
        assert_eq!(a.dot(Vec2::new(-2.0, 5.0)), 14.0);
        assert_eq!(a.length(), 5.0);
        // Projection onto a normalized axis
        assert!((a.dot(normalize(Vec2::new(5.0, 0.0))) - 3.0).abs() < EPS);
    }

    #[test]
    fn test_normalize() {
        let n = normalize(Vec2::new(10.0, 0.0));
        assert!((n - Vec2::X).length() < EPS);

        let n = normalize(Vec2::new(5.0, 5.0));
        let expected = 1.0 / 2.0_f32.sqrt();
        assert!((n.x - expected).abs() < EPS);
        assert!((n.y - expected).abs() < EPS);
        assert!((n.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        let n = normalize(Vec2::ZERO);
        assert_eq!(n, Vec2::ZERO);
        assert_eq!(n.length(), 0.0);
    }

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits vertical wall (normal pointing left)
        let reflected = reflect(Vec2::new(100.0, 0.0), Vec2::new(-1.0, 0.0));
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);

        // Tangential component is untouched
        let reflected = reflect(Vec2::new(180.0, 240.0), Vec2::NEG_Y);
        assert_eq!(reflected, Vec2::new(180.0, -240.0));
    }
}
