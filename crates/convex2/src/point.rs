//! Immutable 2D coordinate pair.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;

/// A point in the plane.
///
/// Equality is exact field-wise comparison; two points with equal
/// coordinates are interchangeable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Both coordinates are finite (no NaN, no infinities).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Lexicographic total order: `x` first, then `y`, via `f64::total_cmp`.
    ///
    /// Used as the tie-break when two points sit at exactly the same angle.
    #[inline]
    pub fn total_cmp(&self, other: &Point) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    // `{:?}` keeps the fractional part: `(13.0, 10.0)`, not `(13, 10)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_and_equality() {
        let p = Point::new(1.2, 0.0);
        assert_eq!(p.x(), 1.2);
        assert_eq!(p.y(), 0.0);
        assert_eq!(p, Point::from((1.2, 0.0)));
        assert_ne!(p, Point::new(1.2, 1e-300));
    }

    #[test]
    fn display_keeps_fraction() {
        assert_eq!(Point::new(13.0, 10.0).to_string(), "(13.0, 10.0)");
        assert_eq!(Point::new(-4.5, 0.25).to_string(), "(-4.5, 0.25)");
    }

    #[test]
    fn total_cmp_is_lexicographic() {
        let a = Point::new(1.0, 5.0);
        let b = Point::new(2.0, -5.0);
        let c = Point::new(1.0, 6.0);
        assert_eq!(a.total_cmp(&b), Ordering::Less);
        assert_eq!(a.total_cmp(&c), Ordering::Less);
        assert_eq!(b.total_cmp(&c), Ordering::Greater);
        assert_eq!(a.total_cmp(&a), Ordering::Equal);
    }

    #[test]
    fn finiteness() {
        assert!(Point::new(0.0, -3.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn nalgebra_round_trip() {
        let p = Point::new(3.0, -7.5);
        assert_eq!(Point::from(p.to_vec2()), p);
    }
}
