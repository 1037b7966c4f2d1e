//! Free 2D vectors derived from two points, plus the counterclockwise angle.
//!
//! A `Vector` is never built from raw components: it always records the
//! `(start, end)` pair it came from, and its components are `end - start`.

use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;

use crate::point::Point;

/// Vector `start → end`.
///
/// Invariant: `x()`/`y()` always equal `end - start`, computed once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    start: Point,
    end: Point,
    v: Vector2<f64>,
}

impl Vector {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            v: end.to_vec2() - start.to_vec2(),
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.v.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.v.y
    }
    #[inline]
    pub fn as_vec2(&self) -> Vector2<f64> {
        self.v
    }

    /// Euclidean norm; `0.0` for the zero vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.v.norm()
    }

    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.v.dot(&other.v)
    }

    /// 2D cross product `self.x * other.y - self.y * other.x`.
    /// Positive when `other` turns counterclockwise from `self`.
    #[inline]
    pub fn cross(&self, other: &Vector) -> f64 {
        self.v.perp(&other.v)
    }
}

/// Angle swept counterclockwise from `v1` to `v2`, in `[0, 2π)`.
///
/// - Unsigned angle from `acos(dot / (|v1| |v2|))`; the ratio is clamped to
///   `[-1, 1]` so rounding cannot yield NaN.
/// - A zero-length argument gives `0.0`.
/// - Negative cross product (`v2` clockwise of `v1`) maps the angle to `2π - angle`.
/// - Exactly parallel vectors (cross == 0) give `0.0` (same direction) or `π`.
pub fn angle_between(v1: &Vector, v2: &Vector) -> f64 {
    let mag_prod = v1.magnitude() * v2.magnitude();
    if mag_prod == 0.0 {
        return 0.0;
    }
    let dot = v1.dot(v2);
    let orientation = v1.cross(v2);
    if orientation == 0.0 {
        return if dot > 0.0 { 0.0 } else { PI };
    }
    let angle = (dot / mag_prod).clamp(-1.0, 1.0).acos();
    if orientation < 0.0 {
        let ccw = TAU - angle;
        // keep the range half-open
        if ccw >= TAU {
            0.0
        } else {
            ccw
        }
    } else {
        angle
    }
}
