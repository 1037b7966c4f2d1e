//! Angular ordering of a point set around its centroid.
//!
//! Angle zero points "east" of the centroid; angles grow counterclockwise.
//! For a set in convex position this recovers the counterclockwise boundary
//! traversal from any input permutation.

use crate::point::Point;
use crate::vector::{angle_between, Vector};

/// Arithmetic mean of the coordinates. `None` for an empty slice.
///
/// This is the vertex average used as the sorting pivot, not the area centroid.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x(), sy + p.y()));
    let n = points.len() as f64;
    Some(Point::new(sum_x / n, sum_y / n))
}

/// Sort points by counterclockwise angle from the east ray through the centroid.
///
/// Exact angle ties fall back to `Point::total_cmp` (x, then y). The sort is
/// stable, so exact duplicates keep their input order.
pub fn sort_counterclockwise(points: Vec<Point>) -> Vec<Point> {
    let Some(center) = centroid(&points) else {
        return points;
    };
    let east = Vector::new(center, Point::new(center.x() + 1.0, center.y()));
    let mut keyed: Vec<(f64, Point)> = points
        .into_iter()
        .map(|p| (angle_between(&east, &Vector::new(center, p)), p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.total_cmp(&b.1)));
    keyed.into_iter().map(|(_, p)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn centroid_is_mean() {
        let c = centroid(&pts(&[(6.0, 5.0), (-3.0, -4.0), (10.0, -4.0)])).unwrap();
        assert!((c.x() - 13.0 / 3.0).abs() < 1e-12);
        assert!((c.y() + 1.0).abs() < 1e-12);
        assert!(centroid(&[]).is_none());
    }

    #[test]
    fn sorts_triangle_from_any_rotation() {
        let expected = pts(&[(6.0, 5.0), (-3.0, -4.0), (10.0, -4.0)]);
        for shift in 0..3 {
            let mut input = expected.clone();
            input.rotate_left(shift);
            assert_eq!(sort_counterclockwise(input), expected);
        }
    }

    #[test]
    fn east_point_comes_first() {
        // Square centered at the origin, rotated by 45°: (1, 0) sits exactly east.
        let input = pts(&[(0.0, -1.0), (-1.0, 0.0), (0.0, 1.0), (1.0, 0.0)]);
        assert_eq!(
            sort_counterclockwise(input),
            pts(&[(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)])
        );
    }

    #[test]
    fn exact_angle_ties_use_point_order() {
        // (1, 1) and (2, 2) lie on the same ray from the centroid (0, 0).
        let input = pts(&[(2.0, 2.0), (-3.0, -3.0), (1.0, 1.0), (0.0, 0.0)]);
        assert_eq!(
            sort_counterclockwise(input),
            pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (-3.0, -3.0)])
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(sort_counterclockwise(Vec::new()).is_empty());
    }
}
