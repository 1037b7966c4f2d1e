//! Convex polygon with counterclockwise vertex order.
//!
//! Construction
//! - Reject non-finite points, then fewer than three points.
//! - Sort by angle around the centroid (`order::sort_counterclockwise`).
//! - Require a strictly positive turn at every vertex. Three collinear
//!   consecutive vertices count as a violation.
//!
//! Membership is boundary-inclusive: a point on an edge or at a vertex is
//! contained.

use std::fmt;

use crate::order::{centroid, sort_counterclockwise};
use crate::point::Point;
use crate::vector::Vector;

/// Why a point set could not become a `ConvexPolygon`.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonError {
    /// Fewer than three points were supplied.
    TooFewPoints { got: usize },
    /// The turn at `vertex` (in sorted order) is not strictly counterclockwise.
    NotConvex { vertex: Point, cross: f64 },
    /// The input point at `index` has a NaN or infinite coordinate.
    InvalidElement { index: usize, point: Point },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::TooFewPoints { got } => {
                write!(f, "number of points must be 3 or greater (got {got})")
            }
            PolygonError::NotConvex { vertex, cross } => write!(
                f,
                "polygon is not convex: turn at {vertex} has cross product {cross:?}"
            ),
            PolygonError::InvalidElement { index, point } => {
                write!(f, "point {index} is not a finite coordinate pair: {point}")
            }
        }
    }
}

impl std::error::Error for PolygonError {}

/// Convex polygon, vertices in strict counterclockwise order.
///
/// Invariants (established by `new`, never revisited):
/// - at least three finite vertices;
/// - sorted by angle around the vertex centroid, starting from the east ray;
/// - every cyclic turn `p[i] → p[i+1] → p[i+2]` has a positive cross product.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    points: Vec<Point>,
}

impl ConvexPolygon {
    /// Order `points` counterclockwise and validate convexity.
    pub fn new(points: Vec<Point>) -> Result<Self, PolygonError> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(PolygonError::InvalidElement {
                index,
                point: points[index],
            });
        }
        if points.len() < 3 {
            return Err(PolygonError::TooFewPoints { got: points.len() });
        }
        let points = sort_counterclockwise(points);
        check_convex(&points)?;
        Ok(Self { points })
    }

    /// Convenience wrapper over `new` for raw coordinate pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self, PolygonError> {
        Self::new(coords.iter().copied().map(Point::from).collect())
    }

    /// Vertices in counterclockwise order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if there are no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Vertex average (the pivot used for ordering).
    pub fn centroid(&self) -> Point {
        // len >= 3 by construction
        centroid(&self.points).unwrap_or(self.points[0])
    }

    /// Boundary edges `p[i] → p[i+1]`, wrapping at the end.
    pub fn edges(&self) -> impl Iterator<Item = Vector> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Vector::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Boundary-inclusive membership.
    ///
    /// The query is outside as soon as it lies strictly to the right of some
    /// edge (negative cross product of the edge with `edge.end → point`).
    /// A NaN cross product is not negative, so it never excludes the query.
    pub fn contains(&self, point: Point) -> bool {
        !self
            .edges()
            .any(|edge| edge.cross(&Vector::new(edge.end(), point)) < 0.0)
    }
}

impl TryFrom<Vec<Point>> for ConvexPolygon {
    type Error = PolygonError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

fn check_convex(points: &[Point]) -> Result<(), PolygonError> {
    let n = points.len();
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let cross = Vector::new(a, b).cross(&Vector::new(b, c));
        if cross <= 0.0 {
            return Err(PolygonError::NotConvex { vertex: b, cross });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn unit_square_contains_edges_and_corners() {
        let sq = ConvexPolygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
            .unwrap();
        assert_eq!(sq.len(), 4);
        assert!(sq.contains(Point::new(0.5, 0.5)));
        assert!(sq.contains(Point::new(0.5, 0.0)));
        assert!(sq.contains(Point::new(1.0, 1.0)));
        assert!(!sq.contains(Point::new(1.0 + 1e-12, 0.5)));
        assert!(!sq.contains(Point::new(-0.5, -0.5)));
    }

    #[test]
    fn nan_query_is_only_excluded_by_a_negative_cross() {
        let sq = ConvexPolygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
            .unwrap();
        assert!(sq.contains(Point::new(f64::NAN, 0.5)));
        assert!(sq.contains(Point::new(f64::NAN, f64::NAN)));
    }

    #[test]
    fn edges_wrap_around() {
        let tri = ConvexPolygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]).unwrap();
        let edges: Vec<_> = tri.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].end(), tri.vertices()[0]);
        let perimeter: f64 = edges.iter().map(|e| e.magnitude()).sum();
        assert!((perimeter - 12.0).abs() < 1e-12);
    }

    #[test]
    fn collinear_triple_is_rejected() {
        // (1, 0) lies on the edge between (0, 0) and (2, 0).
        let err = ConvexPolygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (1.0, 2.0)])
            .unwrap_err();
        match err {
            PolygonError::NotConvex { cross, .. } => assert_eq!(cross, 0.0),
            other => panic!("expected NotConvex, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_point_is_invalid() {
        let err =
            ConvexPolygon::new(pts(&[(0.0, 0.0), (f64::NAN, 1.0), (1.0, 0.0)])).unwrap_err();
        assert!(matches!(err, PolygonError::InvalidElement { index: 1, .. }));
        let err = ConvexPolygon::new(pts(&[(f64::INFINITY, 0.0), (0.0, 1.0)])).unwrap_err();
        assert!(matches!(err, PolygonError::InvalidElement { index: 0, .. }));
    }

    #[test]
    fn too_few_points() {
        assert_eq!(
            ConvexPolygon::new(Vec::new()).unwrap_err(),
            PolygonError::TooFewPoints { got: 0 }
        );
        assert_eq!(
            ConvexPolygon::try_from(pts(&[(6.0, 5.0), (-3.0, -4.0)])).unwrap_err(),
            PolygonError::TooFewPoints { got: 2 }
        );
    }

    #[test]
    fn error_messages() {
        let e = PolygonError::TooFewPoints { got: 2 };
        assert_eq!(e.to_string(), "number of points must be 3 or greater (got 2)");
        let e = PolygonError::NotConvex {
            vertex: Point::new(9.0, 10.0),
            cross: -4.0,
        };
        assert!(e.to_string().starts_with("polygon is not convex"));
        assert!(e.to_string().contains("(9.0, 10.0)"));
    }

    #[test]
    fn centroid_matches_vertex_mean() {
        let tri = ConvexPolygon::from_coords(&[(0.0, 0.0), (3.0, 0.0), (0.0, 3.0)]).unwrap();
        assert_eq!(tri.centroid(), Point::new(1.0, 1.0));
        assert!(tri.contains(tri.centroid()));
    }
}
