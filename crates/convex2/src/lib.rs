//! Convex polygons from unordered point sets.
//!
//! Pipeline
//! - `Point`s come in unordered; `ConvexPolygon::new` sorts them by angle
//!   around their centroid, checks that every turn is counterclockwise, and
//!   freezes the result.
//! - `ConvexPolygon::contains` answers boundary-inclusive membership queries.
//!
//! Numerics are plain IEEE doubles; every geometric predicate is an exact
//! sign test with no tolerance.

pub mod order;
pub mod point;
pub mod polygon;
pub mod rand;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use order::{centroid, sort_counterclockwise};
pub use point::Point;
pub use polygon::{ConvexPolygon, PolygonError};
pub use vector::{angle_between, Vector};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::order::{centroid, sort_counterclockwise};
    pub use crate::point::Point;
    pub use crate::polygon::{ConvexPolygon, PolygonError};
    pub use crate::rand::{draw_convex_points, CircleCfg, ReplayToken, VertexCount};
    pub use crate::vector::{angle_between, Vector};
}
