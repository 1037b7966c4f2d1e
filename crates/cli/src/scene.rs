//! What the rendering side consumes: an evaluation report and a plot scene.
//!
//! No drawing happens here. The scene lists the closed outline, labelled
//! vertices, and a colored query marker; any plotting tool can replay it.

use convex2::{ConvexPolygon, Point};
use serde::Serialize;

/// Sentence printed for a query result, e.g. `Polygon contains point (1.0, 2.0)`.
pub fn verdict(query: Point, contains: bool) -> String {
    if contains {
        format!("Polygon contains point {query}")
    } else {
        format!("Polygon doesn't contain point {query}")
    }
}

/// One polygon + query outcome.
#[derive(Clone, Debug, Serialize)]
pub struct Evaluation {
    /// Vertices in counterclockwise order.
    pub vertices: Vec<[f64; 2]>,
    pub query: [f64; 2],
    pub contains: bool,
}

impl Evaluation {
    pub fn new(poly: &ConvexPolygon, query: Point) -> Self {
        Self {
            vertices: poly.vertices().iter().map(|&p| xy(p)).collect(),
            query: xy(query),
            contains: poly.contains(query),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Marker {
    pub at: [f64; 2],
    pub color: &'static str,
    pub size: f64,
    pub label: String,
    /// Label position relative to `at`.
    pub label_offset: [f64; 2],
}

#[derive(Clone, Debug, Serialize)]
pub struct Scene {
    /// Outline with the first vertex repeated at the end.
    pub outline: Vec<[f64; 2]>,
    pub vertices: Vec<Marker>,
    pub query: Marker,
    pub caption: String,
    pub grid: bool,
}

const VERTEX_COLOR: &str = "darkorange";
const LABEL_OFFSET: [f64; 2] = [0.1, 0.1];
// Rightmost labels would run off the plot; put them to the left.
const RIGHT_EDGE_LABEL_OFFSET: [f64; 2] = [-0.4, 0.1];

impl Scene {
    pub fn new(poly: &ConvexPolygon, query: Point, contains: bool) -> Self {
        let verts = poly.vertices();
        let max_x = verts.iter().map(|p| p.x()).fold(f64::NEG_INFINITY, f64::max);
        let mut outline: Vec<[f64; 2]> = verts.iter().map(|&p| xy(p)).collect();
        outline.push(xy(verts[0]));
        let vertices = verts
            .iter()
            .map(|&p| Marker {
                at: xy(p),
                color: VERTEX_COLOR,
                size: 70.0,
                label: p.to_string(),
                label_offset: if p.x() == max_x {
                    RIGHT_EDGE_LABEL_OFFSET
                } else {
                    LABEL_OFFSET
                },
            })
            .collect();
        let query_marker = Marker {
            at: xy(query),
            color: if contains { "green" } else { "red" },
            size: 90.0,
            label: query.to_string(),
            label_offset: LABEL_OFFSET,
        };
        Self {
            outline,
            vertices,
            query: query_marker,
            caption: verdict(query, contains),
            grid: true,
        }
    }
}

#[inline]
fn xy(p: Point) -> [f64; 2] {
    [p.x(), p.y()]
}
