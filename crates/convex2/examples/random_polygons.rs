//! Draw a few convex point sets, build polygons and probe membership.
//!
//! Usage:
//!   cargo run -p convex2 --example random_polygons -- 5
//!
//! Prints the ordered vertices of each sample and how many of a fixed grid
//! of probe points fall inside.

use convex2::prelude::*;

fn main() {
    let count: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);
    let cfg = CircleCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: 9 },
        ..CircleCfg::default()
    };
    for index in 0..count {
        let pts = draw_convex_points(cfg, ReplayToken { seed: 2025, index });
        let poly = match ConvexPolygon::new(pts) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("sample {index}: {e}");
                continue;
            }
        };
        let verts: Vec<String> = poly.vertices().iter().map(|p| p.to_string()).collect();
        let inside = (-10..=10)
            .flat_map(|x| (-10..=10).map(move |y| Point::new(x as f64, y as f64)))
            .filter(|&q| poly.contains(q))
            .count();
        println!(
            "sample {index}: n={}, inside={inside}/441, vertices=[{}]",
            poly.len(),
            verts.join(", ")
        );
    }
}
