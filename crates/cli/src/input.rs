//! Non-interactive point sources: `X,Y` arguments and CSV/Parquet tables.
//!
//! Duplicate rejection lives here, not in the geometry crate: the polygon
//! constructor assumes distinct points.

use std::fmt;
use std::path::Path;

use anyhow::{bail, Context, Result};
use convex2::Point;
use polars::prelude::*;

/// Two input points share both coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DuplicatePoint {
    pub first: usize,
    pub second: usize,
    pub point: Point,
}

impl fmt::Display for DuplicatePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "point with coordinates {} already exists (entries {} and {})",
            self.point, self.first, self.second
        )
    }
}

impl std::error::Error for DuplicatePoint {}

/// Parse `X,Y` (whitespace around either number is allowed).
///
/// Used as a clap value parser, hence the `String` error.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
    let coord = |v: &str| -> Result<f64, String> {
        let v = v.trim();
        match v.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(f),
            _ => Err(format!("coordinate must be a number: {v:?}")),
        }
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

/// First pair of exactly equal points, by input position.
pub fn find_duplicate(points: &[Point]) -> Option<DuplicatePoint> {
    points.iter().enumerate().find_map(|(second, p)| {
        points[..second]
            .iter()
            .position(|q| q == p)
            .map(|first| DuplicatePoint {
                first,
                second,
                point: *p,
            })
    })
}

pub fn reject_duplicates(points: &[Point]) -> Result<(), DuplicatePoint> {
    match find_duplicate(points) {
        Some(dup) => Err(dup),
        None => Ok(()),
    }
}

/// Read columns `x` and `y` (cast to f64) from a `.csv` or `.parquet` file.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let is_parquet = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));
    let scanned = if is_parquet {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())
    } else {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
    };
    let lf = scanned.with_context(|| format!("opening {}", path.display()))?;

    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns x,y from {}", path.display()))?;
    tracing::debug!(rows = df.height(), path = %path.display(), "points table loaded");

    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push(Point::new(x, y)),
            _ => bail!("row {row} of {} has a missing coordinate", path.display()),
        }
    }
    Ok(points)
}

/// Write points as a two-column CSV (`x,y`) with header.
pub fn write_points_csv(path: &Path, points: &[Point]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let xs: Vec<f64> = points.iter().map(|p| p.x()).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y()).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    Ok(())
}
