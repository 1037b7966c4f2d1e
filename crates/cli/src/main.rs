mod input;
mod prompt;
mod provenance;
mod scene;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use convex2::rand::{draw_convex_points, CircleCfg, ReplayToken, VertexCount};
use convex2::{ConvexPolygon, Point};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::input::{parse_point, read_points, reject_duplicates, write_points_csv};
use crate::provenance::{document, write_sidecar, Payload};
use crate::scene::{verdict, Evaluation, Scene};

#[derive(Parser)]
#[command(name = "convex2")]
#[command(about = "Order a convex polygon's vertices and test point membership")]
struct Cmd {
    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Prompt for vertices and a query point on stdin (default)
    Interactive,
    /// Build the polygon and test one query point
    Check {
        #[command(flatten)]
        src: PointsArgs,
        /// Query point as X,Y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        query: Point,
        /// Print a JSON report instead of a sentence
        #[arg(long)]
        json: bool,
    },
    /// Write a plot scene (outline, labels, colored query) as JSON
    Figure {
        #[command(flatten)]
        src: PointsArgs,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        query: Point,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a reproducible convex point set as CSV (columns x,y)
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 8)]
        vertices: usize,
        #[arg(long, default_value_t = 10.0)]
        radius: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct PointsArgs {
    /// Polygon vertex as X,Y (repeat for each vertex)
    #[arg(
        long = "point",
        value_parser = parse_point,
        allow_hyphen_values = true,
        required_unless_present = "input",
        conflicts_with = "input"
    )]
    points: Vec<Point>,
    /// CSV or Parquet file with columns x,y
    #[arg(long)]
    input: Option<PathBuf>,
}

impl PointsArgs {
    fn load(&self) -> Result<Vec<Point>> {
        let points = match &self.input {
            Some(path) => read_points(path)?,
            None => self.points.clone(),
        };
        reject_duplicates(&points)?;
        Ok(points)
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    match cmd.action.unwrap_or(Action::Interactive) {
        Action::Interactive => interactive(),
        Action::Check { src, query, json } => check(&src, query, json),
        Action::Figure { src, query, out } => figure(&src, query, &out),
        Action::Sample {
            seed,
            index,
            vertices,
            radius,
            out,
        } => sample(seed, index, vertices, radius, &out),
        Action::Report => report(),
    }
}

fn build(points: Vec<Point>) -> Result<ConvexPolygon> {
    let n = points.len();
    let poly = ConvexPolygon::new(points).inspect_err(|err| {
        tracing::warn!(%err, points = n, "polygon rejected");
    })?;
    tracing::debug!(vertices = poly.len(), "polygon built");
    Ok(poly)
}

fn interactive() -> Result<()> {
    tracing::info!("interactive");
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    let collected = prompt::collect(&mut input, &mut out)?;
    let poly = build(collected.points)?;
    let contains = poly.contains(collected.query);
    writeln!(out, "{}", verdict(collected.query, contains))?;
    Ok(())
}

fn check(src: &PointsArgs, query: Point, json: bool) -> Result<()> {
    let poly = build(src.load()?)?;
    let ev = Evaluation::new(&poly, query);
    tracing::info!(vertices = poly.len(), %query, contains = ev.contains, "check");
    if json {
        println!("{}", serde_json::to_string_pretty(&ev)?);
    } else {
        println!("{}", verdict(query, ev.contains));
    }
    Ok(())
}

fn figure(src: &PointsArgs, query: Point, out: &Path) -> Result<()> {
    let poly = build(src.load()?)?;
    let contains = poly.contains(query);
    tracing::info!(out = %out.display(), contains, "figure");
    let scene = Scene::new(&poly, query, contains);
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&scene)?)
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(
        out,
        Payload::new(serde_json::json!({
            "command": "figure",
            "vertices": poly.len(),
            "query": [query.x(), query.y()],
            "contains": contains,
        })),
    )?;
    Ok(())
}

fn sample(seed: u64, index: u64, vertices: usize, radius: f64, out: &Path) -> Result<()> {
    let cfg = CircleCfg {
        vertex_count: VertexCount::Fixed(vertices),
        radius,
        ..CircleCfg::default()
    };
    let points = draw_convex_points(cfg, ReplayToken { seed, index });
    tracing::info!(seed, index, vertices = points.len(), out = %out.display(), "sample");
    write_points_csv(out, &points)?;
    write_sidecar(
        out,
        Payload::new(serde_json::json!({
            "command": "sample",
            "seed": seed,
            "index": index,
            "vertices": points.len(),
            "radius": radius,
        })),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = document(serde_json::json!({}), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
