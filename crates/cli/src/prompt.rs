//! Interactive console collection of polygon vertices and a query point.
//!
//! Generic over `BufRead`/`Write` so tests can drive it with in-memory buffers.
//! Bad input never aborts: non-numbers and duplicates re-prompt. Only a
//! closed input stream is an error.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use convex2::Point;

/// What the prompt hands to the polygon stage.
#[derive(Clone, Debug, PartialEq)]
pub struct Collected {
    pub points: Vec<Point>,
    pub query: Point,
}

/// Ask for a vertex count, that many distinct vertices, then the query point.
pub fn collect<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Collected> {
    let count = ask_count(input, out)?;
    tracing::debug!(count, "vertex count accepted");
    writeln!(out, "Enter points coordinates:")?;

    let mut points: Vec<Point> = Vec::new();
    while points.len() < count {
        writeln!(out, "  Point {}:", points.len() + 1)?;
        let Some(p) = ask_point(input, out)? else {
            writeln!(out, "Coordinate must be a number!")?;
            continue;
        };
        if points.contains(&p) {
            writeln!(out, "Point with this coordinates already exists!")?;
            continue;
        }
        points.push(p);
    }

    let query = loop {
        writeln!(out, "\n  Point to check:")?;
        match ask_point(input, out)? {
            Some(p) => break p,
            None => writeln!(out, "Coordinate must be a number!")?,
        }
    };
    Ok(Collected { points, query })
}

fn ask_count<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<usize> {
    let mut too_small = false;
    loop {
        let prompt = if too_small {
            "Enter a number larger than 2: "
        } else {
            "Enter a number of points of polygon: "
        };
        match ask(input, out, prompt)?.parse::<i64>() {
            Ok(n) if n >= 3 => return Ok(n as usize),
            Ok(0) | Err(_) => too_small = false,
            Ok(_) => too_small = true,
        }
    }
}

/// `None` when either coordinate is not a finite number; Y is not asked if X fails.
fn ask_point<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<Point>> {
    let Some(x) = parse_coordinate(&ask(input, out, "    X: ")?) else {
        return Ok(None);
    };
    let Some(y) = parse_coordinate(&ask(input, out, "    Y: ")?) else {
        return Ok(None);
    };
    Ok(Some(Point::new(x, y)))
}

fn parse_coordinate(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed before all points were entered");
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (Result<Collected>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let res = collect(&mut input, &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn happy_path() {
        let (res, out) = run("3\n6\n5\n-3\n-4\n10\n-4\n1\n1\n");
        let c = res.unwrap();
        assert_eq!(
            c.points,
            vec![Point::new(6.0, 5.0), Point::new(-3.0, -4.0), Point::new(10.0, -4.0)]
        );
        assert_eq!(c.query, Point::new(1.0, 1.0));
        assert!(out.starts_with("Enter a number of points of polygon: Enter points coordinates:"));
        assert!(out.contains("  Point 3:"));
        assert!(out.contains("\n  Point to check:"));
    }

    #[test]
    fn count_retries() {
        let (res, out) = run("abc\n2\n-7\n3\n0\n0\n1\n0\n0\n1\n0.2\n0.2\n");
        assert_eq!(res.unwrap().points.len(), 3);
        assert_eq!(out.matches("Enter a number of points of polygon: ").count(), 2);
        assert_eq!(out.matches("Enter a number larger than 2: ").count(), 2);
    }

    #[test]
    fn zero_count_asks_from_scratch() {
        let (res, out) = run("0\n1\n0\n3\n0\n0\n1\n0\n0\n1\n0.2\n0.2\n");
        assert_eq!(res.unwrap().points.len(), 3);
        assert_eq!(out.matches("Enter a number of points of polygon: ").count(), 3);
        assert_eq!(out.matches("Enter a number larger than 2: ").count(), 1);
    }

    #[test]
    fn huge_count_waits_for_points() {
        let (res, out) = run("9000000000000000000\n");
        assert!(res.is_err());
        assert!(out.contains("  Point 1:"));
    }

    #[test]
    fn bad_coordinate_and_duplicate_reprompt() {
        let script = "3\n0\n0\nx\n0\nnan\n0\n0\n1\n0\n0\n1\n5\n5\n";
        let (res, out) = run(script);
        let c = res.unwrap();
        assert_eq!(
            c.points,
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)]
        );
        assert_eq!(c.query, Point::new(5.0, 5.0));
        assert_eq!(out.matches("Coordinate must be a number!").count(), 2);
        assert_eq!(out.matches("Point with this coordinates already exists!").count(), 1);
        assert_eq!(out.matches("  Point 2:").count(), 4);
    }

    #[test]
    fn query_may_repeat_a_vertex() {
        let (res, _) = run("3\n0\n0\n1\n0\n0\n1\n0\n0\n");
        assert_eq!(res.unwrap().query, Point::new(0.0, 0.0));
    }

    #[test]
    fn closed_input_is_an_error() {
        let (res, _) = run("3\n0\n0\n");
        assert!(res.is_err());
    }
}
