//! Monotone cubic path generation
//!
//! Produces SVG path data for a run of points, interpolated with the
//! Fritsch-Carlson monotone cubic (monotone in x). The curve passes through
//! every point and never overshoots between two of them, so a flat run of
//! equal scores stays flat.

use std::fmt::Write as _;

/// A point in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

fn sign(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Tangent at an interior point from its two neighbours
fn interior_tangent(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = (p1.y - p0.y) / h0;
    let s1 = (p2.y - p1.y) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() {
        t
    } else {
        0.0
    }
}

/// One-sided tangent at an end point, given the neighbouring tangent
fn end_tangent(p0: Point, p1: Point, neighbour: f64) -> f64 {
    let h = p1.x - p0.x;
    if h == 0.0 {
        return neighbour;
    }
    (3.0 * (p1.y - p0.y) / h - neighbour) / 2.0
}

/// Tangents for every point of a run of three or more
fn tangents(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    let mut t = vec![0.0; n];

    for i in 1..n - 1 {
        t[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
    }
    t[0] = end_tangent(points[0], points[1], t[1]);
    t[n - 1] = end_tangent(points[n - 2], points[n - 1], t[n - 2]);

    t
}

/// SVG path data for one contiguous run of points
///
/// A single point yields a bare move command (nothing visible is stroked);
/// two points yield a straight line.
pub fn monotone_path(points: &[Point]) -> String {
    let mut d = String::new();

    let Some(first) = points.first() else {
        return d;
    };
    let _ = write!(d, "M{},{}", fmt(first.x), fmt(first.y));

    match points.len() {
        1 => {}
        2 => {
            let _ = write!(d, "L{},{}", fmt(points[1].x), fmt(points[1].y));
        }
        _ => {
            let t = tangents(points);
            for i in 0..points.len() - 1 {
                let (a, b) = (points[i], points[i + 1]);
                let dx = (b.x - a.x) / 3.0;
                let _ = write!(
                    d,
                    "C{},{},{},{},{},{}",
                    fmt(a.x + dx),
                    fmt(a.y + dx * t[i]),
                    fmt(b.x - dx),
                    fmt(b.y - dx * t[i + 1]),
                    fmt(b.x),
                    fmt(b.y)
                );
            }
        }
    }

    d
}

/// Fixed two-decimal coordinates keep output stable across renders
pub(crate) fn fmt(v: f64) -> String {
    let s = format!("{:.2}", v);
    match s.trim_end_matches('0').trim_end_matches('.') {
        "-0" => "0".to_string(),
        trimmed => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(monotone_path(&[]), "");
        assert_eq!(monotone_path(&[pt(1.0, 2.0)]), "M1,2");
    }

    #[test]
    fn test_two_points_is_straight() {
        assert_eq!(monotone_path(&[pt(0.0, 0.0), pt(10.0, 5.5)]), "M0,0L10,5.5");
    }

    #[test]
    fn test_flat_run_stays_flat() {
        let d = monotone_path(&[pt(0.0, 50.0), pt(30.0, 50.0), pt(60.0, 50.0)]);
        assert_eq!(d, "M0,50C10,50,20,50,30,50C40,50,50,50,60,50");
    }

    #[test]
    fn test_local_extremum_has_zero_tangent() {
        let points = [pt(0.0, 10.0), pt(30.0, 0.0), pt(60.0, 10.0)];
        let t = tangents(&points);
        assert_eq!(t[1], 0.0);
    }

    #[test]
    fn test_passes_through_every_point() {
        let points = [pt(0.0, 100.0), pt(30.0, 80.0), pt(60.0, 20.0), pt(90.0, 10.0)];
        let d = monotone_path(&points);
        assert!(d.starts_with("M0,100"));
        assert!(d.contains(",30,80C"));
        assert!(d.contains(",60,20C"));
        assert!(d.ends_with(",90,10"));
    }

    #[test]
    fn test_monotone_tangents_share_sign() {
        let points = [pt(0.0, 100.0), pt(30.0, 80.0), pt(60.0, 20.0), pt(90.0, 10.0)];
        for t in tangents(&points) {
            assert!(t <= 0.0);
        }
    }

    #[test]
    fn test_fmt() {
        assert_eq!(fmt(1.0), "1");
        assert_eq!(fmt(1.5), "1.5");
        assert_eq!(fmt(1.234), "1.23");
        assert_eq!(fmt(-0.001), "0");
    }
}
