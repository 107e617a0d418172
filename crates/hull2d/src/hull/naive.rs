use std::collections::BTreeSet;

use super::{distinct, order::sort_ccw};
use crate::geom::{turn, Point, Turn};

/// Brute-force convex hull: a pair `(a, b)` is a hull edge iff no two other points
/// lie strictly on opposite sides of the line through `a` and `b`.
///
/// Points exactly on a hull edge are kept as vertices. The result starts at the
/// lowest (then leftmost) point and runs counter-clockwise.
///
/// O(n³): O(n²) pairs, each scanned against all points with an early exit.
pub fn convex_hull_naive(points: &[Point]) -> Vec<Point> {
    let pts = distinct(points);
    if pts.len() < 3 {
        return pts;
    }
    let mut verts = BTreeSet::new();
    for (i, &a) in pts.iter().enumerate() {
        for &b in &pts[i + 1..] {
            if is_supporting(&pts, a, b) {
                verts.insert(a);
                verts.insert(b);
            }
        }
    }
    let hull = sort_ccw(verts.into_iter().collect());
    tracing::debug!(n = points.len(), hull = hull.len(), "naive hull");
    hull
}

/// True if all points other than `a` and `b` lie on one closed side of `a → b`.
fn is_supporting(pts: &[Point], a: Point, b: Point) -> bool {
    let mut left = false;
    let mut right = false;
    for &p in pts {
        if p == a || p == b {
            continue;
        }
        match turn(a, b, p) {
            Turn::CounterClockwise => left = true,
            Turn::Clockwise => right = true,
            Turn::Collinear => {}
        }
        if left && right {
            return false;
        }
    }
    true
}
