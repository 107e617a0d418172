use super::distinct;
use crate::geom::{orientation, Point};

/// Andrew's monotone chain convex hull.
///
/// Sorts by `(x, y)`, builds the lower chain left to right and the upper chain
/// right to left, popping every clockwise *or collinear* turn. Collinear points
/// between two hull vertices are therefore dropped. The result starts at the
/// leftmost (then lowest) point and runs counter-clockwise.
///
/// O(n log n) for the sort; each chain is O(n) amortized.
pub fn convex_hull_monotone_chain(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_unstable();
    pts.dedup();
    if pts.len() < 3 {
        return distinct(points);
    }
    let mut lower = half_hull(pts.iter().copied(), pts.len());
    let mut upper = half_hull(pts.iter().rev().copied(), pts.len());
    // Each chain ends where the other begins.
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    tracing::debug!(n = points.len(), hull = hull.len(), "monotone chain hull");
    hull
}

fn half_hull(sorted: impl Iterator<Item = Point>, cap: usize) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::with_capacity(cap);
    for p in sorted {
        while chain.len() >= 2
            && orientation(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0
        {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}
