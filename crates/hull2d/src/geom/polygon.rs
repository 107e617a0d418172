//! Checks on finished hulls.
//!
//! A hull here is an open, counter-clockwise vertex list as returned by the
//! algorithms in `crate::hull`. Hulls with fewer than three vertices, or with all
//! vertices on one line, are treated as a point or a segment.

use std::collections::BTreeSet;

use super::{orientation, Point};

/// Twice the signed area (shoelace via a fan from the first vertex).
///
/// Positive for counter-clockwise order. Exact for convex polygons within `MAX_COORD`.
pub fn twice_signed_area(poly: &[Point]) -> i128 {
    let Some((&first, rest)) = poly.split_first() else {
        return 0;
    };
    rest.windows(2)
        .map(|w| orientation(first, w[0], w[1]))
        .sum()
}

/// True if no wrapped consecutive triple turns clockwise.
///
/// Collinear runs (orientation zero) are accepted, so hulls that keep boundary
/// points pass as well as hulls that keep only extreme points.
pub fn is_convex_ccw(poly: &[Point]) -> bool {
    let n = poly.len();
    if n < 3 {
        return true;
    }
    let turns_left = (0..n).all(|i| {
        orientation(poly[i], poly[(i + 1) % n], poly[(i + 2) % n]) >= 0
    });
    turns_left && twice_signed_area(poly) >= 0
}

/// True if `p` lies on the boundary or in the interior of the convex hull `poly`.
pub fn contains(poly: &[Point], p: Point) -> bool {
    match poly {
        [] => false,
        [a] => *a == p,
        [a, b] => on_segment(*a, *b, p),
        _ if twice_signed_area(poly) == 0 => {
            // Flat hull: the extreme vertices span the segment.
            let lo = poly.iter().copied().fold(poly[0], Ord::min);
            let hi = poly.iter().copied().fold(poly[0], Ord::max);
            on_segment(lo, hi, p)
        }
        _ => {
            let n = poly.len();
            (0..n).all(|i| orientation(poly[i], poly[(i + 1) % n], p) >= 0)
        }
    }
}

/// Copy of `poly` with its first vertex appended, for drawing a closed outline.
pub fn closed(poly: &[Point]) -> Vec<Point> {
    let mut out = Vec::with_capacity(poly.len() + 1);
    out.extend_from_slice(poly);
    if let Some(&first) = poly.first() {
        out.push(first);
    }
    out
}

/// Compare two vertex lists as unordered sets.
pub fn same_vertex_set(a: &[Point], b: &[Point]) -> bool {
    a.iter().collect::<BTreeSet<_>>() == b.iter().collect::<BTreeSet<_>>()
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    orientation(a, b, p) == 0
        && a.x().min(b.x()) <= p.x()
        && p.x() <= a.x().max(b.x())
        && a.y().min(b.y()) <= p.y()
        && p.y() <= a.y().max(b.y())
}
