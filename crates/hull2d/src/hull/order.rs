use std::cmp::Ordering;

use crate::geom::{orientation, Point};

/// Order hull vertices counter-clockwise, starting at the lowest (then leftmost) one.
///
/// Angles about the pivot lie in `[0, π)`, so comparing two vertices by the sign of
/// `orientation(pivot, a, b)` is a total order; no `atan2` is needed. Vertices on
/// a common ray are ordered by distance from the pivot, except on the closing ray,
/// which is walked back towards the pivot.
pub(super) fn sort_ccw(mut verts: Vec<Point>) -> Vec<Point> {
    let Some(pivot_idx) = verts
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| (p.y(), p.x()))
        .map(|(i, _)| i)
    else {
        return verts;
    };
    let pivot = verts.swap_remove(pivot_idx);
    verts.sort_unstable_by(|&a, &b| by_angle(pivot, a, b));
    if let Some(&last) = verts.last() {
        let start = verts
            .iter()
            .rposition(|&p| orientation(pivot, p, last) != 0)
            .map_or(0, |i| i + 1);
        // start == 0: everything is on one ray, keep it ascending.
        if start > 0 {
            verts[start..].reverse();
        }
    }
    verts.insert(0, pivot);
    verts
}

fn by_angle(pivot: Point, a: Point, b: Point) -> Ordering {
    match orientation(pivot, a, b).cmp(&0) {
        Ordering::Greater => Ordering::Less,
        Ordering::Less => Ordering::Greater,
        Ordering::Equal => pivot.dist2(a).cmp(&pivot.dist2(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i64, i64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn starts_at_lowest_then_leftmost() {
        let out = sort_ccw(pts(&[(2, 2), (0, 2), (2, 0), (0, 0)]));
        assert_eq!(out, pts(&[(0, 0), (2, 0), (2, 2), (0, 2)]));
    }

    #[test]
    fn first_ray_ascends_and_closing_ray_descends() {
        let out = sort_ccw(pts(&[(0, 1), (2, 2), (1, 0), (0, 2), (0, 0), (2, 0)]));
        assert_eq!(out, pts(&[(0, 0), (1, 0), (2, 0), (2, 2), (0, 2), (0, 1)]));
    }

    #[test]
    fn upper_left_first_ray_ascends_by_distance() {
        // Every vertex lies up and to the left of the pivot.
        let out = sort_ccw(pts(&[(-2, 2), (-3, 1), (0, 0), (-1, 1)]));
        assert_eq!(out, pts(&[(0, 0), (-1, 1), (-2, 2), (-3, 1)]));
    }

    #[test]
    fn single_ray_stays_ascending() {
        let out = sort_ccw(pts(&[(10, 7), (10, 0), (10, 3)]));
        assert_eq!(out, pts(&[(10, 0), (10, 3), (10, 7)]));
    }

    #[test]
    fn empty_is_empty() {
        assert!(sort_ccw(Vec::new()).is_empty());
    }
}
