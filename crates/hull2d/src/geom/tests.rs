use super::polygon::{closed, contains, is_convex_ccw, same_vertex_set, twice_signed_area};
use super::*;
use crate::HullError;
use std::collections::HashSet;

fn pts(raw: &[(i64, i64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn point_order_is_lexicographic() {
    let mut v = pts(&[(1, 0), (0, 5), (0, -1), (1, -3)]);
    v.sort();
    assert_eq!(v, pts(&[(0, -1), (0, 5), (1, -3), (1, 0)]));
    assert!(Point::new(0, 100) < Point::new(1, -100));
}

#[test]
fn equal_points_hash_together() {
    let set: HashSet<Point> = pts(&[(2, 3), (2, 3), (3, 2)]).into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn try_new_rejects_out_of_range() {
    assert!(Point::try_new(MAX_COORD, -MAX_COORD).is_ok());
    let err = Point::try_new(MAX_COORD + 1, 0).unwrap_err();
    assert!(matches!(err, HullError::CoordinateOutOfRange { x, .. } if x == MAX_COORD + 1));
    assert!(Point::try_new(0, i64::MIN).is_err());
}

#[test]
fn serde_uses_pairs_and_validates() {
    let p = Point::new(-4, 9);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[-4,9]");
    let back: Point = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
    assert!(serde_json::from_str::<Point>("[9223372036854775807,0]").is_err());
}

#[test]
fn orientation_sign_matches_turn() {
    let p = Point::new(0, 0);
    let q = Point::new(4, 0);
    assert_eq!(orientation(p, q, Point::new(1, 3)), 12);
    assert_eq!(turn(p, q, Point::new(1, 3)), Turn::CounterClockwise);
    assert_eq!(turn(p, q, Point::new(1, -3)), Turn::Clockwise);
    assert_eq!(turn(p, q, Point::new(9, 0)), Turn::Collinear);
}

#[test]
fn orientation_exact_at_extreme_coordinates() {
    let m = MAX_COORD;
    let p = Point::new(-m, -m);
    let q = Point::new(m, -m);
    let r = Point::new(m, m);
    // (2m)(2m) - 0 = 4m²
    assert_eq!(orientation(p, q, r), 4 * i128::from(m) * i128::from(m));
    assert_eq!(orientation(p, r, q), -4 * i128::from(m) * i128::from(m));
    // Off the diagonal by one unit is still detected.
    assert_eq!(turn(p, r, Point::new(0, 1)), Turn::CounterClockwise);
}

#[test]
fn area_of_unit_square() {
    let sq = pts(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
    assert_eq!(twice_signed_area(&sq), 2);
    let mut cw = sq.clone();
    cw.reverse();
    assert_eq!(twice_signed_area(&cw), -2);
    assert_eq!(twice_signed_area(&[]), 0);
}

#[test]
fn convexity_accepts_collinear_and_rejects_reflex() {
    let with_mid = pts(&[(0, 0), (1, 0), (2, 0), (2, 2), (0, 2)]);
    assert!(is_convex_ccw(&with_mid));
    let reflex = pts(&[(0, 0), (2, 0), (1, 1), (2, 2), (0, 2)]);
    assert!(!is_convex_ccw(&reflex));
    let cw = pts(&[(0, 0), (0, 2), (2, 2), (2, 0)]);
    assert!(!is_convex_ccw(&cw));
}

#[test]
fn contains_boundary_and_interior() {
    let sq = pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
    assert!(contains(&sq, Point::new(2, 2)));
    assert!(contains(&sq, Point::new(4, 1)));
    assert!(contains(&sq, Point::new(0, 0)));
    assert!(!contains(&sq, Point::new(5, 1)));
    assert!(!contains(&sq, Point::new(-1, -1)));
}

#[test]
fn contains_degenerate_hulls() {
    assert!(!contains(&[], Point::new(0, 0)));
    assert!(contains(&pts(&[(1, 1)]), Point::new(1, 1)));
    let seg = pts(&[(0, 0), (4, 2)]);
    assert!(contains(&seg, Point::new(2, 1)));
    assert!(!contains(&seg, Point::new(6, 3)));
    let flat = pts(&[(10, 0), (10, 3), (10, 7)]);
    assert!(contains(&flat, Point::new(10, 5)));
    assert!(!contains(&flat, Point::new(10, 8)));
}

#[test]
fn closed_appends_first_without_touching_input() {
    let tri = pts(&[(0, 0), (1, 0), (0, 1)]);
    let ring = closed(&tri);
    assert_eq!(ring.len(), 4);
    assert_eq!(ring.first(), ring.last());
    assert_eq!(tri.len(), 3);
    assert!(closed(&[]).is_empty());
}

#[test]
fn vertex_sets_ignore_order() {
    let a = pts(&[(0, 0), (1, 0), (0, 1)]);
    let b = pts(&[(0, 1), (0, 0), (1, 0)]);
    assert!(same_vertex_set(&a, &b));
    assert!(!same_vertex_set(&a, &b[..2]));
}
