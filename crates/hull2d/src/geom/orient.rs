use super::point::Point;

/// Kind of turn made by three points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// z-component of `(q - p) × (r - p)`.
///
/// Positive: `r` lies strictly left of the directed line `p → q` (counter-clockwise).
/// Negative: strictly right (clockwise). Zero: collinear.
/// Exact for points within `MAX_COORD`.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> i128 {
    let u = p.delta(q);
    let v = p.delta(r);
    i128::from(u.x) * i128::from(v.y) - i128::from(u.y) * i128::from(v.x)
}

/// Sign of `orientation` as a `Turn`.
#[inline]
pub fn turn(p: Point, q: Point, r: Point) -> Turn {
    match orientation(p, q, r).signum() {
        1 => Turn::CounterClockwise,
        -1 => Turn::Clockwise,
        _ => Turn::Collinear,
    }
}
