use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::HullError;

/// Largest coordinate magnitude accepted by `Point::try_new`.
///
/// Differences of two coordinates stay within 63 bits, so `orientation` never
/// overflows its `i128` accumulator.
pub const MAX_COORD: i64 = 1 << 61;

/// Immutable 2D point with integer coordinates.
///
/// Ordering is lexicographic: by `x`, then by `y`. Equality and hashing are
/// structural, so two points with equal coordinates are interchangeable.
/// Serialized as a two-element array `[x, y]`; deserialization validates the range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "[i64; 2]", into = "[i64; 2]")]
pub struct Point {
    x: i64,
    y: i64,
}

impl Point {
    /// Unchecked constructor for literals.
    ///
    /// Coordinates beyond `MAX_COORD` are not rejected here; orientation on such
    /// points panics on overflow in debug builds and wraps in release builds.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Checked constructor used at I/O boundaries.
    pub fn try_new(x: i64, y: i64) -> Result<Self, HullError> {
        if x.unsigned_abs() > MAX_COORD as u64 || y.unsigned_abs() > MAX_COORD as u64 {
            return Err(HullError::CoordinateOutOfRange {
                x,
                y,
                max: MAX_COORD,
            });
        }
        Ok(Self { x, y })
    }

    #[inline]
    pub const fn x(&self) -> i64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Vector from `self` to `to`.
    #[inline]
    pub fn delta(self, to: Point) -> Vector2<i64> {
        Vector2::new(to.x - self.x, to.y - self.y)
    }

    /// Squared Euclidean distance, exact in `i128`.
    #[inline]
    pub fn dist2(self, to: Point) -> i128 {
        let d = self.delta(to);
        i128::from(d.x) * i128::from(d.x) + i128::from(d.y) * i128::from(d.y)
    }

    /// Floating-point copy for rendering and other inexact consumers.
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x as f64, self.y as f64)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl TryFrom<[i64; 2]> for Point {
    type Error = HullError;

    fn try_from([x, y]: [i64; 2]) -> Result<Self, Self::Error> {
        Point::try_new(x, y)
    }
}

impl From<Point> for [i64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}
