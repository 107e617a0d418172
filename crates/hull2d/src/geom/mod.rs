//! Exact 2D primitives shared by the hull algorithms.
//!
//! - `Point`: immutable integer point, lexicographic order, structural hash.
//! - `orientation` / `turn`: the single geometric predicate (cross product sign).
//! - `polygon`: checks on finished hulls (area, convexity, containment).

mod orient;
mod point;
pub mod polygon;

pub use orient::{orientation, turn, Turn};
pub use point::{Point, MAX_COORD};

#[cfg(test)]
mod tests;
