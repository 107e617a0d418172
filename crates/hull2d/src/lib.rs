//! Planar convex hulls over exact integer points.
//!
//! Two algorithms share one orientation predicate:
//! - `convex_hull_naive`: every pair of points is tested as a candidate edge, O(n³).
//! - `convex_hull_monotone_chain`: Andrew's monotone chain, O(n log n).
//!
//! Conventions
//! - Coordinates are `i64`, orientation is evaluated in `i128` and is exact for
//!   every point accepted by `Point::try_new`.
//! - Hulls are returned counter-clockwise and open (first vertex not repeated).
//! - Inputs with fewer than three distinct points come back de-duplicated.

pub mod error;
pub mod geom;
pub mod hull;
pub mod cloud;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeneratorError, HullError};
pub use geom::{orientation, turn, Point, Turn, MAX_COORD};
pub use hull::{convex_hull_monotone_chain, convex_hull_naive, Algorithm};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::polygon::{
        closed, contains, is_convex_ccw, same_vertex_set, twice_signed_area,
    };
    pub use crate::geom::{orientation, turn, Point, Turn, MAX_COORD};
    pub use crate::hull::{convex_hull_monotone_chain, convex_hull_naive, Algorithm};
    pub use crate::cloud::{draw_points, zigzag, CloudCfg, CloudShape, ReplayToken};
    pub use crate::{GeneratorError, HullError};
}
