//! Convex hull algorithms.
//!
//! Both entry points take any finite `&[Point]` and return a fresh, open,
//! counter-clockwise vertex list; the input is never touched.
//!
//! Collinear boundary points
//! - `convex_hull_naive` keeps every point lying on a hull edge.
//! - `convex_hull_monotone_chain` keeps only the extreme points.
//!   Both conventions are standard; tests compare the two modulo this difference.
//!
//! Degenerate inputs
//! - Fewer than three distinct points: the input is returned de-duplicated, in
//!   first-occurrence order.

mod chain;
mod naive;
mod order;

pub use chain::convex_hull_monotone_chain;
pub use naive::convex_hull_naive;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::HullError;
use crate::geom::Point;

/// Selector over the available hull algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Pairwise edge test, O(n³).
    Naive,
    /// Sort once, sweep lower and upper chains, O(n log n).
    MonotoneChain,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Naive, Algorithm::MonotoneChain];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::MonotoneChain => "chain",
        }
    }

    #[inline]
    pub fn compute(self, points: &[Point]) -> Vec<Point> {
        match self {
            Algorithm::Naive => convex_hull_naive(points),
            Algorithm::MonotoneChain => convex_hull_monotone_chain(points),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = HullError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" | "brute-force" => Ok(Algorithm::Naive),
            "chain" | "monotone-chain" | "graham" => Ok(Algorithm::MonotoneChain),
            _ => Err(HullError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// De-duplicate, keeping first occurrences in input order.
fn distinct(points: &[Point]) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(points.len());
    points.iter().copied().filter(|p| seen.insert(*p)).collect()
}
