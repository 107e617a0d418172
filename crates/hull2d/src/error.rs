//! Error types for boundary validation.
//!
//! The hull algorithms are total over `&[Point]` and never fail; errors arise only
//! where raw numbers enter the crate (point construction, algorithm names, generator
//! parameters).

use thiserror::Error;

/// Rejected input at the library boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HullError {
    /// A coordinate exceeds `MAX_COORD` in magnitude; orientation could overflow.
    #[error("coordinate out of range: ({x}, {y}) exceeds ±{max}")]
    CoordinateOutOfRange { x: i64, y: i64, max: i64 },
    #[error("unknown hull algorithm: {0:?} (expected \"naive\" or \"chain\")")]
    UnknownAlgorithm(String),
}

/// Error type shared by the point-cloud generators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("invalid generator params: {reason}")]
    InvalidParams { reason: String },
}

impl GeneratorError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}
