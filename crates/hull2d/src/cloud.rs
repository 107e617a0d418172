//! Seeded point clouds for demos, benchmarks, and tests.
//!
//! Shapes
//! - `Uniform`: independent integer coordinates in a square.
//! - `Circle`: `count` equally spaced angles on a circle, truncated to integers
//!   (neighbouring samples may coincide for large `count`).
//! - `Collinear`: all points on a vertical line.
//! - `Grouped`: a tight uniform cluster plus one distant outlier.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG, so a
//! benchmark row or a figure can be regenerated from its sidecar alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GeneratorError;
use crate::geom::{Point, MAX_COORD};

/// Distribution of generated points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudShape {
    Uniform { low: i64, high: i64 },
    Circle { radius: f64 },
    Collinear { x: i64, low: i64, high: i64 },
    Grouped { low: i64, high: i64, outlier: Point },
}

impl CloudShape {
    /// Defaults matching the classic demo set.
    pub fn uniform() -> Self {
        CloudShape::Uniform {
            low: -1000,
            high: 1000,
        }
    }

    pub fn circle() -> Self {
        CloudShape::Circle { radius: 500.0 }
    }

    pub fn collinear() -> Self {
        CloudShape::Collinear {
            x: 10,
            low: 0,
            high: 20,
        }
    }

    pub fn grouped() -> Self {
        CloudShape::Grouped {
            low: 0,
            high: 5,
            outlier: Point::new(20, 20),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CloudShape::Uniform { .. } => "uniform",
            CloudShape::Circle { .. } => "circle",
            CloudShape::Collinear { .. } => "collinear",
            CloudShape::Grouped { .. } => "grouped",
        }
    }
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudCfg {
    /// Number of sampled points. `Grouped` adds its outlier on top.
    pub count: usize,
    pub shape: CloudShape,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 20,
            shape: CloudShape::uniform(),
        }
    }
}

impl CloudCfg {
    fn validate(&self) -> Result<(), GeneratorError> {
        if self.count == 0 {
            return Err(GeneratorError::invalid("count must be > 0"));
        }
        let in_range = |v: i64| v.unsigned_abs() <= MAX_COORD as u64;
        match self.shape {
            CloudShape::Uniform { low, high }
            | CloudShape::Collinear { low, high, .. }
            | CloudShape::Grouped { low, high, .. } => {
                if low > high {
                    return Err(GeneratorError::invalid("low <= high required"));
                }
                if !(in_range(low) && in_range(high)) {
                    return Err(GeneratorError::invalid("bounds exceed MAX_COORD"));
                }
            }
            CloudShape::Circle { radius } => {
                if !(radius.is_finite() && radius > 0.0) {
                    return Err(GeneratorError::invalid("radius must be finite and > 0"));
                }
                if radius > MAX_COORD as f64 {
                    return Err(GeneratorError::invalid("radius exceeds MAX_COORD"));
                }
            }
        }
        match self.shape {
            CloudShape::Collinear { x, .. } if !in_range(x) => {
                Err(GeneratorError::invalid("line x exceeds MAX_COORD"))
            }
            CloudShape::Grouped { outlier, .. }
                if !(in_range(outlier.x()) && in_range(outlier.y())) =>
            {
                Err(GeneratorError::invalid("outlier exceeds MAX_COORD"))
            }
            _ => Ok(()),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point cloud. The same `(cfg, tok)` always yields the same points.
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> Result<Vec<Point>, GeneratorError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let n = cfg.count;
    let pts = match cfg.shape {
        CloudShape::Uniform { low, high } => (0..n)
            .map(|_| Point::new(rng.gen_range(low..=high), rng.gen_range(low..=high)))
            .collect(),
        CloudShape::Circle { radius } => {
            let delta = std::f64::consts::TAU / (n as f64);
            (0..n)
                .map(|k| {
                    let th = (k as f64) * delta;
                    Point::new((radius * th.cos()) as i64, (radius * th.sin()) as i64)
                })
                .collect()
        }
        CloudShape::Collinear { x, low, high } => (0..n)
            .map(|_| Point::new(x, rng.gen_range(low..=high)))
            .collect(),
        CloudShape::Grouped { low, high, outlier } => {
            let mut v: Vec<Point> = (0..n)
                .map(|_| Point::new(rng.gen_range(low..=high), rng.gen_range(low..=high)))
                .collect();
            v.push(outlier);
            v
        }
    };
    tracing::debug!(
        shape = cfg.shape.name(),
        n,
        seed = tok.seed,
        index = tok.index,
        "draw_points"
    );
    Ok(pts)
}

/// Fixed seven-point zigzag alternating above and below the x-axis.
pub fn zigzag() -> Vec<Point> {
    [(0, 0), (1, 5), (2, -5), (3, 10), (4, -10), (5, 12), (6, -12)]
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect()
}
