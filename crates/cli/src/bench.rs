//! Wall-clock comparison of the hull algorithms on uniform clouds.
//!
//! Criterion (`cargo bench -p hull2d`) is the statistically careful path; this is
//! the one-shot table that the CLI writes next to other run artifacts.

use anyhow::Result;
use hull2d::cloud::{draw_points, CloudCfg, CloudShape, ReplayToken};
use hull2d::Algorithm;
use polars::prelude::*;
use std::time::Instant;

#[derive(Clone, Debug)]
pub struct BenchCfg {
    pub sizes: Vec<usize>,
    /// Naive runs are skipped above this size (cubic cost).
    pub naive_max: usize,
    pub seed: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BenchRow {
    pub n: usize,
    pub algo: Algorithm,
    pub seconds: f64,
    pub hull: usize,
}

pub fn run(cfg: &BenchCfg) -> Result<Vec<BenchRow>> {
    let mut rows = Vec::new();
    for (i, &n) in cfg.sizes.iter().enumerate() {
        let cloud = CloudCfg {
            count: n,
            shape: CloudShape::uniform(),
        };
        let pts = draw_points(cloud, ReplayToken {
            seed: cfg.seed,
            index: i as u64,
        })?;
        for algo in Algorithm::ALL {
            if algo == Algorithm::Naive && n > cfg.naive_max {
                tracing::info!(n, algo = algo.name(), naive_max = cfg.naive_max, "skip");
                continue;
            }
            let start = Instant::now();
            let hull = algo.compute(&pts);
            let seconds = start.elapsed().as_secs_f64();
            tracing::info!(n, algo = algo.name(), seconds, hull = hull.len(), "bench");
            rows.push(BenchRow {
                n,
                algo,
                seconds,
                hull: hull.len(),
            });
        }
    }
    Ok(rows)
}

pub fn rows_frame(rows: &[BenchRow]) -> PolarsResult<DataFrame> {
    let n: Vec<u64> = rows.iter().map(|r| r.n as u64).collect();
    let algo: Vec<&str> = rows.iter().map(|r| r.algo.name()).collect();
    let seconds: Vec<f64> = rows.iter().map(|r| r.seconds).collect();
    let hull: Vec<u64> = rows.iter().map(|r| r.hull as u64).collect();
    df!("n" => n, "algo" => algo, "seconds" => seconds, "hull" => hull)
}
