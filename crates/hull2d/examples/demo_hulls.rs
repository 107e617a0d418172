//! Print both hulls for the classic demo inputs.
//!
//! Usage:
//!   cargo run -p hull2d --example demo_hulls
//!   cargo run -p hull2d --example demo_hulls -- 2024

use hull2d::cloud::{draw_points, zigzag, CloudCfg, CloudShape, ReplayToken};
use hull2d::{Algorithm, Point};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025);
    let draw = |shape, count| {
        draw_points(CloudCfg { count, shape }, ReplayToken { seed, index: 0 })
            .expect("demo cloud params are valid")
    };
    let cases: Vec<(&str, Vec<Point>)> = vec![
        ("baseline", draw(CloudShape::uniform(), 20)),
        ("collinear", draw(CloudShape::collinear(), 10)),
        ("zigzag", zigzag()),
        ("grouped", draw(CloudShape::grouped(), 10)),
    ];
    for (name, pts) in cases {
        for algo in Algorithm::ALL {
            let hull = algo.compute(&pts);
            let verts: Vec<String> = hull.iter().map(|p| p.to_string()).collect();
            println!(
                "{name:>9} {:>5}: n={} h={} [{}]",
                algo.name(),
                pts.len(),
                hull.len(),
                verts.join(", ")
            );
        }
    }
}
