use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hull2d::cloud::{draw_points, zigzag, CloudCfg, CloudShape, ReplayToken};
use hull2d::prelude::twice_signed_area;
use hull2d::{Algorithm, Point};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod bench;
mod points_io;
mod provenance;
mod render;

use provenance::{write_sidecar, Payload};
use render::{render_svg, RenderCfg};

#[derive(Parser)]
#[command(name = "hull2d")]
#[command(about = "Planar convex hulls: generate clouds, compute, render, benchmark")]
struct Cmd {
    /// Optional free-form run label; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw a seeded point cloud and write it as an x,y CSV
    Generate {
        #[arg(long, value_enum, default_value_t = Shape::Uniform)]
        shape: Shape,
        #[arg(long, default_value_t = 20)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Compute the hull of a CSV/Parquet point table
    Hull {
        /// naive | chain
        #[arg(long, default_value = "chain")]
        algo: Algorithm,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Also render points and hull to this SVG
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Run the demo inputs through both algorithms and render each result
    Scenarios {
        #[arg(long)]
        out_dir: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Time both algorithms on uniform clouds and write a CSV table
    Bench {
        #[arg(long, value_delimiter = ',', default_value = "1000,10000")]
        sizes: Vec<usize>,
        #[arg(long, default_value_t = 1000)]
        naive_max: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Uniform,
    Circle,
    Collinear,
    Grouped,
}

impl From<Shape> for CloudShape {
    fn from(s: Shape) -> Self {
        match s {
            Shape::Uniform => CloudShape::uniform(),
            Shape::Circle => CloudShape::circle(),
            Shape::Collinear => CloudShape::collinear(),
            Shape::Grouped => CloudShape::grouped(),
        }
    }
}

#[derive(Serialize)]
struct HullReport<'a> {
    algo: &'a str,
    n: usize,
    hull: &'a [Point],
    area: f64,
}

impl<'a> HullReport<'a> {
    fn new(algo: Algorithm, n: usize, hull: &'a [Point]) -> Self {
        Self {
            algo: algo.name(),
            n,
            hull,
            area: twice_signed_area(hull) as f64 / 2.0,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    let tag = cmd.tag;
    match cmd.action {
        Action::Generate {
            shape,
            count,
            seed,
            index,
            out,
        } => generate(shape, count, ReplayToken { seed, index }, &out, tag),
        Action::Hull {
            algo,
            input,
            out,
            svg,
        } => hull(algo, &input, &out, svg.as_deref(), tag),
        Action::Scenarios { out_dir, seed } => scenarios(&out_dir, seed, tag),
        Action::Bench {
            sizes,
            naive_max,
            seed,
            out,
        } => run_bench(
            bench::BenchCfg {
                sizes,
                naive_max,
                seed,
            },
            &out,
            tag,
        ),
        Action::Report => report(tag),
    }
}

fn generate(
    shape: Shape,
    count: usize,
    tok: ReplayToken,
    out: &Path,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(?shape, count, seed = tok.seed, index = tok.index, out = %out.display(), tag = ?tag, "generate");
    let cfg = CloudCfg {
        count,
        shape: shape.into(),
    };
    let pts = draw_points(cfg, tok)?;
    points_io::write_points(out, &pts)?;
    let params = serde_json::json!({
        "shape": format!("{:?}", cfg.shape),
        "count": count,
        "seed": tok.seed,
        "index": tok.index
    });
    write_sidecar(out, Payload::new(params).with_tag(tag))?;
    Ok(())
}

fn hull(
    algo: Algorithm,
    input: &Path,
    out: &Path,
    svg: Option<&Path>,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(%algo, input = %input.display(), out = %out.display(), tag = ?tag, "hull");
    let pts = points_io::read_points(input)?;
    let hull = algo.compute(&pts);
    tracing::info!(n = pts.len(), hull = hull.len(), "hull_done");
    let report = HullReport::new(algo, pts.len(), &hull);
    write_json(out, &report)?;
    let mut outputs = vec![out.to_string_lossy().into_owned()];
    if let Some(svg_path) = svg {
        let title = format!("{} hull, {} points", algo.name(), pts.len());
        write_svg(svg_path, &pts, &hull, &title)?;
        outputs.push(svg_path.to_string_lossy().into_owned());
    }
    let params = serde_json::json!({
        "algo": algo.name(),
        "input": input.to_string_lossy(),
        "artifacts": outputs
    });
    write_sidecar(out, Payload::new(params).with_tag(tag))?;
    Ok(())
}

fn scenarios(out_dir: &Path, seed: u64, tag: Option<String>) -> Result<()> {
    tracing::info!(out_dir = %out_dir.display(), seed, tag = ?tag, "scenarios");
    let draw = |shape: CloudShape, count: usize| {
        draw_points(CloudCfg { count, shape }, ReplayToken { seed, index: 0 })
    };
    let cases: Vec<(&str, Vec<Point>)> = vec![
        ("baseline", draw(CloudShape::uniform(), 20)?),
        ("collinear", draw(CloudShape::collinear(), 10)?),
        ("zigzag", zigzag()),
        ("grouped", draw(CloudShape::grouped(), 10)?),
    ];
    let mut summary = Vec::new();
    for (name, pts) in &cases {
        for algo in Algorithm::ALL {
            let hull = algo.compute(pts);
            tracing::info!(case = name, %algo, n = pts.len(), hull = hull.len(), "scenario");
            let svg_path = out_dir.join(format!("{name}_{}.svg", algo.name()));
            let title = format!("{} hull: {name}", algo.name());
            write_svg(&svg_path, pts, &hull, &title)?;
            summary.push(serde_json::json!({
                "case": name,
                "input": pts,
                "report": HullReport::new(algo, pts.len(), &hull),
                "svg": svg_path.to_string_lossy()
            }));
        }
    }
    let summary_path = out_dir.join("scenarios.json");
    write_json(&summary_path, &summary)?;
    write_sidecar(
        &summary_path,
        Payload::new(serde_json::json!({ "seed": seed })).with_tag(tag),
    )?;
    Ok(())
}

fn run_bench(cfg: bench::BenchCfg, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(sizes = ?cfg.sizes, naive_max = cfg.naive_max, seed = cfg.seed, tag = ?tag, "bench");
    let rows = bench::run(&cfg)?;
    let mut df = bench::rows_frame(&rows)?;
    points_io::write_csv(out, &mut df)?;
    let params = serde_json::json!({
        "sizes": cfg.sizes,
        "naive_max": cfg.naive_max,
        "seed": cfg.seed,
        "shape": "uniform"
    });
    write_sidecar(out, Payload::new(params).with_tag(tag))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "hull2d_version": hull2d::VERSION,
        "tag": tag,
        "algorithms": Algorithm::ALL.iter().map(|a| a.name()).collect::<Vec<_>>(),
        "max_coord": hull2d::MAX_COORD
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    points_io::ensure_parent(path)?;
    std::fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn write_svg(path: &Path, pts: &[Point], hull: &[Point], title: &str) -> Result<()> {
    let svg = render_svg(pts, hull, title, &RenderCfg::default())?;
    points_io::ensure_parent(path)?;
    std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))
}
