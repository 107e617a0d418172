//! Point tables on disk (`x,y` integer columns) via polars.
//!
//! CSV is the default; `.parquet` inputs are scanned lazily as well. Float columns
//! are accepted only when every value is integral, and every row is validated with
//! `Point::try_new`, so truncated or out-of-range coordinates never reach the hull
//! algorithms.

use anyhow::{anyhow, Context, Result};
use hull2d::Point;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let lf = if path.extension().is_some_and(|e| e == "parquet") {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())
    } else {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
    }
    .with_context(|| format!("opening {}", path.display()))?;
    let df = lf
        .select([col("x"), col("y")])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = int_column(&df, "x", path)?;
    let ys = int_column(&df, "y", path)?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        let (Some(x), Some(y)) = (x, y) else {
            return Err(anyhow!("{}: row {row} has a missing coordinate", path.display()));
        };
        out.push(Point::try_new(x, y).with_context(|| format!("{}: row {row}", path.display()))?);
    }
    tracing::info!(path = %path.display(), rows = out.len(), "read_points");
    Ok(out)
}

/// Column `name` as `i64`, rejecting any row whose value is not an integer.
fn int_column(df: &DataFrame, name: &str, path: &Path) -> Result<Int64Chunked> {
    let s = df.column(name)?;
    let dtype = s.dtype().clone();
    if dtype.is_integer() {
        return Ok(s.cast(&DataType::Int64)?.i64()?.clone());
    }
    if !dtype.is_float() {
        return Err(anyhow!(
            "{}: column {name} has dtype {dtype}, expected integers",
            path.display()
        ));
    }
    let floats = s.cast(&DataType::Float64)?;
    for (row, v) in floats.f64()?.into_iter().enumerate() {
        if let Some(v) = v {
            if !v.is_finite() || v.fract() != 0.0 {
                return Err(anyhow!(
                    "{}: row {row} has non-integer {name} = {v}",
                    path.display()
                ));
            }
        }
    }
    Ok(floats.cast(&DataType::Int64)?.i64()?.clone())
}

pub fn points_frame(points: &[Point]) -> PolarsResult<DataFrame> {
    let xs: Vec<i64> = points.iter().map(|p| p.x()).collect();
    let ys: Vec<i64> = points.iter().map(|p| p.y()).collect();
    df!("x" => xs, "y" => ys)
}

pub fn write_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    let mut df = points_frame(points)?;
    write_csv(path, &mut df)
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
