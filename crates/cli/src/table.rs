//! CSV in and out via polars.
//!
//! Input paths are tables with `x`, `y` and an optional `z` column, one row
//! per vertex. Output is one row per placement:
//! `kind,x,y,z,dx,dy,distance`, where `kind` is post, picket, bar, panel,
//! element or mount.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use railkit::api::{InfillKind, Path as RailPath, PlacementPoint, RailingLayout};
use railkit::Vec3;
use std::fs::File;
use std::path::Path;

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| anyhow!("column {name:?} is empty at row {row}")))
        .collect()
}

/// Read a path CSV with a header row.
pub fn read_path(input: &Path) -> Result<RailPath> {
    let df = LazyCsvReader::new(input)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", input.display()))?
        .collect()
        .with_context(|| format!("reading {}", input.display()))?;
    if df.height() == 0 {
        bail!("{} has no vertices", input.display());
    }
    let xs = float_column(&df, "x")?;
    let ys = float_column(&df, "y")?;
    let zs = if df.column("z").is_ok() {
        float_column(&df, "z")?
    } else {
        vec![0.0; xs.len()]
    };
    tracing::info!(rows = df.height(), has_z = df.column("z").is_ok(), "path_csv");
    let verts = xs
        .into_iter()
        .zip(ys)
        .zip(zs)
        .map(|((x, y), z)| Vec3::new(x, y, z))
        .collect();
    RailPath::from_vertices(verts).with_context(|| format!("invalid path in {}", input.display()))
}

fn infill_label(kind: InfillKind) -> &'static str {
    match kind {
        InfillKind::Vertical | InfillKind::Decorative => "picket",
        InfillKind::Horizontal => "bar",
        InfillKind::Panel => "panel",
    }
}

#[derive(Default)]
struct Rows {
    kind: Vec<&'static str>,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    dx: Vec<f64>,
    dy: Vec<f64>,
    distance: Vec<f64>,
}

impl Rows {
    fn extend(&mut self, kind: &'static str, pts: &[PlacementPoint]) {
        for p in pts {
            self.kind.push(kind);
            self.x.push(p.position.x);
            self.y.push(p.position.y);
            self.z.push(p.position.z);
            self.dx.push(p.orientation.x);
            self.dy.push(p.orientation.y);
            self.distance.push(p.distance);
        }
    }
}

/// Build the placement table: posts, infill, decorative elements, mounts.
pub fn layout_frame(layout: &RailingLayout, infill: InfillKind) -> Result<DataFrame> {
    let mut rows = Rows::default();
    rows.extend("post", &layout.posts);
    rows.extend(infill_label(infill), &layout.infill);
    rows.extend("element", &layout.elements);
    rows.extend("mount", &layout.mounts);
    let df = df!(
        "kind" => rows.kind,
        "x" => rows.x,
        "y" => rows.y,
        "z" => rows.z,
        "dx" => rows.dx,
        "dy" => rows.dy,
        "distance" => rows.distance
    )?;
    Ok(df)
}

/// Write the placement table to `out`, creating parent directories.
pub fn write_layout(out: &Path, layout: &RailingLayout, infill: InfillKind) -> Result<usize> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut df = layout_frame(layout, infill)?;
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(df.height())
}
