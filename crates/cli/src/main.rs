use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use railkit::api::{
    draw_path_seeded, layout_railing, Path as RailPath, RailingDesign, RailingLayout,
    RandomPathCfg, Tolerances,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

#[derive(Parser)]
#[command(name = "railkit")]
#[command(about = "Place railing posts, infill and mounts along a path")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Lay out a railing along a path CSV (columns x,y[,z])
    Place {
        #[arg(long)]
        path: PathBuf,
        /// Design JSON; missing fields take defaults
        #[arg(long)]
        design: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Lay out a railing along a seeded random path
    Demo {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 6)]
        vertices: usize,
        #[arg(long)]
        design: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print version and default design as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Place { path, design, out } => place(&path, design.as_deref(), &out),
        Action::Demo {
            seed,
            vertices,
            design,
            out,
        } => demo(seed, vertices, design.as_deref(), &out),
        Action::Report => report(),
    }
}

fn load_design(path: Option<&Path>) -> Result<RailingDesign> {
    match path {
        None => Ok(RailingDesign::default()),
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("reading design {}", p.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing design {}", p.display()))
        }
    }
}

fn place(path: &Path, design: Option<&Path>, out: &Path) -> Result<()> {
    tracing::info!(path = %path.display(), design = ?design, out = %out.display(), "place");
    let rail_path = table::read_path(path)?;
    let design = load_design(design)?;
    let params = json!({
        "path": path.to_string_lossy(),
        "design": serde_json::to_value(&design)?,
    });
    run(&rail_path, &design, out, provenance::Payload::new("place", params))
}

fn demo(seed: u64, vertices: usize, design: Option<&Path>, out: &Path) -> Result<()> {
    tracing::info!(seed, vertices, out = %out.display(), "demo");
    let cfg = RandomPathCfg {
        vertices,
        ..Default::default()
    };
    let rail_path = draw_path_seeded(cfg, seed)?;
    let design = load_design(design)?;
    let params = json!({
        "seed": seed,
        "vertices": vertices,
        "path_length": rail_path.length(),
        "design": serde_json::to_value(&design)?,
    });
    run(&rail_path, &design, out, provenance::Payload::new("demo", params))
}

fn run(
    path: &RailPath,
    design: &RailingDesign,
    out: &Path,
    mut payload: provenance::Payload,
) -> Result<()> {
    let layout: RailingLayout = layout_railing(path, design, Tolerances::default());
    for d in &layout.diagnostics {
        tracing::warn!(diagnostic = %d, "placement");
    }
    let rows = table::write_layout(out, &layout, design.infill)?;
    tracing::info!(
        posts = layout.posts.len(),
        infill = layout.infill.len(),
        mounts = layout.mounts.len(),
        post_length = layout.post_length,
        rows,
        "wrote placements"
    );
    payload.diagnostics = layout.diagnostics.iter().map(|d| d.to_string()).collect();
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote provenance");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "railkit": railkit::VERSION,
        "default_design": serde_json::to_value(RailingDesign::default())?,
        "tolerances": {
            "geometry_eps": Tolerances::default().geometry_eps,
            "ceiling_eps": Tolerances::default().ceiling_eps,
            "dedup_decimals": Tolerances::default().dedup_decimals,
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
