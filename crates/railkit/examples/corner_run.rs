//! Lay out an L-shaped deck railing and print every placement.
//!
//! Usage:
//!   cargo run -p railkit --example corner_run
//!   cargo run -p railkit --example corner_run -- panel
//!
//! The optional argument picks the infill: vertical (default), horizontal,
//! decorative, panel.

use railkit::prelude::*;

fn main() {
    let infill = match std::env::args().nth(1).as_deref() {
        None | Some("vertical") => InfillKind::Vertical,
        Some("horizontal") => InfillKind::Horizontal,
        Some("decorative") => InfillKind::Decorative,
        Some("panel") => InfillKind::Panel,
        Some(other) => {
            eprintln!("usage: corner_run [vertical|horizontal|decorative|panel], got {other}");
            return;
        }
    };
    let path = match Path::new(&[Vec2::new(0.0, 0.0), Vec2::new(96.0, 0.0), Vec2::new(96.0, 72.0)]) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("bad path: {e}");
            return;
        }
    };
    let design = RailingDesign {
        infill,
        ..Default::default()
    };
    let out = layout_railing(&path, &design, Tolerances::default());

    println!("post length {:.3}", out.post_length);
    for (label, pts) in [("post", &out.posts), ("infill", &out.infill), ("mount", &out.mounts)] {
        for p in pts {
            println!(
                "{label:>6} d={:8.3} at ({:7.3}, {:7.3}, {:6.3}) heading {:6.1}°",
                p.distance,
                p.position.x,
                p.position.y,
                p.position.z,
                p.angle().to_degrees()
            );
        }
    }
    for b in &out.bays {
        println!(
            "bay {}: {} pickets, clear {:.4}, on-center {:.4}",
            b.index,
            b.count,
            b.clear_spacing,
            b.on_center_spacing()
        );
    }
    for d in &out.diagnostics {
        println!("warning: {d}");
    }
}
