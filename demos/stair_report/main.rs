//! Curved stair report: builds a staircase and logs what was generated.
//!
//! Usage:
//! ```text
//! cargo run --example stair_report                   # stock quarter turn
//! cargo run --example stair_report -- 12 270         # 12 steps over 270 degrees
//! cargo run --example stair_report -- 12 270 ccw     # mirrored
//! RUST_LOG=curved_stair=trace cargo run --example stair_report
//! ```

use curved_stair::geometry::PlanarProjection;
use curved_stair::operations::query::{BoundingBox, IsValid};
use curved_stair::tessellation::TessellateBrushes;
use curved_stair::{BrushStore, CurvedStair, StairError, StairParams};
use tracing::{info, warn};

fn main() -> Result<(), StairError> {
    // Default: WARN for everything, INFO for this report.
    // Override with RUST_LOG env var (e.g. RUST_LOG=curved_stair=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("stair_report=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let params = params_from_args(std::env::args().skip(1));
    let mut stair = CurvedStair::new(params);
    let mut store = BrushStore::new();
    let projection = PlanarProjection::default();

    let bounds = stair.regenerate(&mut store, &projection)?;
    info!(
        num_steps = stair.brush_count(),
        min = ?bounds.min,
        max = ?bounds.max,
        "staircase generated"
    );

    for (i, id) in stair.brushes().iter().enumerate() {
        let brush = store.brush(*id)?;
        if !IsValid::new(brush).execute() {
            warn!(step = i, "brush failed validation");
        }
        let step_bounds = brush.bounds();
        info!(step = i, min = ?step_bounds.min, max = ?step_bounds.max, "step");
    }

    let union = BoundingBox::new(stair.brushes()).execute(&store)?;
    info!(size = ?union.size(), "union of brush bounds");

    let mesh = TessellateBrushes::new(stair.brushes()).execute(&store)?;
    info!(
        vertices = mesh.vertices.len(),
        triangles = mesh.triangle_count(),
        "mesh extracted"
    );
    Ok(())
}

fn params_from_args(mut args: impl Iterator<Item = String>) -> StairParams {
    let mut params = StairParams::new();
    if let Some(steps) = args.next().and_then(|s| s.parse().ok()) {
        params.set_num_steps(steps);
    }
    if let Some(angle) = args.next().and_then(|s| s.parse().ok()) {
        params.set_angle_of_curve(angle);
    }
    if args.next().as_deref() == Some("ccw") {
        params.set_counter_clockwise(true);
    }
    params
}
