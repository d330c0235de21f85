use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use filletpath::{check_tangency, SplineCfg, WaypointList};
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Fillet path generation from waypoint lists")]
struct Cmd {
    /// Log per-fillet and per-arc diagnostics
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a path; `.csv` output gets dense points, anything else full JSON
    Generate {
        /// Waypoints as CSV (`x,y`) or a JSON request
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Minimum turn radius (overrides the request file)
        #[arg(long)]
        radius: Option<f64>,
        /// Samples per unit arc length; 0 disables interpolation
        #[arg(long)]
        resolution: Option<f64>,
        /// Waypoint indices to drop before generating
        #[arg(long, value_delimiter = ',')]
        remove: Vec<usize>,
    },
    /// Generate without interpolation and verify fillet tangency
    Validate {
        #[arg(long)]
        input: String,
        #[arg(long)]
        radius: Option<f64>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Generate {
            input,
            out,
            radius,
            resolution,
            remove,
        } => generate(input, out, radius, resolution, remove),
        Action::Validate { input, radius } => validate(input, radius),
        Action::Report => report(),
    }
}

fn load(input: &str, remove: &[usize]) -> Result<(WaypointList, io::Request)> {
    let request = io::read_request(Path::new(input))?;
    let mut list = WaypointList::new();
    list.add_waypoints(request.waypoints());
    list.remove_waypoints(remove)
        .with_context(|| format!("removing waypoints {remove:?}"))?;
    Ok((list, request))
}

fn generate(
    input: String,
    out: String,
    radius: Option<f64>,
    resolution: Option<f64>,
    remove: Vec<usize>,
) -> Result<()> {
    let (list, request) = load(&input, &remove)?;
    let cfg = request.to_cfg(radius, resolution);
    tracing::info!(
        input,
        out,
        waypoints = list.len(),
        turn_radius = cfg.turn_radius,
        resolution = cfg.resolution,
        "generate"
    );
    let path = list
        .generate(&cfg)
        .with_context(|| format!("generating path from {input}"))?;
    io::write_path(Path::new(&out), &path)?;
    tracing::info!(
        points = path.points.len(),
        curves = path.curves().count(),
        length = path.length(),
        "path_written"
    );

    let payload = provenance::Payload::new(params(&cfg, list.len(), &remove)).with_input(input);
    let prov = provenance::write_sidecar(&out, payload)?;
    tracing::info!(provenance = %prov.display(), "provenance_written");
    Ok(())
}

fn validate(input: String, radius: Option<f64>) -> Result<()> {
    let (list, request) = load(&input, &[])?;
    let cfg = request.to_cfg(radius, Some(0.0));
    let path = list
        .generate(&cfg)
        .with_context(|| format!("generating path from {input}"))?;
    let report = check_tangency(&path, list.len());
    match &report.failure {
        None => {
            tracing::info!(
                input,
                checked = report.checked,
                straight = report.straight,
                "tangent"
            );
            Ok(())
        }
        Some(failure) => {
            tracing::error!(
                input,
                waypoint = failure.waypoint,
                check = ?failure.check,
                lhs = failure.lhs,
                rhs = failure.rhs,
                path = ?failure.path,
                "tangency_failed"
            );
            bail!(
                "fillet at waypoint {} failed the {:?} check ({} vs {})",
                failure.waypoint,
                failure.check,
                failure.lhs,
                failure.rhs
            )
        }
    }
}

fn params(cfg: &SplineCfg, waypoints: usize, removed: &[usize]) -> serde_json::Value {
    serde_json::json!({
        "turn_radius": cfg.turn_radius,
        "resolution": cfg.resolution,
        "waypoints": waypoints,
        "removed": removed,
        "boundary_points": cfg.boundary.len()
    })
}

fn report() -> Result<()> {
    let obj = provenance::document(serde_json::json!({}), &[], &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
