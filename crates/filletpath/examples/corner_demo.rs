//! Print the anchors, curve descriptors and dense point count for a few waypoint lists.
//!
//! Usage:
//!   cargo run -p filletpath --example corner_demo -- [radius] [resolution]

use filletpath::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let radius: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0.8);
    let resolution: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3.0);
    let cfg = SplineCfg::new(radius, resolution);

    let lists: [&[[f64; 2]]; 3] = [
        &[[0.0, 0.0], [3.0, 0.0], [3.0, 3.0]],
        &[[5.0, 5.0], [7.0, 8.0], [10.0, 3.0], [4.0, 4.0]],
        &[[4.0, 5.0], [7.0, 6.0], [6.0, 9.0], [4.0, 7.0], [2.0, 6.0], [0.0, 0.0]],
    ];
    for raw in lists {
        let list: WaypointList = raw.iter().map(|p| Vec2::new(p[0], p[1])).collect();
        match list.generate(&cfg) {
            Ok(path) => {
                println!(
                    "waypoints={} anchors={} points={} length={:.6}",
                    list.len(),
                    path.anchors.len(),
                    path.points.len(),
                    path.length()
                );
                for (i, center, rotation) in path.curves() {
                    println!(
                        "  curve at anchor {i}: centre=({:.6}, {:.6}) {rotation:?}",
                        center.x, center.y
                    );
                }
                let report = check_tangency(&path, list.len());
                println!(
                    "  tangent={} checked={} straight={}",
                    report.is_ok(),
                    report.checked,
                    report.straight
                );
            }
            Err(err) => println!("waypoints={} error: {err}", list.len()),
        }
    }
}
