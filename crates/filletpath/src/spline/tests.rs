use super::*;
use crate::error::ErrorKind;
use crate::geom2::{distance, Rotation};
use crate::rand::{draw_waypoints, ReplayToken, WalkCfg};
use nalgebra::vector;
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI};

fn pts(raw: &[[f64; 2]]) -> Vec<Point> {
    raw.iter().map(|p| vector![p[0], p[1]]).collect()
}

/// Split `path.points` into the runs of interior samples that belong to each segment.
fn samples_per_segment(path: &FilletPath) -> Vec<&[Point]> {
    let mut out = Vec::with_capacity(path.segments.len());
    let mut cursor = 0;
    assert_eq!(path.points[0], path.anchors[0]);
    for i in 0..path.segments.len() {
        let end = path.anchors[i + 1];
        let j = cursor
            + 1
            + path.points[cursor + 1..]
                .iter()
                .position(|p| *p == end)
                .expect("anchor present in dense path");
        out.push(&path.points[cursor + 1..j]);
        cursor = j;
    }
    assert_eq!(cursor, path.points.len() - 1);
    out
}

#[test]
fn right_angle_corner_end_to_end() {
    let wps = pts(&[[0.0, 0.0], [3.0, 0.0], [3.0, 3.0]]);
    let path = generate(&wps, &SplineCfg::new(1.0, 0.0)).unwrap();

    assert_eq!(path.segments.len(), 3);
    assert_eq!(path.segments[0], Segment::Straight);
    assert_eq!(path.segments[2], Segment::Straight);
    match path.segments[1] {
        Segment::Curve { center, rotation } => {
            // Offset by the radius, perpendicular to the incoming heading.
            assert!((center - vector![3.0, 1.0]).norm() < 1e-12);
            assert_eq!(rotation, Rotation::CounterClockwise);
        }
        Segment::Straight => panic!("expected a curve at the corner"),
    }
    assert_eq!(path.anchors[0], vector![0.0, 0.0]);
    assert_eq!(path.anchors[1], vector![3.0, 0.0]);
    let exit = path.anchors[2];
    assert!((exit - vector![3.0 + 3f64.sqrt() / 2.0, 1.5]).norm() < 1e-9);
    assert_eq!(path.anchors[3], vector![3.0, 3.0]);
    // No interpolation at resolution 0.
    assert_eq!(path.points, path.anchors);
    assert_eq!(path.waypoint_anchor, vec![0, 1, 3]);

    let expected = 3.0 + 2.0 * PI / 3.0 + 3f64.sqrt();
    assert!((path.length() - expected).abs() < 1e-9);
    assert!(check_tangency(&path, wps.len()).is_ok());
}

#[test]
fn sample_counts_follow_floor_of_length_times_resolution() {
    let wps = pts(&[[0.0, 0.0], [3.0, 0.0], [3.0, 3.0]]);
    // Arc length 2π/3 ≈ 2.094.
    for (resolution, interior) in [(3.0, 5), (0.6, 0), (0.4, 0), (1.0, 1)] {
        let path = generate(&wps, &SplineCfg::new(1.0, resolution)).unwrap();
        assert_eq!(
            path.points.len(),
            path.anchors.len() + interior,
            "resolution {resolution}"
        );
    }
}

#[test]
fn arc_samples_signed_range_and_radius() {
    let c = vector![0.0, 0.0];
    let (a, b) = (vector![1.0, 0.0], vector![0.0, -1.0]);
    let s = sample_arc(a, b, c, Rotation::Clockwise, 1.0, 4.0).unwrap();
    assert!((s.angle_range + FRAC_PI_2).abs() < 1e-12);
    assert!((s.arc_length - FRAC_PI_2).abs() < 1e-12);
    // floor(π/2 · 4) = 6 sub-intervals, 5 interior points.
    assert_eq!(s.samples.len(), 5);
    for p in &s.samples {
        assert!(p.y < 0.0 && p.x > 0.0);
        assert!((p.norm() - 1.0).abs() < 1e-12);
    }
    // Travel order: angles strictly decreasing for clockwise.
    let angles: Vec<f64> = s.samples.iter().map(|p| p.y.atan2(p.x)).collect();
    assert!(angles.windows(2).all(|w| w[1] < w[0]));

    let s = sample_arc(a, b, c, Rotation::CounterClockwise, 1.0, 0.0).unwrap();
    assert!((s.angle_range - 1.5 * PI).abs() < 1e-12);
    assert!(s.samples.is_empty());
}

#[test]
fn minimum_separation_rejects_close_waypoints() {
    let err = generate(&pts(&[[0.0, 0.0], [0.0, 0.5]]), &SplineCfg::new(1.0, 0.0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InputValidation);
    match err {
        SplineError::WaypointsTooClose {
            index,
            distance,
            radius,
        } => {
            assert_eq!(index, 0);
            assert!((distance - 0.5).abs() < 1e-12);
            assert_eq!(radius, 1.0);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn input_validation_errors() {
    let two = pts(&[[0.0, 0.0], [5.0, 0.0]]);
    let cases = [
        (pts(&[[0.0, 0.0]]), SplineCfg::new(1.0, 0.0)),
        (Vec::new(), SplineCfg::new(1.0, 0.0)),
        (two.clone(), SplineCfg::new(0.0, 0.0)),
        (two.clone(), SplineCfg::new(-1.0, 0.0)),
        (two.clone(), SplineCfg::new(f64::NAN, 0.0)),
        (two.clone(), SplineCfg::new(1.0, -0.5)),
        (pts(&[[0.0, 0.0], [f64::INFINITY, 0.0]]), SplineCfg::new(1.0, 0.0)),
    ];
    for (wps, cfg) in cases {
        let err = generate(&wps, &cfg).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValidation, "{err}");
    }
}

#[test]
fn two_waypoints_is_a_single_straight() {
    let wps = pts(&[[0.0, 0.0], [1.0, 5.0]]);
    let path = generate(&wps, &SplineCfg::default()).unwrap();
    assert_eq!(path.segments, vec![Segment::Straight]);
    assert_eq!(path.points, wps);
    assert_eq!(check_tangency(&path, 2).checked, 0);
}

#[test]
fn collinear_waypoints_collapse_to_straights() {
    let wps = pts(&[[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0], [5.0, 5.0]]);
    let path = generate(&wps, &SplineCfg::default()).unwrap();
    assert!(path.segments.iter().all(|s| *s == Segment::Straight));
    assert_eq!(path.anchors, wps);
    assert_eq!(path.waypoint_anchor, vec![0, 1, 2, 3, 4]);
    let report = check_tangency(&path, wps.len());
    assert!(report.is_ok());
    assert_eq!((report.checked, report.straight), (0, 3));
}

#[test]
fn tangent_waypoint_then_corner() {
    let wps = pts(&[[0.0, 0.0], [3.0, 0.0], [6.0, 0.0], [6.0, 3.0]]);
    let path = generate(&wps, &SplineCfg::new(1.0, 0.0)).unwrap();
    assert_eq!(path.anchors.len(), 5);
    assert_eq!(path.waypoint_anchor, vec![0, 1, 2, 4]);
    assert_eq!(path.segments[1], Segment::Straight);
    assert!(matches!(path.segments[2], Segment::Curve { .. }));
    let report = check_tangency(&path, wps.len());
    assert!(report.is_ok(), "{report:?}");
    assert_eq!((report.checked, report.straight), (1, 1));
}

#[test]
fn exit_on_next_waypoint_continues_along_the_arc() {
    // The first arc (centre (0, 1)) leaves exactly at (1, 1), heading +y,
    // which already points at (1, 5).
    for y in [1.0, 1.0 + 1e-12, 1.0 - 1e-12] {
        let wps = pts(&[[-2.0, 0.0], [0.0, 0.0], [1.0, y], [1.0, 5.0]]);
        let path = generate(&wps, &SplineCfg::new(1.0, 0.0)).unwrap();
        assert_eq!(path.anchors.len(), 4, "y = {y}");
        assert_eq!(path.waypoint_anchor, vec![0, 1, 2, 3]);
        assert!((path.anchors[2] - vector![1.0, 1.0]).norm() < 1e-9);
        assert_eq!(path.segments[0], Segment::Straight);
        match path.segments[1] {
            Segment::Curve { center, rotation } => {
                assert!((center - vector![0.0, 1.0]).norm() < 1e-12);
                assert_eq!(rotation, Rotation::CounterClockwise);
            }
            other => panic!("expected curve, got {other:?}"),
        }
        assert_eq!(path.segments[2], Segment::Straight);
        let report = check_tangency(&path, wps.len());
        assert!(report.is_ok(), "{report:?}");
        assert_eq!((report.checked, report.straight), (1, 1));
    }
}

#[test]
fn exit_on_next_waypoint_into_another_turn() {
    // Arrive at (1, 1) heading +y and turn right toward (5, 1): the second
    // arc starts where the first one ends.
    let wps = pts(&[[-2.0, 0.0], [0.0, 0.0], [1.0, 1.0], [5.0, 1.0]]);
    let path = generate(&wps, &SplineCfg::new(1.0, 4.0)).unwrap();
    assert_eq!(path.waypoint_anchor, vec![0, 1, 2, 4]);
    let curves: Vec<_> = path.curves().collect();
    assert_eq!(curves.len(), 2);
    assert_eq!((curves[0].0, curves[1].0), (1, 2));
    assert!((curves[1].1 - vector![2.0, 1.0]).norm() < 1e-12);
    assert_eq!(curves[1].2, Rotation::Clockwise);
    let report = check_tangency(&path, wps.len());
    assert!(report.is_ok(), "{report:?}");
    assert_eq!((report.checked, report.straight), (2, 0));

    // Bending the junction breaks tangency at the second fillet's entry.
    let mut bent = path.clone();
    if let Segment::Curve { center, .. } = &mut bent.segments[2] {
        *center = vector![2.0, 1.5];
    }
    let failure = check_tangency(&bent, wps.len()).failure.expect("kinked junction");
    assert_eq!((failure.waypoint, failure.check), (2, TangencyCheck::Entry));
}

#[test]
fn oversized_resolution_is_rejected() {
    let wps = pts(&[[0.0, 0.0], [3.0, 0.0], [3.0, 3.0]]);
    for resolution in [1e308, f64::MAX, MAX_ARC_SAMPLES as f64 * 2.0] {
        let err = generate(&wps, &SplineCfg::new(1.0, resolution)).unwrap_err();
        assert!(matches!(err, SplineError::TooManySamples { .. }), "{err}");
        assert_eq!(err.kind(), ErrorKind::InputValidation);
    }
    // Straight-only paths never sample.
    let line = pts(&[[0.0, 0.0], [3.0, 0.0]]);
    assert!(generate(&line, &SplineCfg::new(1.0, 1e308)).is_ok());
}

#[test]
fn reference_waypoint_lists_are_tangent() {
    let lists = [
        pts(&[[4.0, 5.0], [7.0, 6.0], [6.0, 9.0], [4.0, 7.0], [2.0, 6.0], [0.0, 0.0]]),
        pts(&[[0.0, 0.0], [1.0, 5.0]]),
        pts(&[[5.0, 5.5], [10.0, 16.0], [20000.0, -2500.0]]),
        pts(&[[0.0, 0.0], [3.0, 0.0], [3.0, 3.0], [6.0, 3.0], [6.0, 6.0]]),
    ];
    for wps in lists {
        let path = generate(&wps, &SplineCfg::default()).unwrap();
        let report = check_tangency(&path, wps.len());
        assert!(report.is_ok(), "{report:?}");
        assert_eq!(*path.points.first().unwrap(), wps[0]);
        assert_eq!(*path.points.last().unwrap(), wps[wps.len() - 1]);
    }
}

#[test]
fn next_inside_circle_is_a_named_degeneracy() {
    let wps = pts(&[[0.0, 0.0], [3.0, 0.0], [3.0, 1.5]]);
    let err = generate(&wps, &SplineCfg::new(1.0, 0.0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::GeometricDegeneracy);
    assert!(matches!(err, SplineError::NextInsideCircle { .. }));
    assert_eq!(err.inputs().map(|i| i.waypoint), Some(1));
}

#[test]
fn tangency_check_reports_offender_and_raw_path() {
    let wps = pts(&[[0.0, 0.0], [3.0, 0.0], [3.0, 3.0], [6.0, 3.0]]);
    let mut path = generate(&wps, &SplineCfg::new(1.0, 0.0)).unwrap();
    assert!(check_tangency(&path, wps.len()).is_ok());

    let report = check_tangency(&path, 7);
    let failure = report.failure.expect("count mismatch");
    assert_eq!(failure.check, TangencyCheck::WaypointCount);

    // Push the first exit off its tangent.
    path.anchors[2] += vector![0.3, -0.2];
    let report = check_tangency(&path, wps.len());
    let failure = report.failure.expect("perturbed exit fails");
    assert_eq!(failure.waypoint, 1);
    assert_eq!(failure.check, TangencyCheck::Exit);
    assert_eq!(failure.path, path.anchors);
    assert!((failure.lhs - failure.rhs).abs() > 1e-4);
}

#[test]
fn tangency_check_flags_wrong_rotation() {
    let wps = pts(&[[0.0, 0.0], [3.0, 0.0], [3.0, 3.0]]);
    let mut path = generate(&wps, &SplineCfg::new(1.0, 0.0)).unwrap();
    if let Segment::Curve { rotation, .. } = &mut path.segments[1] {
        *rotation = Rotation::Clockwise;
    }
    let failure = check_tangency(&path, 3).failure.expect("rotation mismatch");
    assert_eq!(failure.check, TangencyCheck::Rotation);
}

#[test]
fn boundary_is_accepted_but_not_enforced() {
    let wps = pts(&[[0.0, 0.0], [3.0, 0.0], [3.0, 3.0]]);
    let plain = generate(&wps, &SplineCfg::new(1.0, 2.0)).unwrap();
    // A boundary the path clearly crosses.
    let fenced = SplineCfg::new(1.0, 2.0).with_boundary(pts(&[[1.0, -1.0], [1.0, 1.0]]));
    assert_eq!(generate(&wps, &fenced).unwrap(), plain);
}

#[test]
fn regeneration_is_bit_identical() {
    let wps = draw_waypoints(WalkCfg::for_radius(10, 0.8), ReplayToken { seed: 11, index: 0 });
    let cfg = SplineCfg::default();
    let a = generate(&wps, &cfg).unwrap();
    let b = generate(&wps, &cfg).unwrap();
    assert_eq!(a, b);
    assert!(a
        .points
        .iter()
        .zip(&b.points)
        .all(|(p, q)| p.x.to_bits() == q.x.to_bits() && p.y.to_bits() == q.y.to_bits()));
}

#[test]
fn removing_a_waypoint_keeps_the_prefix() {
    let cfg = SplineCfg::new(0.8, 2.0);
    // Gentle turns keep the two neighbours of a removed waypoint > 2r apart.
    let walk = WalkCfg {
        max_turn: PI / 3.0,
        ..WalkCfg::for_radius(9, 0.8)
    };
    for index in 0..20 {
        let wps = draw_waypoints(walk, ReplayToken { seed: 5, index });
        let mut list = crate::WaypointList::from(wps.clone());
        let before = list.generate(&cfg).unwrap();
        let k = 5;
        list.remove_waypoints(&[k]).unwrap();
        let after = list.generate(&cfg).unwrap();

        let a = before.waypoint_anchor[k - 1];
        assert_eq!(after.waypoint_anchor[k - 1], a);
        assert_eq!(before.anchors[..=a], after.anchors[..=a]);
        assert_eq!(before.segments[..a], after.segments[..a]);
        assert_ne!(before.anchors, after.anchors);
    }
}

#[test]
fn samples_lie_on_their_arc() {
    let wps = pts(&[[4.0, 5.0], [7.0, 6.0], [6.0, 9.0], [4.0, 7.0], [2.0, 6.0], [0.0, 0.0]]);
    let path = generate(&wps, &SplineCfg::new(0.8, 10.0)).unwrap();
    let runs = samples_per_segment(&path);
    let mut total = 0;
    for (segment, run) in path.segments.iter().zip(runs) {
        match segment {
            Segment::Curve { center, .. } => {
                for p in run {
                    assert!((distance(*p, *center) - 0.8).abs() < 1e-6);
                }
                total += run.len();
            }
            Segment::Straight => assert!(run.is_empty()),
        }
    }
    assert!(total > 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_walks_generate_tangent_paths(
        seed in any::<u64>(),
        count in 2usize..14,
        radius in 0.1f64..3.0,
        resolution in 0.0f64..8.0,
    ) {
        let wps = draw_waypoints(WalkCfg::for_radius(count, radius), ReplayToken { seed, index: 0 });
        let path = generate(&wps, &SplineCfg::new(radius, resolution)).unwrap();
        let report = check_tangency(&path, wps.len());
        prop_assert!(report.is_ok(), "{:?}", report);
        prop_assert_eq!(path.points[0], wps[0]);
        prop_assert_eq!(*path.points.last().unwrap(), wps[wps.len() - 1]);
        for (segment, run) in path.segments.iter().zip(samples_per_segment(&path)) {
            if let Segment::Curve { center, .. } = segment {
                for p in run {
                    prop_assert!((distance(*p, *center) - radius).abs() < 1e-6);
                }
            }
        }
    }
}
