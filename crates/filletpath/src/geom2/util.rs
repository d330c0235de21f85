//! Planar primitives shared by the solvers, the assembler and the validators.
//!
//! Conventions
//! - Angles are radians unless a name says otherwise (`vertex_angle_deg`).
//! - Canonical angle range is (−π, π]; sweeps live in [0, 2π).

use std::f64::consts::{PI, TAU};

use super::types::{Point, Rotation};

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

/// Angle at vertex `b` between rays b→a and b→c, in degrees (law of cosines).
///
/// The cosine is clamped to [−1, 1] so near-collinear triples never leave the
/// domain of `acos`. Returns NaN when `a` or `c` coincides with `b`.
pub fn vertex_angle_deg(a: Point, b: Point, c: Point) -> f64 {
    let ba = distance(a, b);
    let bc = distance(c, b);
    let ac = distance(a, c);
    let cos = (ba * ba + bc * bc - ac * ac) / (2.0 * ba * bc);
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Sign function: −1, 0 or 1 (NaN maps to 0).
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// z-component of the cross product `u × v`.
#[inline]
pub fn cross(u: Point, v: Point) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Reflect `p` across the infinite line through `a` and `b`.
///
/// Returns `None` for a degenerate line (`a` and `b` coincide or are not finite).
pub fn mirror_across_line(a: Point, b: Point, p: Point) -> Option<Point> {
    let dir = b - a;
    let len2 = dir.norm_squared();
    if !len2.is_finite() || len2 <= 0.0 {
        return None;
    }
    let t = (p - a).dot(&dir) / len2;
    let foot = a + dir * t;
    Some(foot * 2.0 - p)
}

/// Map any finite angle into (−π, π] with a single modulo step.
///
/// Values already in range are returned unchanged, so the map is idempotent.
/// Non-finite input yields NaN; callers check with [`is_normalized`].
pub fn normalize_angle(theta: f64) -> f64 {
    if theta > -PI && theta <= PI {
        return theta;
    }
    let mut r = (theta + PI).rem_euclid(TAU) - PI;
    if r <= -PI {
        r += TAU;
    }
    if r > PI {
        r -= TAU;
    }
    r
}

/// True iff `theta` lies in (−π, π].
#[inline]
pub fn is_normalized(theta: f64) -> bool {
    theta > -PI && theta <= PI
}

/// Non-negative sweep from `from` to `to` travelling counter-clockwise, in [0, 2π).
#[inline]
pub fn ccw_sweep(from: f64, to: f64) -> f64 {
    let s = (to - from).rem_euclid(TAU);
    if s >= TAU {
        0.0
    } else {
        s
    }
}

/// Position on a circle of radius `r` about `center` at polar angle `theta`.
#[inline]
pub fn point_on_circle(center: Point, r: f64, theta: f64) -> Point {
    Point::new(center.x + r * theta.cos(), center.y + r * theta.sin())
}

/// Unit direction of travel at `p` on a circle about `center`.
#[inline]
pub fn arc_tangent(center: Point, p: Point, rotation: Rotation) -> Point {
    let radial = (p - center).normalize();
    Point::new(-radial.y, radial.x) * rotation.signum()
}

/// Polar angle of `p` as seen from `center`, in (−π, π].
#[inline]
pub fn angle_about(center: Point, p: Point) -> f64 {
    let d = p - center;
    normalize_angle(d.y.atan2(d.x))
}

/// Heading (polar angle) of the direction `from → to`, in (−π, π].
#[inline]
pub fn heading(from: Point, to: Point) -> f64 {
    angle_about(from, to)
}

/// Round to `decimals` places (used for tangency comparisons).
#[inline]
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}
