//! Random waypoint walks (bounded turns + replay tokens).
//!
//! Purpose
//! - Provide reproducible waypoint sequences for property tests and
//!   benchmarks. Steps are at least `step_min` long, so choosing
//!   `step_min >= 2 · turn_radius` guarantees every fillet has a tangent
//!   (the next waypoint can never fall inside the fillet circle).
//!
//! Model
//! - Start at the origin with a random heading. Each step turns by a uniform
//!   angle in [−max_turn, max_turn] and advances a uniform length in
//!   [step_min, step_max].
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use crate::geom2::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{PI, TAU};

/// Walk configuration.
#[derive(Clone, Copy, Debug)]
pub struct WalkCfg {
    /// Number of waypoints (at least 2).
    pub count: usize,
    pub step_min: f64,
    pub step_max: f64,
    /// Largest heading change per step (radians), clamped to [0, π].
    pub max_turn: f64,
}

impl WalkCfg {
    /// Walk whose steps are long enough for fillets of radius `turn_radius`.
    pub fn for_radius(count: usize, turn_radius: f64) -> Self {
        Self {
            count,
            step_min: 2.5 * turn_radius,
            step_max: 6.0 * turn_radius,
            max_turn: 0.75 * PI,
        }
    }
}

impl Default for WalkCfg {
    fn default() -> Self {
        Self::for_radius(8, 1.0)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random waypoint walk.
pub fn draw_waypoints(cfg: WalkCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.max(2);
    let lo = cfg.step_min.max(1e-9);
    let hi = cfg.step_max.max(lo);
    let turn = cfg.max_turn.clamp(0.0, PI);
    let mut heading = rng.gen::<f64>() * TAU;
    let mut p = Point::zeros();
    let mut out = Vec::with_capacity(n);
    out.push(p);
    for _ in 1..n {
        heading += (rng.gen::<f64>() * 2.0 - 1.0) * turn;
        let len = if hi > lo { rng.gen_range(lo..hi) } else { lo };
        p += Point::new(heading.cos(), heading.sin()) * len;
        out.push(p);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::distance;

    #[test]
    fn walks_are_reproducible_and_spaced() {
        let cfg = WalkCfg::for_radius(12, 0.5);
        let tok = ReplayToken { seed: 3, index: 4 };
        let a = draw_waypoints(cfg, tok);
        let b = draw_waypoints(cfg, tok);
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        for pair in a.windows(2) {
            let d = distance(pair[0], pair[1]);
            assert!(d >= cfg.step_min - 1e-12 && d <= cfg.step_max + 1e-12);
        }
        let c = draw_waypoints(cfg, ReplayToken { seed: 3, index: 5 });
        assert_ne!(a, c);
    }
}
