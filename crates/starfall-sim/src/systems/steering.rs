//! Steering force computations.
//!
//! Pure functions of positions, masses, and tuning — no registry or
//! physics access, so they unit-test in isolation.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::types::{BodyId, Vec2};

/// Pursuit: head straight for the nearest ship.
///
/// Returns zero when `ships` is empty. Distance ties keep the earliest
/// entry, so the target is stable for a fixed registration order.
pub fn pursuit(
    self_pos: Vec2,
    self_mass: f64,
    ships: &[(BodyId, Vec2)],
    gain: f64,
    dt: f64,
) -> Vec2 {
    match nearest(self_pos, ships) {
        Some((_, target)) => {
            (target - self_pos).normalized_or_zero() * (self_mass * gain * dt)
        }
        None => Vec2::ZERO,
    }
}

/// Nearest candidate by Euclidean distance; `None` on an empty slice.
pub fn nearest(from: Vec2, candidates: &[(BodyId, Vec2)]) -> Option<(BodyId, Vec2)> {
    // min_by keeps the first of equal elements, which preserves
    // registration-order tie-breaking.
    candidates.iter().copied().min_by(|a, b| {
        let da = a.1.distance_to(from);
        let db = b.1.distance_to(from);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    })
}

/// Flee-and-center: repulsion from every fighter weighted by inverse
/// distance, summed and normalized, blended 50/50 with the unit vector
/// toward the world origin.
///
/// A zero repulsion sum (no fighters, or contributions canceling out)
/// means no repulsion signal; the center pull still applies.
pub fn flee_and_center(
    self_pos: Vec2,
    self_mass: f64,
    fighters: &[(BodyId, Vec2)],
    gain: f64,
    dt: f64,
) -> Vec2 {
    let mut repulsion = Vec2::ZERO;
    for &(_, fighter_pos) in fighters {
        let away = self_pos - fighter_pos;
        let dist = away.length();
        if dist <= f64::EPSILON {
            continue;
        }
        repulsion += away / dist / dist;
    }
    let repulsion_dir = repulsion.normalized_or_zero();
    let to_center = (-self_pos).normalized_or_zero();
    let blended = repulsion_dir * 0.5 + to_center * 0.5;
    blended * (self_mass * gain * dt)
}

/// Wander: with probability `dt` (per-tick Bernoulli approximating a
/// once-per-second Poisson process), a kick of `mass * gain` in a
/// uniformly random direction.
pub fn wander(self_mass: f64, gain: f64, dt: f64, rng: &mut ChaCha8Rng) -> Vec2 {
    if !rng.gen_bool(dt.clamp(0.0, 1.0)) {
        return Vec2::ZERO;
    }
    let theta = rng.gen_range(0.0..std::f64::consts::TAU);
    Vec2::new(theta.cos(), theta.sin()) * (self_mass * gain)
}
