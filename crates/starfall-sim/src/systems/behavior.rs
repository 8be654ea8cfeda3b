//! Behavior dispatch — one pass per tick over every entity carrying a
//! behavior, in registration order.
//!
//! Behaviors apply forces and mutate their own side components. Registry
//! membership never changes during the pass; tower kills go through the
//! doom buffer and are flushed afterwards.

use starfall_core::components::{PlanetState, ShipState};
use starfall_core::enums::{BehaviorKind, Role};
use starfall_core::types::{BodyId, Vec2};

use crate::engine::SpaceSim;
use crate::physics::PhysicsWorld;
use crate::systems::{steering, tower};

pub fn run<P: PhysicsWorld>(sim: &mut SpaceSim<P>) {
    let entries = sim.registry.behavior_entries();
    for (body, kind) in entries {
        match kind {
            BehaviorKind::Pursue => pursue(sim, body),
            BehaviorKind::FleeAndCenter => flee_and_center(sim, body),
            BehaviorKind::Wander => wander(sim, body),
            BehaviorKind::Spin => spin(sim, body),
            BehaviorKind::Sentry => tower::run_sentry(sim, body),
        }
    }
}

/// Positions of all bodies of a role, in registration order, skipping
/// bodies the physics world no longer knows.
fn positions_of<P: PhysicsWorld>(sim: &SpaceSim<P>, role: Role) -> Vec<(BodyId, Vec2)> {
    sim.registry
        .bodies_of(role)
        .into_iter()
        .filter_map(|b| sim.physics.position(b).map(|p| (b, p)))
        .collect()
}

fn pursue<P: PhysicsWorld>(sim: &mut SpaceSim<P>, body: BodyId) {
    let (Some(pos), Some(mass)) = (sim.physics.position(body), sim.physics.mass(body)) else {
        return;
    };
    let ships = positions_of(sim, Role::Ship);
    let force = steering::pursuit(pos, mass, &ships, sim.config.pursuit_gain, sim.clock.dt_secs);
    if force != Vec2::ZERO {
        sim.physics.apply_force(body, force);
    }
}

fn flee_and_center<P: PhysicsWorld>(sim: &mut SpaceSim<P>, body: BodyId) {
    let (Some(pos), Some(mass)) = (sim.physics.position(body), sim.physics.mass(body)) else {
        return;
    };
    let fighters = positions_of(sim, Role::Fighter);
    let force =
        steering::flee_and_center(pos, mass, &fighters, sim.config.flee_gain, sim.clock.dt_secs);
    sim.physics.apply_force(body, force);

    if let Some(entity) = sim.registry.entity(body) {
        if let Ok(mut state) = sim.registry.world_mut().get::<&mut ShipState>(entity) {
            state.last_steering = force;
        }
    }
}

fn wander<P: PhysicsWorld>(sim: &mut SpaceSim<P>, body: BodyId) {
    let Some(mass) = sim.physics.mass(body) else {
        return;
    };
    let force = steering::wander(
        mass,
        sim.config.wander_gain,
        sim.clock.dt_secs,
        &mut sim.rng,
    );
    if force != Vec2::ZERO {
        sim.physics.apply_force(body, force);
    }
}

/// Rotate a planet in place, carrying its mounted towers about the
/// planet center.
fn spin<P: PhysicsWorld>(sim: &mut SpaceSim<P>, body: BodyId) {
    let Some(pivot) = sim.physics.position(body) else {
        return;
    };
    let Some(entity) = sim.registry.entity(body) else {
        return;
    };
    let (delta, towers) = match sim.registry.world().get::<&PlanetState>(entity) {
        Ok(state) => (state.spin_per_tick, state.towers.clone()),
        Err(_) => return,
    };
    sim.physics.rotate(body, delta, pivot);
    for mounted in towers {
        sim.physics.rotate(mounted, delta, pivot);
    }
}
