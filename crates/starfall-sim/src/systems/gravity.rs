//! N-body gravity pass: every dynamic body is attracted by every planet.
//!
//! Force magnitude `G * m_planet * m_dyn / d^2`, direction from the
//! dynamic body toward the planet. Static-static and dynamic-dynamic
//! pairs never receive gravity. Pairs closer than the minimum separation
//! contribute nothing.

use starfall_core::constants::MIN_GRAVITY_DISTANCE;
use starfall_core::enums::Role;

use crate::engine::SpaceSim;
use crate::physics::PhysicsWorld;

pub fn run<P: PhysicsWorld>(sim: &mut SpaceSim<P>) {
    let planets = sim.registry.bodies_of(Role::Planet);
    let dynamics = sim.registry.dynamic_bodies();
    if planets.is_empty() || dynamics.is_empty() {
        return;
    }

    let g = sim.config.gravity_const;
    for &dynamic in &dynamics {
        let (Some(dyn_pos), Some(dyn_mass)) =
            (sim.physics.position(dynamic), sim.physics.mass(dynamic))
        else {
            continue;
        };
        for &planet in &planets {
            let (Some(planet_pos), Some(planet_mass)) =
                (sim.physics.position(planet), sim.physics.mass(planet))
            else {
                continue;
            };
            let arrow = planet_pos - dyn_pos;
            let dist = arrow.length();
            if dist < MIN_GRAVITY_DISTANCE {
                continue;
            }
            let magnitude = g * planet_mass * dyn_mass / (dist * dist);
            sim.physics.apply_force(dynamic, arrow / dist * magnitude);
        }
    }
}
