//! Doom-buffer flush — the only place entities leave the simulation
//! mid-run.
//!
//! Runs immediately after behavior dispatch, so a destroyed fighter is
//! gone from the registry, every role view, every ship lock, and the
//! physics world before gravity and lock consumption read them.

use log::info;

use starfall_core::components::ShipState;
use starfall_core::events::SimEvent;
use starfall_core::types::BodyId;

use crate::engine::SpaceSim;
use crate::physics::PhysicsWorld;

pub fn flush<P: PhysicsWorld>(sim: &mut SpaceSim<P>) {
    if sim.doomed.is_empty() {
        return;
    }
    let doomed = std::mem::take(&mut sim.doomed);
    for kill in doomed {
        if !sim.registry.contains(kill.fighter) {
            continue;
        }
        sim.registry.remove(kill.fighter);
        sim.physics.remove_body(kill.fighter);
        clear_ship_locks(sim, kill.fighter);

        info!("fighter {} destroyed by tower {}", kill.fighter, kill.tower);
        sim.events.push(SimEvent::FighterDestroyed {
            fighter: kill.fighter,
            tower: kill.tower,
        });
    }
}

/// Null out every ship lock pointing at the removed body so it cannot be
/// referenced again this tick.
fn clear_ship_locks<P: PhysicsWorld>(sim: &mut SpaceSim<P>, dead: BodyId) {
    for (_entity, state) in sim.registry.world_mut().query_mut::<&mut ShipState>() {
        if state.lock == Some(dead) {
            state.lock = None;
        }
    }
}
