//! Collision-start handling and lock consumption.
//!
//! Contact pairs arrive unordered from the physics engine once per tick;
//! each pair is checked in both orderings against role tags. The only
//! contact rule is (ship, fighter): the ship acquires a lock on the
//! fighter, consumed by the post-collision force step on the next tick.

use log::debug;

use starfall_core::components::{FighterState, ShipState};
use starfall_core::enums::Role;
use starfall_core::events::SimEvent;
use starfall_core::types::BodyId;

use crate::engine::SpaceSim;
use crate::physics::PhysicsWorld;

/// Resolve a batch of contact-begin pairs. Pair processing order does
/// not affect the final state for disjoint pairs.
pub fn handle_contacts<P: PhysicsWorld>(sim: &mut SpaceSim<P>, pairs: &[(BodyId, BodyId)]) {
    for &(a, b) in pairs {
        for (first, second) in [(a, b), (b, a)] {
            if sim.registry.role(first) == Some(Role::Ship)
                && sim.registry.role(second) == Some(Role::Fighter)
            {
                lock_fighter(sim, first, second);
            }
        }
    }
}

/// Point `ship`'s lock at `fighter`, overwriting any prior lock, and
/// record the back-reference on the fighter.
fn lock_fighter<P: PhysicsWorld>(sim: &mut SpaceSim<P>, ship: BodyId, fighter: BodyId) {
    let Some(ship_entity) = sim.registry.entity(ship) else {
        return;
    };
    let previous = match sim.registry.world_mut().get::<&mut ShipState>(ship_entity) {
        Ok(mut state) => state.lock.replace(fighter),
        Err(_) => return,
    };

    // Drop the back-reference of a fighter this lock displaced.
    if let Some(displaced) = previous.filter(|&p| p != fighter) {
        set_chased_by(sim, displaced, None);
    }
    set_chased_by(sim, fighter, Some(ship));

    debug!("ship {ship} locked fighter {fighter}");
    sim.events.push(SimEvent::ShipLockedFighter { ship, fighter });
}

fn set_chased_by<P: PhysicsWorld>(sim: &mut SpaceSim<P>, fighter: BodyId, ship: Option<BodyId>) {
    if let Some(entity) = sim.registry.entity(fighter) {
        if let Ok(mut state) = sim.registry.world_mut().get::<&mut FighterState>(entity) {
            state.chased_by = ship;
        }
    }
}

/// Post-collision force step: a ship holding a lock applies a fixed
/// recoil away from the locked fighter, then drops the lock. A lock
/// whose fighter no longer exists is dropped without force (lazy
/// invalidation of stale references).
pub fn consume_locks<P: PhysicsWorld>(sim: &mut SpaceSim<P>) {
    for ship in sim.registry.bodies_of(Role::Ship) {
        let Some(entity) = sim.registry.entity(ship) else {
            continue;
        };
        let lock = match sim.registry.world_mut().get::<&mut ShipState>(entity) {
            Ok(mut state) => state.lock.take(),
            Err(_) => continue,
        };
        let Some(fighter) = lock else {
            continue;
        };
        if !sim.registry.contains(fighter) {
            continue;
        }

        let (Some(ship_pos), Some(fighter_pos)) =
            (sim.physics.position(ship), sim.physics.position(fighter))
        else {
            continue;
        };
        let away = (ship_pos - fighter_pos).normalized_or_zero();
        sim.physics.apply_force(ship, away * sim.config.lock_recoil);
        set_chased_by(sim, fighter, None);
    }
}
