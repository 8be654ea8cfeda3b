//! Read-only scene view for the render layer.
//!
//! Built after the tick completes; the render hook reads it without ever
//! touching live simulation state.

use serde::{Deserialize, Serialize};

use starfall_core::components::{RenderColor, ShipState, TowerState};
use starfall_core::constants::TOWER_RAY_RANGE;
use starfall_core::enums::Role;
use starfall_core::types::{BodyId, Vec2};

use crate::engine::SpaceSim;
use crate::physics::PhysicsWorld;

/// Complete visible state of the scene at the end of a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub tick: u64,
    pub elapsed_secs: f64,
    pub entities: Vec<EntityView>,
    pub ships: Vec<ShipView>,
    pub towers: Vec<TowerView>,
}

/// One entity on the scene, in registration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    pub body: BodyId,
    pub role: Option<Role>,
    pub position: Vec2,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub body: BodyId,
    pub lock: Option<BodyId>,
    /// Last steering force, for debug-line rendering.
    pub last_steering: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub body: BodyId,
    pub charging: bool,
    pub firing: bool,
    pub beam_start: Vec2,
    pub beam_end: Vec2,
}

pub fn build<P: PhysicsWorld>(sim: &SpaceSim<P>) -> SceneSnapshot {
    let mut snapshot = SceneSnapshot {
        tick: sim.clock.tick,
        elapsed_secs: sim.clock.elapsed_secs,
        ..SceneSnapshot::default()
    };

    for &body in sim.registry.bodies() {
        let Some(position) = sim.physics.position(body) else {
            continue;
        };
        let role = sim.registry.role(body);
        let color = sim
            .registry
            .entity(body)
            .and_then(|e| sim.registry.world().get::<&RenderColor>(e).ok().map(|c| c.0.clone()))
            .unwrap_or_default();
        snapshot.entities.push(EntityView {
            body,
            role,
            position,
            color,
        });

        match role {
            Some(Role::Ship) => {
                if let Some(state) = sim.registry.copied::<ShipState>(body) {
                    snapshot.ships.push(ShipView {
                        body,
                        lock: state.lock,
                        last_steering: state.last_steering,
                    });
                }
            }
            Some(Role::Tower) => {
                if let Some(state) = sim.registry.copied::<TowerState>(body) {
                    // Beam collapses to a point when the mount planet
                    // cannot be resolved.
                    let beam_end = match sim.physics.angle(state.planet) {
                        Some(angle) => {
                            position + Vec2::new(angle.cos(), angle.sin()) * TOWER_RAY_RANGE
                        }
                        None => position,
                    };
                    snapshot.towers.push(TowerView {
                        body,
                        charging: state.phase.is_charging(),
                        firing: state.phase.is_firing(),
                        beam_start: position,
                        beam_end,
                    });
                }
            }
            _ => {}
        }
    }

    snapshot
}
