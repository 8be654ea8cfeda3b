//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Systems in `starfall-sim` operate on them.

use serde::{Deserialize, Serialize};

use crate::enums::{Role, TowerPhase};
use crate::types::{BodyId, Vec2};

/// Non-owning handle to the physics body backing an entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyRef {
    pub id: BodyId,
}

/// Role tag — selects the side components an entity carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoleTag(pub Role);

/// Marks a body that receives gravity from planets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dynamic;

/// Cosmetic fill color, passed through to the render layer untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderColor(pub String);

/// Fighter side table.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FighterState {
    /// Ship currently locking this fighter. Weak reference: existence
    /// check only, a stale id simply misses on the next lookup.
    pub chased_by: Option<BodyId>,
}

/// Ship side table.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShipState {
    /// Fighter this ship collided with, set by the collision handler and
    /// consumed (cleared) by the post-collision force step.
    pub lock: Option<BodyId>,
    /// Last steering force computed for this ship. Debug rendering only.
    pub last_steering: Vec2,
}

/// Tower side table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TowerState {
    /// Mount planet, consulted for the firing-line angle and spin pivot.
    pub planet: BodyId,
    pub phase: TowerPhase,
    /// Wall-clock seconds left in the current phase. Unused while idle.
    pub phase_remaining_secs: f64,
}

impl TowerState {
    pub fn new(planet: BodyId) -> Self {
        Self {
            planet,
            phase: TowerPhase::Idle,
            phase_remaining_secs: 0.0,
        }
    }
}

/// Planet side table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanetState {
    /// Mounted towers, in mount order.
    pub towers: Vec<BodyId>,
    /// Rotation applied per tick (radians).
    pub spin_per_tick: f64,
}
