//! Events emitted by the simulation for the render and audio layer.

use serde::{Deserialize, Serialize};

use crate::enums::TowerPhase;
use crate::types::BodyId;

/// Simulation events, buffered during a tick and drained by the embedder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A ship collided with a fighter and acquired a lock on it.
    ShipLockedFighter { ship: BodyId, fighter: BodyId },
    /// A tower's beam destroyed a fighter.
    FighterDestroyed { fighter: BodyId, tower: BodyId },
    /// A tower moved to a new weapon-cycle phase.
    TowerPhaseChanged { tower: BodyId, phase: TowerPhase },
}
