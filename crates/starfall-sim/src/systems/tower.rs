//! Tower weapon cycle: Idle -> Firing -> Charging -> Idle.
//!
//! The sentry behavior counts the current phase down by the tick's
//! wall-clock delta, casts the firing ray along the mount planet's
//! current angle, triggers on the first fighter in the beam, and dooms
//! every fighter crossing the beam while the tower is not charging.
//! The countdown lives in `TowerState`, so destroying a tower also
//! destroys its schedule.

use log::debug;

use starfall_core::components::TowerState;
use starfall_core::constants::{TOWER_RAY_RANGE, TOWER_RAY_THICKNESS};
use starfall_core::enums::{Role, TowerPhase};
use starfall_core::events::SimEvent;
use starfall_core::types::{BodyId, Vec2};

use crate::engine::{DoomedFighter, SpaceSim};
use crate::physics::PhysicsWorld;

pub fn run_sentry<P: PhysicsWorld>(sim: &mut SpaceSim<P>, body: BodyId) {
    let Some(entity) = sim.registry.entity(body) else {
        return;
    };
    let Some(start) = sim.physics.position(body) else {
        return;
    };
    let mut state = match sim.registry.world().get::<&TowerState>(entity) {
        Ok(state) => *state,
        Err(_) => return,
    };
    let mut transitions: Vec<TowerPhase> = Vec::new();

    // Count down before the beam check so an expired window transitions
    // first and this tick's hits see the new phase.
    advance_phase(
        &mut state,
        sim.clock.dt_secs,
        sim.config.tower_charging_secs,
        &mut transitions,
    );

    // Hold fire when the mount planet cannot be resolved.
    if let Some(angle) = sim.physics.angle(state.planet) {
        let end = start + Vec2::new(angle.cos(), angle.sin()) * TOWER_RAY_RANGE;
        let fighters: Vec<BodyId> = sim
            .physics
            .ray_hits(start, end, TOWER_RAY_THICKNESS)
            .into_iter()
            .filter(|&hit| sim.registry.role(hit) == Some(Role::Fighter))
            .collect();

        if state.phase == TowerPhase::Idle && !fighters.is_empty() {
            state.phase = TowerPhase::Firing;
            state.phase_remaining_secs = sim.config.tower_firing_secs;
            transitions.push(state.phase);
        }

        if !state.phase.is_charging() {
            for fighter in fighters {
                if !sim.doomed.iter().any(|d| d.fighter == fighter) {
                    sim.doomed.push(DoomedFighter {
                        fighter,
                        tower: body,
                    });
                }
            }
        }
    }

    if let Ok(mut slot) = sim.registry.world_mut().get::<&mut TowerState>(entity) {
        *slot = state;
    }
    for phase in transitions {
        debug!("tower {body} -> {phase:?}");
        sim.events.push(SimEvent::TowerPhaseChanged { tower: body, phase });
    }
}

/// Apply countdown transitions for one tick. Overshoot past the firing
/// window carries into the charging window so the full cycle stays
/// wall-clock accurate at any tick rate.
fn advance_phase(
    state: &mut TowerState,
    dt: f64,
    charging_secs: f64,
    transitions: &mut Vec<TowerPhase>,
) {
    match state.phase {
        TowerPhase::Idle => {}
        TowerPhase::Firing => {
            state.phase_remaining_secs -= dt;
            if state.phase_remaining_secs <= 0.0 {
                state.phase = TowerPhase::Charging;
                state.phase_remaining_secs += charging_secs;
                transitions.push(state.phase);
                // A whole charging window may already have elapsed.
                if state.phase_remaining_secs <= 0.0 {
                    state.phase = TowerPhase::Idle;
                    state.phase_remaining_secs = 0.0;
                    transitions.push(state.phase);
                }
            }
        }
        TowerPhase::Charging => {
            state.phase_remaining_secs -= dt;
            if state.phase_remaining_secs <= 0.0 {
                state.phase = TowerPhase::Idle;
                state.phase_remaining_secs = 0.0;
                transitions.push(state.phase);
            }
        }
    }
}
