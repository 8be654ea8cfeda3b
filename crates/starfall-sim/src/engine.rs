//! Simulation engine — owns the registry, the clock, and the physics
//! backend, and exposes the hooks the physics engine drives.
//!
//! Per-tick order: clock update, behavior dispatch (registration order),
//! doom-buffer flush, gravity pass, lock consumption. The flush runs
//! between dispatch and the force passes so a destroyed fighter is gone
//! from every index before anything else reads it.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starfall_core::constants::*;
use starfall_core::events::SimEvent;
use starfall_core::types::{BodyId, TickClock};

use crate::physics::PhysicsWorld;
use crate::registry::Registry;
use crate::systems;
use crate::systems::snapshot::SceneSnapshot;

/// Tuning for one simulation scenario.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Gravitational constant (observed scenarios use 1, 10, or 50).
    pub gravity_const: f64,
    pub pursuit_gain: f64,
    pub flee_gain: f64,
    pub wander_gain: f64,
    /// Fixed recoil applied when a ship consumes a fighter lock.
    pub lock_recoil: f64,
    pub tower_firing_secs: f64,
    pub tower_charging_secs: f64,
    /// RNG seed for the wander behavior. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity_const: GRAVITY_CONST,
            pursuit_gain: PURSUIT_GAIN,
            flee_gain: FLEE_GAIN,
            wander_gain: WANDER_GAIN,
            lock_recoil: LOCK_RECOIL_FORCE,
            tower_firing_secs: TOWER_FIRING_SECS,
            tower_charging_secs: TOWER_CHARGING_SECS,
            seed: 42,
        }
    }
}

/// A fighter marked for destruction by a tower, flushed after dispatch.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DoomedFighter {
    pub fighter: BodyId,
    pub tower: BodyId,
}

/// The simulation. Owns the behavior-layer state and the physics backend.
pub struct SpaceSim<P: PhysicsWorld> {
    pub(crate) physics: P,
    pub(crate) registry: Registry,
    pub(crate) clock: TickClock,
    pub(crate) config: SimConfig,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) doomed: Vec<DoomedFighter>,
    pub(crate) events: Vec<SimEvent>,
}

impl<P: PhysicsWorld> SpaceSim<P> {
    pub fn new(physics: P, config: SimConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            physics,
            registry: Registry::new(),
            clock: TickClock::default(),
            config,
            rng,
            doomed: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Per-tick update hook, driven by the physics engine.
    /// `elapsed_secs` is the wall-clock delta the engine measured for
    /// this tick.
    pub fn on_tick(&mut self, elapsed_secs: f64) {
        self.clock.begin_tick(elapsed_secs);
        systems::behavior::run(self);
        systems::cleanup::flush(self);
        systems::gravity::run(self);
        systems::collision::consume_locks(self);
    }

    /// Contact-begin hook. Pairs arrive unordered; both orderings of
    /// each pair are checked against role tags.
    pub fn on_collision_start(&mut self, pairs: &[(BodyId, BodyId)]) {
        systems::collision::handle_contacts(self, pairs);
    }

    /// Read-only scene view for the render layer.
    pub fn snapshot(&self) -> SceneSnapshot {
        systems::snapshot::build(self)
    }

    /// Drain the events buffered since the last call.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut P {
        &mut self.physics
    }

    pub fn clock(&self) -> TickClock {
        self.clock
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
