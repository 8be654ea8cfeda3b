//! Simulation constants and tuning parameters.
//!
//! Scenario-dependent values are defaults here and overridable through
//! `SimConfig` in `starfall-sim`.

/// Default gravitational constant. Observed scenario values: 1, 10, 50.
pub const GRAVITY_CONST: f64 = 10.0;

/// Pairs closer than this are skipped by the gravity pass.
pub const MIN_GRAVITY_DISTANCE: f64 = 1.0;

/// Fighter pursuit steering gain.
pub const PURSUIT_GAIN: f64 = 0.02;

/// Ship flee-and-center steering gain.
pub const FLEE_GAIN: f64 = 0.02;

/// Wander steering gain.
pub const WANDER_GAIN: f64 = 0.01;

/// Fixed recoil force a ship applies when consuming a fighter lock.
pub const LOCK_RECOIL_FORCE: f64 = 0.004;

// --- Tower weapon cycle ---

/// Beam-active window (wall-clock seconds).
pub const TOWER_FIRING_SECS: f64 = 4.0;

/// Cooldown window (wall-clock seconds).
pub const TOWER_CHARGING_SECS: f64 = 4.0;

/// Firing-line length.
pub const TOWER_RAY_RANGE: f64 = 1000.0;

/// Firing-line thickness.
pub const TOWER_RAY_THICKNESS: f64 = 5.0;

/// Tower body footprint.
pub const TOWER_WIDTH: f64 = 20.0;
pub const TOWER_HEIGHT: f64 = 10.0;

// --- Bodies ---

/// Planet rotation per tick (radians).
pub const PLANET_SPIN_PER_TICK: f64 = 0.01;

/// Default body density; mass = area * density.
pub const DEFAULT_BODY_DENSITY: f64 = 0.001;
