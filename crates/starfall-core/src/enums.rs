//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Entity role — selects which side components an entity carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Fighter,
    Ship,
    Tower,
    Planet,
    Wall,
    Meteor,
}

/// Body shape understood by the physics engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    pub fn area(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => std::f64::consts::PI * radius * radius,
            Shape::Rectangle { width, height } => width * height,
        }
    }

    /// Radius of the smallest circle containing the shape, used for
    /// conservative ray-overlap tests.
    pub fn bounding_radius(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => radius,
            Shape::Rectangle { width, height } => 0.5 * (width * width + height * height).sqrt(),
        }
    }
}

/// Per-tick behavior attached to an entity.
///
/// Behaviors are dispatched by kind rather than stored as closures, so
/// they serialize, compare, and test cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BehaviorKind {
    /// Fighter: steer toward the nearest registered ship.
    Pursue,
    /// Ship: flee nearby fighters while drifting toward the world origin.
    FleeAndCenter,
    /// Random small kicks, roughly once per second of wall-clock time.
    Wander,
    /// Planet: rotate in place, carrying mounted towers along.
    Spin,
    /// Tower: watch the firing line and run the weapon cycle.
    Sentry,
}

/// Weapon cycle of a tower.
///
/// The phases are mutually exclusive by construction — a tower cannot be
/// charging and firing at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TowerPhase {
    #[default]
    Idle,
    /// Beam active; fighters crossing it are destroyed.
    Firing,
    /// Cooldown; fighters crossing the beam are immune.
    Charging,
}

impl TowerPhase {
    pub fn is_firing(self) -> bool {
        self == TowerPhase::Firing
    }

    pub fn is_charging(self) -> bool {
        self == TowerPhase::Charging
    }
}
