//! Fundamental geometric and simulation types.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Stable identity of a physics body.
///
/// Assigned by the physics engine at body creation and reused as the
/// registry key everywhere in the core. The core never owns a body —
/// it holds only this id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 2D vector in simulation space (x = right, y = down, screen convention).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn distance_to(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or zero when the length is
    /// too small to normalize (degenerate-geometry guard).
    pub fn normalized_or_zero(self) -> Vec2 {
        let len = self.length();
        if len <= f64::EPSILON {
            Vec2::ZERO
        } else {
            self / len
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

/// Wall-clock-derived per-tick timing.
///
/// `dt_secs` is recomputed at the top of every tick from the elapsed time
/// the physics engine reports, is read by all force and behavior
/// computations during that tick, and never changes mid-tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickClock {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Duration of the current tick in seconds.
    pub dt_secs: f64,
    /// Total elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl TickClock {
    /// Start a new tick. Negative deltas from the engine clamp to zero.
    pub fn begin_tick(&mut self, elapsed_secs: f64) {
        self.dt_secs = elapsed_secs.max(0.0);
        self.elapsed_secs += self.dt_secs;
        self.tick += 1;
    }
}
