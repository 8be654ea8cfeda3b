//! Physics engine interface.
//!
//! The core never integrates bodies or detects collisions itself — it
//! drives an external engine through [`PhysicsWorld`] and receives hooks
//! back (`SpaceSim::on_tick`, `SpaceSim::on_collision_start`).
//!
//! [`FlatWorld`] is a headless reference backend: enough of an engine to
//! run the behavior layer deterministically without a frontend, used by
//! every engine-level test.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use starfall_core::constants::DEFAULT_BODY_DENSITY;
use starfall_core::enums::Shape;
use starfall_core::types::{BodyId, Vec2};

/// Creation parameters for a physics body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDef {
    pub shape: Shape,
    pub position: Vec2,
    #[serde(default)]
    pub is_static: bool,
    /// Sensor bodies report contacts but never collide physically.
    #[serde(default)]
    pub is_sensor: bool,
    #[serde(default = "default_density")]
    pub density: f64,
}

fn default_density() -> f64 {
    DEFAULT_BODY_DENSITY
}

impl BodyDef {
    /// A dynamic (moving, gravity-receiving) body.
    pub fn dynamic(shape: Shape, position: Vec2) -> Self {
        Self {
            shape,
            position,
            is_static: false,
            is_sensor: false,
            density: DEFAULT_BODY_DENSITY,
        }
    }

    /// A static body that never moves.
    pub fn fixed(shape: Shape, position: Vec2) -> Self {
        Self {
            is_static: true,
            ..Self::dynamic(shape, position)
        }
    }

    pub fn sensor(mut self) -> Self {
        self.is_sensor = true;
        self
    }
}

/// Capabilities the simulation consumes from the physics engine.
///
/// Queries return `None` for unknown bodies rather than failing the tick.
pub trait PhysicsWorld {
    fn create_body(&mut self, def: BodyDef) -> BodyId;
    fn remove_body(&mut self, body: BodyId);

    fn position(&self, body: BodyId) -> Option<Vec2>;
    fn mass(&self, body: BodyId) -> Option<f64>;
    /// Current rotation of the body (radians).
    fn angle(&self, body: BodyId) -> Option<f64>;
    fn shape(&self, body: BodyId) -> Option<Shape>;

    /// Accumulate a force on the body for the next integration step.
    fn apply_force(&mut self, body: BodyId, force: Vec2);
    fn set_velocity(&mut self, body: BodyId, velocity: Vec2);
    /// Rotate a body about a pivot, advancing its angle by `delta`.
    fn rotate(&mut self, body: BodyId, delta: f64, pivot: Vec2);

    /// Bodies whose bounding circle comes within `thickness / 2` of the
    /// segment `start..end`, ordered by distance along the ray.
    fn ray_hits(&self, start: Vec2, end: Vec2, thickness: f64) -> Vec<BodyId>;
}

#[derive(Debug, Clone)]
struct FlatBody {
    shape: Shape,
    position: Vec2,
    velocity: Vec2,
    angle: f64,
    force: Vec2,
    mass: f64,
    is_static: bool,
    is_sensor: bool,
}

/// Headless reference backend.
///
/// Bodies carry position, velocity, a force accumulator, and an angle;
/// [`FlatWorld::step`] advances them with an explicit Euler step. Mass is
/// area times density regardless of the static flag.
#[derive(Debug, Default)]
pub struct FlatWorld {
    bodies: HashMap<BodyId, FlatBody>,
    next_id: u64,
}

impl FlatWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Net force accumulated on a body since the last `step`.
    pub fn force(&self, body: BodyId) -> Option<Vec2> {
        self.bodies.get(&body).map(|b| b.force)
    }

    pub fn velocity(&self, body: BodyId) -> Option<Vec2> {
        self.bodies.get(&body).map(|b| b.velocity)
    }

    pub fn contains(&self, body: BodyId) -> bool {
        self.bodies.contains_key(&body)
    }

    pub fn is_sensor(&self, body: BodyId) -> Option<bool> {
        self.bodies.get(&body).map(|b| b.is_sensor)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advance every dynamic body by one explicit Euler step and clear
    /// all force accumulators.
    pub fn step(&mut self, dt: f64) {
        for body in self.bodies.values_mut() {
            if !body.is_static && body.mass > 0.0 {
                body.velocity += body.force * (dt / body.mass);
                body.position += body.velocity * dt;
            }
            body.force = Vec2::ZERO;
        }
    }
}

impl PhysicsWorld for FlatWorld {
    fn create_body(&mut self, def: BodyDef) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.insert(
            id,
            FlatBody {
                shape: def.shape,
                position: def.position,
                velocity: Vec2::ZERO,
                angle: 0.0,
                force: Vec2::ZERO,
                mass: def.shape.area() * def.density,
                is_static: def.is_static,
                is_sensor: def.is_sensor,
            },
        );
        id
    }

    fn remove_body(&mut self, body: BodyId) {
        self.bodies.remove(&body);
    }

    fn position(&self, body: BodyId) -> Option<Vec2> {
        self.bodies.get(&body).map(|b| b.position)
    }

    fn mass(&self, body: BodyId) -> Option<f64> {
        self.bodies.get(&body).map(|b| b.mass)
    }

    fn angle(&self, body: BodyId) -> Option<f64> {
        self.bodies.get(&body).map(|b| b.angle)
    }

    fn shape(&self, body: BodyId) -> Option<Shape> {
        self.bodies.get(&body).map(|b| b.shape)
    }

    fn apply_force(&mut self, body: BodyId, force: Vec2) {
        if let Some(b) = self.bodies.get_mut(&body) {
            b.force += force;
        }
    }

    fn set_velocity(&mut self, body: BodyId, velocity: Vec2) {
        if let Some(b) = self.bodies.get_mut(&body) {
            b.velocity = velocity;
        }
    }

    fn rotate(&mut self, body: BodyId, delta: f64, pivot: Vec2) {
        if let Some(b) = self.bodies.get_mut(&body) {
            let offset = b.position - pivot;
            let (sin, cos) = delta.sin_cos();
            b.position = pivot
                + Vec2::new(
                    offset.x * cos - offset.y * sin,
                    offset.x * sin + offset.y * cos,
                );
            b.angle += delta;
        }
    }

    fn ray_hits(&self, start: Vec2, end: Vec2, thickness: f64) -> Vec<BodyId> {
        let dir = end - start;
        let len_sq = dir.length_squared();
        let half_width = thickness * 0.5;

        let mut hits: Vec<(f64, BodyId)> = Vec::new();
        for (&id, body) in &self.bodies {
            // Closest point on the segment to the body center.
            let t = if len_sq <= f64::EPSILON {
                0.0
            } else {
                let to_body = body.position - start;
                ((to_body.x * dir.x + to_body.y * dir.y) / len_sq).clamp(0.0, 1.0)
            };
            let closest = start + dir * t;
            let reach = half_width + body.shape.bounding_radius();
            if body.position.distance_to(closest) <= reach {
                hits.push((t, id));
            }
        }
        hits.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.cmp(&b.1))
        });
        hits.into_iter().map(|(_, id)| id).collect()
    }
}
