//! Simulation behavior layer for Starfall.
//!
//! Owns the entity registry and runs the per-tick systems (behavior
//! dispatch, gravity, collision rules, the tower weapon cycle) against an
//! external physics engine reached through the [`PhysicsWorld`] trait.
//! The engine drives the core through two hooks: [`SpaceSim::on_tick`]
//! and [`SpaceSim::on_collision_start`].

pub mod engine;
pub mod physics;
pub mod registry;
pub mod scene;
pub mod systems;

pub use engine::{SimConfig, SpaceSim};
pub use physics::{BodyDef, FlatWorld, PhysicsWorld};
pub use registry::Registry;
pub use scene::{default_scene, EntitySpec, SceneSpec};
pub use starfall_core as core;
