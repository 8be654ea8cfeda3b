//! Entity registry — identity, role, and behavior bookkeeping.
//!
//! Wraps a hecs world with two explicit indices: a body-id map for O(1)
//! lookup and a registration-order list. Role enumeration and behavior
//! dispatch iterate the list, so tie-breaking in the force model stays
//! deterministic (hecs iterates by archetype, not insertion order).
//!
//! The registry is an explicit constructed object; tests build isolated
//! instances.

use std::collections::HashMap;

use hecs::{Entity, World};

use starfall_core::components::{BodyRef, Dynamic, RenderColor, RoleTag};
use starfall_core::enums::{BehaviorKind, Role};
use starfall_core::errors::SceneError;
use starfall_core::types::BodyId;

pub struct Registry {
    world: World,
    by_body: HashMap<BodyId, Entity>,
    order: Vec<BodyId>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            by_body: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Insert an entity's base record: body handle, optional role tag,
    /// color, and optional behavior. Side components are attached with
    /// [`Registry::attach`]. Fails on duplicate ids.
    pub fn register(
        &mut self,
        body: BodyId,
        role: Option<Role>,
        color: &str,
        behavior: Option<BehaviorKind>,
    ) -> Result<Entity, SceneError> {
        if self.by_body.contains_key(&body) {
            return Err(SceneError::DuplicateBody(body));
        }
        let entity = self
            .world
            .spawn((BodyRef { id: body }, RenderColor(color.to_string())));
        if let Some(role) = role {
            let _ = self.world.insert_one(entity, RoleTag(role));
        }
        if let Some(kind) = behavior {
            let _ = self.world.insert_one(entity, kind);
        }
        self.by_body.insert(body, entity);
        self.order.push(body);
        Ok(entity)
    }

    /// Attach a side component to a registered body. Silently ignores
    /// unknown bodies.
    pub fn attach<T: hecs::Component>(&mut self, body: BodyId, component: T) {
        if let Some(&entity) = self.by_body.get(&body) {
            let _ = self.world.insert_one(entity, component);
        }
    }

    /// Remove a body from the world and every index. Idempotent; silent
    /// on miss.
    pub fn remove(&mut self, body: BodyId) {
        if let Some(entity) = self.by_body.remove(&body) {
            let _ = self.world.despawn(entity);
            self.order.retain(|&b| b != body);
        }
    }

    pub fn entity(&self, body: BodyId) -> Option<Entity> {
        self.by_body.get(&body).copied()
    }

    /// Body id backing a hecs entity.
    pub fn body_of(&self, entity: Entity) -> Option<BodyId> {
        self.world.get::<&BodyRef>(entity).ok().map(|r| r.id)
    }

    pub fn contains(&self, body: BodyId) -> bool {
        self.by_body.contains_key(&body)
    }

    pub fn role(&self, body: BodyId) -> Option<Role> {
        let entity = self.entity(body)?;
        self.world.get::<&RoleTag>(entity).ok().map(|tag| tag.0)
    }

    pub fn behavior(&self, body: BodyId) -> Option<BehaviorKind> {
        let entity = self.entity(body)?;
        self.world.get::<&BehaviorKind>(entity).ok().map(|k| *k)
    }

    /// Copy of a `Copy` side component, `None` on any miss.
    pub fn copied<T: hecs::Component + Copy>(&self, body: BodyId) -> Option<T> {
        let entity = self.entity(body)?;
        self.world.get::<&T>(entity).ok().map(|c| *c)
    }

    /// Every registered body, in registration order.
    pub fn bodies(&self) -> &[BodyId] {
        &self.order
    }

    /// Bodies currently tagged with `role`, in registration order.
    pub fn bodies_of(&self, role: Role) -> Vec<BodyId> {
        self.order
            .iter()
            .copied()
            .filter(|&b| self.role(b) == Some(role))
            .collect()
    }

    /// Bodies that receive gravity, in registration order.
    pub fn dynamic_bodies(&self) -> Vec<BodyId> {
        self.order
            .iter()
            .copied()
            .filter(|&b| {
                self.entity(b)
                    .is_some_and(|e| self.world.get::<&Dynamic>(e).is_ok())
            })
            .collect()
    }

    /// Behavior-carrying bodies with their kinds, in registration order.
    pub fn behavior_entries(&self) -> Vec<(BodyId, BehaviorKind)> {
        self.order
            .iter()
            .copied()
            .filter_map(|b| self.behavior(b).map(|kind| (b, kind)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
