//! Scene construction — spawn methods and data-driven population.
//!
//! Scenes are built once, before the simulation loop starts. A tower
//! mounted on a non-circular planet is the only fatal misconfiguration;
//! it cannot be reached after construction.

use log::info;
use serde::{Deserialize, Serialize};

use starfall_core::components::{
    Dynamic, FighterState, PlanetState, ShipState, TowerState,
};
use starfall_core::constants::{
    PLANET_SPIN_PER_TICK, TOWER_HEIGHT, TOWER_WIDTH,
};
use starfall_core::enums::{BehaviorKind, Role, Shape};
use starfall_core::errors::SceneError;
use starfall_core::types::{BodyId, Vec2};

use crate::engine::SpaceSim;
use crate::physics::{BodyDef, PhysicsWorld};

/// Data form of one entity in a scene description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum EntitySpec {
    Planet {
        position: Vec2,
        radius: f64,
        color: String,
        /// Number of towers mounted at construction.
        #[serde(default)]
        towers: u32,
        #[serde(default = "default_spin")]
        spin_per_tick: f64,
    },
    Ship {
        position: Vec2,
        width: f64,
        height: f64,
        color: String,
        #[serde(default)]
        velocity: Vec2,
        /// Wander instead of the default flee-and-center behavior.
        #[serde(default)]
        wander: bool,
    },
    Fighter {
        position: Vec2,
        width: f64,
        height: f64,
        color: String,
        #[serde(default)]
        velocity: Vec2,
    },
    Wall {
        position: Vec2,
        width: f64,
        height: f64,
        #[serde(default = "default_wall_color")]
        color: String,
    },
    Meteor {
        position: Vec2,
        width: f64,
        height: f64,
        color: String,
        #[serde(default)]
        velocity: Vec2,
    },
}

fn default_spin() -> f64 {
    PLANET_SPIN_PER_TICK
}

fn default_wall_color() -> String {
    "purple".to_string()
}

/// A complete scene description. External configuration deserializes
/// into this and [`SpaceSim::populate`] realizes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSpec {
    pub entities: Vec<EntitySpec>,
}

impl<P: PhysicsWorld> SpaceSim<P> {
    /// Realize a scene description.
    pub fn populate(&mut self, scene: &SceneSpec) -> Result<(), SceneError> {
        for spec in &scene.entities {
            match spec {
                EntitySpec::Planet {
                    position,
                    radius,
                    color,
                    towers,
                    spin_per_tick,
                } => {
                    let planet =
                        self.spawn_planet(*position, *radius, color, *spin_per_tick)?;
                    for _ in 0..*towers {
                        self.spawn_tower(planet)?;
                    }
                }
                EntitySpec::Ship {
                    position,
                    width,
                    height,
                    color,
                    velocity,
                    wander,
                } => {
                    self.spawn_ship(*position, *width, *height, color, *velocity, *wander)?;
                }
                EntitySpec::Fighter {
                    position,
                    width,
                    height,
                    color,
                    velocity,
                } => {
                    self.spawn_fighter(*position, *width, *height, color, *velocity)?;
                }
                EntitySpec::Wall {
                    position,
                    width,
                    height,
                    color,
                } => {
                    self.spawn_wall(*position, *width, *height, color)?;
                }
                EntitySpec::Meteor {
                    position,
                    width,
                    height,
                    color,
                    velocity,
                } => {
                    self.spawn_meteor(*position, *width, *height, color, *velocity)?;
                }
            }
        }
        info!("scene populated with {} entities", self.registry.len());
        Ok(())
    }

    /// Static circular mass. Spins in place, carrying mounted towers.
    pub fn spawn_planet(
        &mut self,
        position: Vec2,
        radius: f64,
        color: &str,
        spin_per_tick: f64,
    ) -> Result<BodyId, SceneError> {
        let body = self.register_body(
            BodyDef::fixed(Shape::Circle { radius }, position),
            Role::Planet,
            color,
            Some(BehaviorKind::Spin),
        )?;
        self.registry.attach(
            body,
            PlanetState {
                towers: Vec::new(),
                spin_per_tick,
            },
        );
        Ok(body)
    }

    /// Mount a tower on a planet's rim, on its current zero-angle side.
    pub fn spawn_tower(&mut self, planet: BodyId) -> Result<BodyId, SceneError> {
        if self.registry.role(planet) != Some(Role::Planet) {
            return Err(SceneError::NoSuchPlanet(planet));
        }
        let Some(center) = self.physics.position(planet) else {
            return Err(SceneError::NoSuchPlanet(planet));
        };
        let Some(Shape::Circle { radius }) = self.physics.shape(planet) else {
            return Err(SceneError::TowerBaseNotCircular { planet });
        };

        let position = center + Vec2::new(radius, 0.0);
        let body = self.register_body(
            BodyDef::fixed(
                Shape::Rectangle {
                    width: TOWER_WIDTH,
                    height: TOWER_HEIGHT,
                },
                position,
            )
            .sensor(),
            Role::Tower,
            "rgba(100,100,100,0.5)",
            Some(BehaviorKind::Sentry),
        )?;
        self.registry.attach(body, TowerState::new(planet));

        if let Some(entity) = self.registry.entity(planet) {
            if let Ok(mut state) = self.registry.world_mut().get::<&mut PlanetState>(entity) {
                state.towers.push(body);
            }
        }
        Ok(body)
    }

    pub fn spawn_ship(
        &mut self,
        position: Vec2,
        width: f64,
        height: f64,
        color: &str,
        velocity: Vec2,
        wander: bool,
    ) -> Result<BodyId, SceneError> {
        let behavior = if wander {
            BehaviorKind::Wander
        } else {
            BehaviorKind::FleeAndCenter
        };
        let body = self.register_body(
            BodyDef::dynamic(Shape::Rectangle { width, height }, position),
            Role::Ship,
            color,
            Some(behavior),
        )?;
        self.registry.attach(body, Dynamic);
        self.registry.attach(body, ShipState::default());
        if velocity != Vec2::ZERO {
            self.physics.set_velocity(body, velocity);
        }
        Ok(body)
    }

    pub fn spawn_fighter(
        &mut self,
        position: Vec2,
        width: f64,
        height: f64,
        color: &str,
        velocity: Vec2,
    ) -> Result<BodyId, SceneError> {
        let body = self.register_body(
            BodyDef::dynamic(Shape::Rectangle { width, height }, position),
            Role::Fighter,
            color,
            Some(BehaviorKind::Pursue),
        )?;
        self.registry.attach(body, Dynamic);
        self.registry.attach(body, FighterState::default());
        if velocity != Vec2::ZERO {
            self.physics.set_velocity(body, velocity);
        }
        Ok(body)
    }

    pub fn spawn_wall(
        &mut self,
        position: Vec2,
        width: f64,
        height: f64,
        color: &str,
    ) -> Result<BodyId, SceneError> {
        self.register_body(
            BodyDef::fixed(Shape::Rectangle { width, height }, position),
            Role::Wall,
            color,
            None,
        )
    }

    /// Untethered dynamic body: receives gravity, has no behavior.
    pub fn spawn_meteor(
        &mut self,
        position: Vec2,
        width: f64,
        height: f64,
        color: &str,
        velocity: Vec2,
    ) -> Result<BodyId, SceneError> {
        let body = self.register_body(
            BodyDef::dynamic(Shape::Rectangle { width, height }, position),
            Role::Meteor,
            color,
            None,
        )?;
        self.registry.attach(body, Dynamic);
        if velocity != Vec2::ZERO {
            self.physics.set_velocity(body, velocity);
        }
        Ok(body)
    }

    fn register_body(
        &mut self,
        def: BodyDef,
        role: Role,
        color: &str,
        behavior: Option<BehaviorKind>,
    ) -> Result<BodyId, SceneError> {
        let body = self.physics.create_body(def);
        if let Err(err) = self.registry.register(body, Some(role), color, behavior) {
            self.physics.remove_body(body);
            return Err(err);
        }
        Ok(body)
    }
}

/// The stock scene: three planets (the sun carrying one tower), two
/// ships, two fighters, and four boundary walls.
pub fn default_scene() -> SceneSpec {
    SceneSpec {
        entities: vec![
            EntitySpec::Planet {
                position: Vec2::new(-400.0, -200.0),
                radius: 20.0,
                color: "green".to_string(),
                towers: 0,
                spin_per_tick: PLANET_SPIN_PER_TICK,
            },
            EntitySpec::Planet {
                position: Vec2::new(400.0, 300.0),
                radius: 50.0,
                color: "yellow".to_string(),
                towers: 1,
                spin_per_tick: PLANET_SPIN_PER_TICK,
            },
            EntitySpec::Planet {
                position: Vec2::new(400.0, 0.0),
                radius: 10.0,
                color: "grey".to_string(),
                towers: 0,
                spin_per_tick: PLANET_SPIN_PER_TICK,
            },
            EntitySpec::Ship {
                position: Vec2::new(-20.0, 0.0),
                width: 10.0,
                height: 10.0,
                color: "blue".to_string(),
                velocity: Vec2::ZERO,
                wander: false,
            },
            EntitySpec::Ship {
                position: Vec2::new(0.0, 0.0),
                width: 10.0,
                height: 10.0,
                color: "blue".to_string(),
                velocity: Vec2::ZERO,
                wander: false,
            },
            EntitySpec::Fighter {
                position: Vec2::new(-100.0, 10.0),
                width: 10.0,
                height: 10.0,
                color: "red".to_string(),
                velocity: Vec2::ZERO,
            },
            EntitySpec::Fighter {
                position: Vec2::new(-100.0, -300.0),
                width: 10.0,
                height: 10.0,
                color: "red".to_string(),
                velocity: Vec2::ZERO,
            },
            EntitySpec::Wall {
                position: Vec2::new(850.0, 0.0),
                width: 100.0,
                height: 2000.0,
                color: "purple".to_string(),
            },
            EntitySpec::Wall {
                position: Vec2::new(-850.0, 0.0),
                width: 100.0,
                height: 2000.0,
                color: "purple".to_string(),
            },
            EntitySpec::Wall {
                position: Vec2::new(0.0, -500.0),
                width: 2000.0,
                height: 100.0,
                color: "purple".to_string(),
            },
            EntitySpec::Wall {
                position: Vec2::new(0.0, 500.0),
                width: 2000.0,
                height: 100.0,
                color: "purple".to_string(),
            },
        ],
    }
}
