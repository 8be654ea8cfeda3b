//! Scene-construction error taxonomy.
//!
//! Misconfiguration is fatal only before the simulation loop starts;
//! nothing in the per-tick path returns these.

use thiserror::Error;

use crate::types::BodyId;

#[derive(Debug, Error)]
pub enum SceneError {
    /// Towers mount on circular planets only — the radial firing line
    /// needs a radius.
    #[error("tower mount requires a circular planet, body {planet} is not circular")]
    TowerBaseNotCircular { planet: BodyId },

    #[error("body {0} is already registered")]
    DuplicateBody(BodyId),

    #[error("body {0} is not a registered planet")]
    NoSuchPlanet(BodyId),
}
