//! Map spawn point helpers.

use db_core::{ColliderParams, SpawnPoint, Vector3};
use serde::Deserialize;
use serde_json::Map;
use tracing::debug;

use crate::{Result, SpaceApi};

/// Caller-provided part of a spawn point. Delay and collider come from
/// [`db_core::SpawnConfig`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SpawnPointSpec {
    pub id: String,
    pub position: Vector3,
    pub rotation: f64,
    pub sides: Vec<String>,
    pub categories: Vec<String>,
    pub infiltration: String,
}

impl SpaceApi<'_> {
    /// Appends a spawn point to `map`. Ids are not checked for duplicates.
    pub fn add_spawn_point(&mut self, map: &str, spec: SpawnPointSpec) -> Result<()> {
        let spawn = &self.config.spawn;
        let point = SpawnPoint {
            id: spec.id,
            position: spec.position,
            rotation: spec.rotation,
            sides: spec.sides,
            categories: spec.categories,
            infiltration: spec.infiltration,
            delay_to_can_spawn_sec: spawn.delay_to_can_spawn_sec,
            collider_params: ColliderParams::sphere(spawn.collider_radius),
            extra: Map::new(),
        };

        let points = &mut self.db.location_mut(map)?.base.spawn_point_params;
        debug!(map, spawn = %point.id, "added spawn point");
        points.push(point);
        Ok(())
    }
}
