use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub base: LocationBase,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationBase {
    #[serde(rename = "SpawnPointParams", default)]
    pub spawn_point_params: Vec<SpawnPoint>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Player or bot spawn descriptor on a map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpawnPoint {
    pub id: String,
    pub position: Vector3,
    pub rotation: f64,
    /// Factions allowed to use the point (`"Pmc"`, `"Savage"`, `"All"`).
    pub sides: Vec<String>,
    /// Spawn categories (`"Player"`, `"Bot"`, `"Boss"`, ...).
    pub categories: Vec<String>,
    /// Infiltration zone name.
    pub infiltration: String,
    pub delay_to_can_spawn_sec: f64,
    pub collider_params: ColliderParams,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColliderParams {
    #[serde(rename = "_parent")]
    pub parent: String,
    #[serde(rename = "_props")]
    pub props: SphereCollider,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ColliderParams {
    pub const SPHERE_PARENT: &'static str = "SpawnSphereParams";

    /// Sphere centered on the spawn position.
    pub fn sphere(radius: f64) -> Self {
        Self {
            parent: Self::SPHERE_PARENT.to_string(),
            props: SphereCollider {
                center: Vector3::ZERO,
                radius,
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SphereCollider {
    pub center: Vector3,
    pub radius: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_point_uses_host_field_names() {
        let point = SpawnPoint {
            id: "spawn_1".into(),
            position: Vector3::new(1.0, 2.0, 3.0),
            rotation: 90.0,
            sides: vec!["Pmc".into()],
            categories: vec!["Player".into()],
            infiltration: "Boiler".into(),
            delay_to_can_spawn_sec: 5.0,
            collider_params: ColliderParams::sphere(80.0),
            extra: Map::new(),
        };

        let encoded = serde_json::to_value(&point).unwrap();
        assert_eq!(encoded["Id"], "spawn_1");
        assert_eq!(encoded["Position"]["y"], 2.0);
        assert_eq!(encoded["DelayToCanSpawnSec"], 5.0);
        assert_eq!(encoded["ColliderParams"]["_parent"], "SpawnSphereParams");
        assert_eq!(encoded["ColliderParams"]["_props"]["Radius"], 80.0);
        assert_eq!(encoded["ColliderParams"]["_props"]["Center"]["x"], 0.0);
    }

    #[test]
    fn collider_keeps_unknown_props() {
        let raw = serde_json::json!({
            "_parent": "SpawnSphereParams",
            "_props": { "Center": { "x": 0.0, "y": 0.0, "z": 0.0 }, "Radius": 20.0, "Height": 4.0 },
            "Shape": "sphere"
        });
        let collider: ColliderParams = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(collider.props.radius, 20.0);
        assert_eq!(serde_json::to_value(&collider).unwrap(), raw);
    }
}
