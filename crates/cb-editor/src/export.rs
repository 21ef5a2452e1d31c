//! JSON export.
//!
//! Unlike the persisted snapshot, an export carries a timestamp and no id
//! counter. It is still accepted by import, which only needs `stars`.

use cb_core::{Connection, Scene, Star};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub stars: Vec<Star>,
    pub connections: Vec<Connection>,
    pub exported_at: DateTime<Utc>,
}

impl ExportDocument {
    pub fn from_scene(scene: &Scene, exported_at: DateTime<Utc>) -> Self {
        let snapshot = scene.serialize();
        Self {
            stars: snapshot.stars,
            connections: snapshot.connections,
            exported_at,
        }
    }
}

/// Pretty-printed export of the whole scene.
pub fn export_json(scene: &Scene) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ExportDocument::from_scene(scene, Utc::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cb_core::{ImportMode, Point, Rgb, Snapshot};
    use pretty_assertions::assert_eq;

    #[test]
    fn export_is_importable() {
        let mut scene = Scene::new();
        scene.add_star(Point::new(1.0, 2.0), Rgb::WHITE);
        scene.add_star(Point::new(3.0, 4.0), Rgb::WHITE);

        let json = export_json(&scene).unwrap();
        assert!(json.contains("\"exportedAt\""));
        assert!(json.contains('\n'));

        let snapshot = Snapshot::from_json(&json).unwrap();
        let mut restored = Scene::new();
        let summary = restored.import_snapshot(snapshot, ImportMode::Replace);
        assert_eq!(summary.stars, 2);
        assert_eq!(restored.stars(), scene.stars());
        assert_eq!(restored.next_star_id(), scene.next_star_id());
    }
}
