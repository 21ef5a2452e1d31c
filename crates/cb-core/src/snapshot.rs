//! Persisted scene format.
//!
//! ```json
//! { "stars": [...], "connections": [...], "nextStarId": 4 }
//! ```
//!
//! The same document is used for local storage, share links and imports.

use crate::model::{Connection, Star};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot has no `stars` field")]
    MissingStars,
    #[error("snapshot `stars` is not an array")]
    StarsNotArray,
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown import mode `{0}` (expected `replace` or `append`)")]
    UnknownMode(String),
}

fn first_star_id() -> u64 {
    1
}

/// A full, order-preserving copy of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub stars: Vec<Star>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default = "first_star_id")]
    pub next_star_id: u64,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            stars: Vec::new(),
            connections: Vec::new(),
            next_star_id: first_star_id(),
        }
    }
}

impl Snapshot {
    /// Parse and validate a snapshot document.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, SnapshotError> {
        match value.get("stars") {
            None => return Err(SnapshotError::MissingStars),
            Some(stars) if !stars.is_array() => return Err(SnapshotError::StarsNotArray),
            Some(_) => {}
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty() && self.connections.is_empty()
    }
}

/// How an imported snapshot combines with the current scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    #[default]
    Replace,
    Append,
}

impl FromStr for ImportMode {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replace" => Ok(ImportMode::Replace),
            "append" => Ok(ImportMode::Append),
            other => Err(SnapshotError::UnknownMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::StarId;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_minimal_document() {
        let snap = Snapshot::from_json(r#"{"stars": [{"id": 2, "x": 5, "y": 6}]}"#).unwrap();
        assert_eq!(snap.stars.len(), 1);
        assert_eq!(snap.stars[0].id, StarId(2));
        assert!(snap.connections.is_empty());
        assert_eq!(snap.next_star_id, 1);
    }

    #[test]
    fn rejects_missing_or_non_array_stars() {
        assert!(matches!(
            Snapshot::from_json(r#"{"connections": []}"#),
            Err(SnapshotError::MissingStars)
        ));
        assert!(matches!(
            Snapshot::from_json(r#"{"stars": {"id": 1}}"#),
            Err(SnapshotError::StarsNotArray)
        ));
        assert!(matches!(
            Snapshot::from_json("not json"),
            Err(SnapshotError::Json(_))
        ));
    }

    #[test]
    fn json_roundtrip_is_exact() {
        let json = r##"{"stars":[{"id":1,"x":10.0,"y":20.0,"color":"#ff6b6b","title":"Sun","description":"hot","tags":["core","a"],"shape":"star","createdAt":"2024-03-01T12:00:00Z"}],"connections":[{"id":1709294400000,"from":1,"to":1,"color":"#ffffff","style":"dashed","createdAt":"2024-03-01T12:00:01Z"}],"nextStarId":2}"##;
        let snap = Snapshot::from_json(json).unwrap();
        let again = Snapshot::from_json(&snap.to_json().unwrap()).unwrap();
        assert_eq!(again, snap);
        assert_eq!(snap.stars[0].tags.as_slice(), ["core", "a"]);
    }

    #[test]
    fn import_mode_names() {
        assert_eq!("append".parse::<ImportMode>().unwrap(), ImportMode::Append);
        assert_eq!("replace".parse::<ImportMode>().unwrap(), ImportMode::Replace);
        let err = "merge".parse::<ImportMode>().unwrap_err();
        assert!(err.to_string().contains("merge"));
    }
}
