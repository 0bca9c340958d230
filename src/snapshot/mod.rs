//! State snapshots from the host dashboard.
//!
//! The card does not talk to the dashboard directly; it reads a JSON
//! snapshot of entity states exported to disk. Two layouts are accepted:
//! a map of entity id to state object, or the REST-dump array form where
//! each object carries its own `entity_id`. Station arrays live under
//! the `stations` attribute (`gasolineras` in the original feed).

pub mod watcher;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

const STATION_ATTRIBUTES: &[&str] = &["stations", "gasolineras"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntityState {
    #[serde(default)]
    pub state: Value,
    #[serde(default)]
    pub attributes: Value,
}

#[derive(Debug, Clone, Deserialize)]
struct EntityStateWithId {
    entity_id: String,
    #[serde(default)]
    state: Value,
    #[serde(default)]
    attributes: Value,
}

/// A parsed snapshot of the dashboard's entity states.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    entities: HashMap<String, EntityState>,
}

impl Snapshot {
    pub fn parse(text: &str) -> Result<Self> {
        if let Ok(entities) = serde_json::from_str::<HashMap<String, EntityState>>(text) {
            return Ok(Self { entities });
        }
        let list: Vec<EntityStateWithId> =
            serde_json::from_str(text).context("malformed state snapshot")?;
        let entities = list
            .into_iter()
            .map(|e| {
                (
                    e.entity_id,
                    EntityState {
                        state: e.state,
                        attributes: e.attributes,
                    },
                )
            })
            .collect();
        Ok(Self { entities })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in snapshot file {}", path.display()))
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.entities.contains_key(entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Raw station records for one entity. Empty when the entity is
    /// absent, has no station attribute, or the attribute isn't a list —
    /// "no data this cycle" is not an error.
    pub fn entity_stations(&self, entity: &str) -> &[Value] {
        self.entities
            .get(entity)
            .and_then(|e| {
                STATION_ATTRIBUTES
                    .iter()
                    .find_map(|attr| e.attributes.get(*attr))
            })
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
