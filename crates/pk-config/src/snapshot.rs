//! Point-in-time configuration capture for session telemetry.
//!
//! A snapshot records every key's current value together with a capture
//! timestamp and the output schema version, so a session report can show
//! exactly which settings were in force. Snapshots are read-only; there
//! is no restore path.

use serde::{Deserialize, Serialize};

use crate::key::ConfigKey;
use crate::registry::ConfigRegistry;
use crate::value::ConfigValue;

/// One captured key/value pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub key: ConfigKey,
    pub value: ConfigValue,
}

/// A frozen copy of the registry at a moment in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    /// Output schema version, for forward-compatible consumers.
    pub schema_version: String,

    /// ISO-8601 timestamp of capture.
    pub captured_at: String,

    /// Every key's value, in registry declaration order.
    pub values: Vec<SnapshotEntry>,
}

impl ConfigSnapshot {
    /// Capture the current state of `registry`.
    pub fn capture(registry: &ConfigRegistry) -> Self {
        Self {
            schema_version: pk_common::SCHEMA_VERSION.to_string(),
            captured_at: chrono::Utc::now().to_rfc3339(),
            values: registry
                .entries()
                .map(|(key, value)| SnapshotEntry {
                    key,
                    value: value.clone(),
                })
                .collect(),
        }
    }

    /// Serialize the snapshot to pretty JSON for embedding in reports.
    pub fn to_json(&self) -> pk_common::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The captured value of `key`, if present in this snapshot.
    pub fn value_of(&self, key: ConfigKey) -> Option<&ConfigValue> {
        self.values
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_covers_every_key() {
        let registry = ConfigRegistry::new();
        let snapshot = ConfigSnapshot::capture(&registry);
        assert_eq!(snapshot.values.len(), ConfigKey::COUNT);
        assert_eq!(snapshot.schema_version, pk_common::SCHEMA_VERSION);
        assert_eq!(
            snapshot.value_of(ConfigKey::StalkerEvent),
            Some(&ConfigValue::from("compile"))
        );
    }

    #[test]
    fn capture_reflects_mutations() {
        let mut registry = ConfigRegistry::new();
        registry.set(ConfigKey::StalkerIn, "modules").unwrap();
        let snapshot = ConfigSnapshot::capture(&registry);
        assert_eq!(
            snapshot.value_of(ConfigKey::StalkerIn),
            Some(&ConfigValue::from("modules"))
        );
    }

    #[test]
    fn json_round_trip() {
        let snapshot = ConfigSnapshot::capture(&ConfigRegistry::new());
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"stalker.event\""));
        let back: ConfigSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.values, snapshot.values);
        assert_eq!(back.captured_at, snapshot.captured_at);
    }
}
