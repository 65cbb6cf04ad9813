use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::pose::{Pose, PoseDocument};

/// One wayspot entry in the calibration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WayspotEntry {
    #[serde(default)]
    pub offset: PoseDocument,
}

/// Calibration document: wayspot name to authored entry.
///
/// Entries stay untyped until [`CalibrationStore::from_document`] so one bad
/// entry cannot fail the whole asset load.
#[derive(Asset, TypePath, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalibrationDocument(pub HashMap<String, Value>);

/// Read-only lookup from wayspot name to calibration offset.
///
/// Built once when the document resolves. Until then every lookup misses,
/// which callers treat as a no-op, the same as an unknown wayspot.
#[derive(Resource, Debug, Default, Clone)]
pub struct CalibrationStore {
    offsets: Option<HashMap<String, Pose>>,
}

impl CalibrationStore {
    /// Malformed entries are logged and skipped.
    pub fn from_document(doc: &CalibrationDocument) -> Self {
        let mut offsets = HashMap::with_capacity(doc.0.len());
        for (name, raw) in &doc.0 {
            match WayspotEntry::deserialize(raw) {
                Ok(entry) => {
                    offsets.insert(name.clone(), Pose::from(&entry.offset));
                }
                Err(err) => warn!("Skipping calibration for wayspot '{}': {}", name, err),
            }
        }
        Self {
            offsets: Some(offsets),
        }
    }

    pub fn lookup(&self, wayspot_name: &str) -> Option<&Pose> {
        self.offsets.as_ref()?.get(wayspot_name)
    }

    pub fn is_loaded(&self) -> bool {
        self.offsets.is_some()
    }

    pub fn len(&self) -> usize {
        self.offsets.as_ref().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
