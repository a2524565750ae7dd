//! FILENAME: model/src/group.rs
//! PURPOSE: Group identity and storage for the pivot.
//! CONTEXT: A Group is the unique combination of all non-time dimension
//! values for a set of rows, carrying one observation per distinct time
//! label. Identity is the dimension-value list and nothing else; the
//! observation payload never participates in equality or hashing.

use crate::dimension::DimensionValue;
use crate::observation::Observation;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// GROUP KEY
// ============================================================================

/// The identity of a group: the ordered non-time dimension values of a row.
///
/// Used as the key in the parser's deduplication map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupKey(pub Vec<DimensionValue>);

impl GroupKey {
    pub fn new(values: Vec<DimensionValue>) -> Self {
        GroupKey(values)
    }

    pub fn values(&self) -> &[DimensionValue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// GROUP
// ============================================================================

/// A unique dimension combination plus its time-label → observation map.
///
/// Two rows with identical non-time dimension values but different time
/// labels merge into one group with two map entries; a repeated time label
/// overwrites the earlier entry (last write wins within one parse).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub key: GroupKey,
    pub observations: HashMap<String, Observation>,
}

impl Group {
    pub fn new(key: GroupKey) -> Self {
        Group {
            key,
            observations: HashMap::new(),
        }
    }

    /// Insert or overwrite the observation for a time label.
    pub fn insert(&mut self, time_label: impl Into<String>, observation: Observation) {
        self.observations.insert(time_label.into(), observation);
    }

    pub fn observation(&self, time_label: &str) -> Option<&Observation> {
        self.observations.get(time_label)
    }
}
