//! The delta between two flat configuration documents.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A configuration document: a JSON object keyed by top-level setting names.
pub type Document = Map<String, Value>;

/// The old and new value of a key present in both documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueUpdate {
    pub old: Value,
    pub new: Value,
}

/// Everything needed to turn one document into another.
///
/// Deletions and updates follow the key order of the original document,
/// additions the key order of the patched one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigDelta {
    /// Keys only present in the patched document.
    #[serde(default)]
    pub additions: Document,
    /// Keys only present in the original document, with their old value.
    #[serde(default)]
    pub deletions: Document,
    /// Keys present in both documents with unequal values.
    #[serde(default)]
    pub updates: IndexMap<String, ValueUpdate>,
}

impl ConfigDelta {
    /// `true` if both documents were equal.
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty() && self.updates.is_empty()
    }

    /// Total number of changed keys.
    pub fn change_count(&self) -> usize {
        self.additions.len() + self.deletions.len() + self.updates.len()
    }
}

/// Compares the top-level keys of `original` and `patched`.
///
/// Values are compared as a whole; nested objects are not descended into.
pub fn generate_delta(original: &Document, patched: &Document) -> ConfigDelta {
    let mut delta = ConfigDelta::default();

    for (key, old) in original {
        match patched.get(key) {
            None => {
                delta.deletions.insert(key.clone(), old.clone());
            }
            Some(new) if new != old => {
                delta.updates.insert(
                    key.clone(),
                    ValueUpdate {
                        old: old.clone(),
                        new: new.clone(),
                    },
                );
            }
            Some(_) => {}
        }
    }

    for (key, new) in patched {
        if !original.contains_key(key) {
            delta.additions.insert(key.clone(), new.clone());
        }
    }

    delta
}

/// Replays `delta` onto a copy of `original`.
///
/// Deletions are applied first, then updates (taking the new value), then
/// additions. Remaining keys keep their position; added keys are appended.
pub fn apply_delta(original: &Document, delta: &ConfigDelta) -> Document {
    let mut result = original.clone();

    for key in delta.deletions.keys() {
        result.shift_remove(key);
    }
    for (key, update) in &delta.updates {
        result.insert(key.clone(), update.new.clone());
    }
    for (key, value) in &delta.additions {
        result.insert(key.clone(), value.clone());
    }

    result
}
