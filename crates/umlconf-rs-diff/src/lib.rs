// src/lib.rs

#![doc = "Computes and replays deltas between flat JSON configuration documents."]
#![doc = ""]
#![doc = "Only top-level keys are compared. A nested value that changed anywhere is"]
#![doc = "reported as one update of its top-level key."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `generate_delta`: Additions, deletions and updates between two documents."]
#![doc = "- `apply_delta`: Replaying a delta onto the original document."]
#![doc = "- `ConfigDiffer`: The file-backed variant of both, writing indented JSON."]

// --- Crate Modules ---

mod delta;
mod differ;
mod error;

// --- Public API Re-exports ---

pub use delta::{ConfigDelta, Document, ValueUpdate, apply_delta, generate_delta};
pub use differ::{ConfigDiffer, load_document, to_json_string, write_json};
pub use error::DiffError;
