// src/lib.rs

#![doc = "Parses UML-like XML class models and derives configuration artifacts from them."]
#![doc = ""]
#![doc = "Loading and deriving are separate steps: a `ClassGraph` is loaded once and"]
#![doc = "then consumed independently by each derivation."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `load_model_from_str` / `load_model_from_path`: Building the `ClassGraph`."]
#![doc = "- `build_metadata`: Ordered per-class metadata, children before containers."]
#![doc = "- `render_config`: A nested XML configuration skeleton of the root class."]

// --- Crate Modules ---

mod builder;
mod error;
mod graph;
mod meta;
mod model;
mod parser;
mod resolver;
mod types;

// --- Public API Re-exports ---

pub use builder::{render_class, render_config, save_config};
pub use error::ModelError;
pub use graph::{ClassGraph, ClassGraphBuilder};
pub use meta::{build_metadata, metadata_to_json_string, order_classes, save_metadata};
pub use parser::{load_model_from_path, load_model_from_str};
pub use types::{
    Attribute, CLASS_PARAMETER_TYPE, ChildRef, ClassRecord, MetadataEntry,
    Multiplicity, Parameter, ResolvedMultiplicity,
};
