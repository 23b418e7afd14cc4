// src/lib.rs

#![doc = "Driver for the `umlconf` command-line tool."]
#![doc = ""]
#![doc = "Reads the class model and the two JSON configurations from fixed paths"]
#![doc = "and writes the configuration skeleton, the class metadata, the delta and"]
#![doc = "the reconstructed configuration."]

// --- Crate Modules ---

mod config;
mod error;
mod pipeline;

// --- Public API Re-exports ---

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::{PipelineReport, run};
