// crates/umlconf-rs-cli/src/pipeline.rs

//! Runs the model pipeline (parse, render, metadata) followed by the diff
//! pipeline (delta, apply).
//!
//! Each stage finishes writing its file before the next one starts. Files
//! written by earlier stages are left in place when a later stage fails.

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use log::{info, warn};
use std::fs;
use std::path::Path;
use umlconf_rs::{load_model_from_path, save_config, save_metadata};
use umlconf_rs_diff::ConfigDiffer;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// Number of classes declared in the model.
    pub classes: usize,
    /// Number of classes listed in the metadata.
    pub metadata_entries: usize,
    /// `false` if the model had no root and no skeleton was written.
    pub config_written: bool,
    /// Number of changed top-level keys between the two configurations.
    pub delta_changes: usize,
}

/// Runs both pipelines with the paths from `config`.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport, PipelineError> {
    ensure_output_dir(&config.output_dir)?;

    // --- Model pipeline ---
    let graph = load_model_from_path(&config.model_path)?;
    let config_written = save_config(&graph, &config.config_xml_out)?;
    if !config_written {
        warn!(
            "No root class in {}, {} was not written",
            config.model_path.display(),
            config.config_xml_out.display()
        );
    }
    let entries = save_metadata(&graph, &config.meta_json_out)?;

    // --- Diff pipeline ---
    let differ = ConfigDiffer::from_paths(
        &config.original_config_path,
        &config.patched_config_path,
    )?;
    let delta = differ.generate_delta(&config.delta_json_out)?;
    differ.apply_delta(&delta, &config.patched_json_out)?;

    Ok(PipelineReport {
        classes: graph.len(),
        metadata_entries: entries.len(),
        config_written,
        delta_changes: delta.change_count(),
    })
}

fn ensure_output_dir(path: &Path) -> Result<(), PipelineError> {
    if path.as_os_str().is_empty() || path.is_dir() {
        return Ok(());
    }
    info!("Creating output directory {}", path.display());
    fs::create_dir_all(path).map_err(|source| PipelineError::OutputDir {
        path: path.to_path_buf(),
        source,
    })
}
