// crates/umlconf-rs-cli/src/config.rs

//! Fixed input and output locations of the pipeline.

use std::path::{Path, PathBuf};

const INPUT_DIR: &str = "input";
const OUTPUT_DIR: &str = "out";

/// Where the pipeline reads its inputs and writes its four artifacts.
///
/// All paths are relative to the working directory unless re-rooted with
/// [`PipelineConfig::with_base_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// The class model XML.
    pub model_path: PathBuf,
    /// The original flat JSON configuration.
    pub original_config_path: PathBuf,
    /// The patched flat JSON configuration.
    pub patched_config_path: PathBuf,
    /// Created if missing.
    pub output_dir: PathBuf,
    pub config_xml_out: PathBuf,
    pub meta_json_out: PathBuf,
    pub delta_json_out: PathBuf,
    pub patched_json_out: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::with_base_dir("")
    }
}

impl PipelineConfig {
    /// The default layout below `base_dir`.
    pub fn with_base_dir(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        let input = base_dir.join(INPUT_DIR);
        let output = base_dir.join(OUTPUT_DIR);
        Self {
            model_path: input.join("impulse_test_input.xml"),
            original_config_path: input.join("config.json"),
            patched_config_path: input.join("patched_config.json"),
            config_xml_out: output.join("config.xml"),
            meta_json_out: output.join("meta.json"),
            delta_json_out: output.join("delta.json"),
            patched_json_out: output.join("res_patched_config.json"),
            output_dir: output,
        }
    }
}
