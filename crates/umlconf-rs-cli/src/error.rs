// crates/umlconf-rs-cli/src/error.rs

use core::fmt;
use std::io;
use std::path::PathBuf;
use umlconf_rs::ModelError;
use umlconf_rs_diff::DiffError;

/// Errors that abort a pipeline run.
#[derive(Debug)]
pub enum PipelineError {
    /// Loading the class model or deriving an artifact from it failed.
    Model(ModelError),

    /// Loading, diffing or writing the JSON configurations failed.
    Diff(DiffError),

    /// The output directory could not be created.
    OutputDir { path: PathBuf, source: io::Error },
}

impl From<ModelError> for PipelineError {
    fn from(e: ModelError) -> Self {
        PipelineError::Model(e)
    }
}

impl From<DiffError> for PipelineError {
    fn from(e: DiffError) -> Self {
        PipelineError::Diff(e)
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Model(e) => write!(f, "Model pipeline failed: {}", e),
            PipelineError::Diff(e) => write!(f, "Diff pipeline failed: {}", e),
            PipelineError::OutputDir { path, source } => write!(
                f,
                "Could not create output directory {}: {}",
                path.display(),
                source
            ),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Model(e) => Some(e),
            PipelineError::Diff(e) => Some(e),
            PipelineError::OutputDir { source, .. } => Some(source),
        }
    }
}
