// src/parser.rs

use crate::error::ModelError;
use crate::graph::ClassGraph;
use crate::model::ModelDocument;
use crate::resolver;
use log::info;
use std::fs;
use std::io;
use std::path::Path;

/// Parses a class model XML string slice into a `ClassGraph`.
///
/// # Arguments
/// * `xml_content` - A string slice containing the full model document.
///
/// # Errors
/// Returns a `ModelError` if the XML is malformed, a required attribute is
/// missing, or an aggregation references an undeclared class.
pub fn load_model_from_str(xml_content: &str) -> Result<ClassGraph, ModelError> {
    // 1. Deserialize the raw XML string into our internal model.
    let document: ModelDocument = quick_xml::de::from_str(xml_content)?;

    // 2. Resolve classes and aggregations into the graph.
    resolver::resolve_graph(document)
}

/// Reads and parses the class model stored at `path`.
///
/// # Errors
/// Returns `ModelError::MissingFile` if the file does not exist, and any
/// error of [`load_model_from_str`] otherwise.
pub fn load_model_from_path(path: impl AsRef<Path>) -> Result<ClassGraph, ModelError> {
    let path = path.as_ref();
    let xml_content = read_to_string(path)?;
    let graph = load_model_from_str(&xml_content)?;
    info!("Loaded {} classes from {}", graph.len(), path.display());
    Ok(graph)
}

fn read_to_string(path: &Path) -> Result<String, ModelError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ModelError::MissingFile(path.to_path_buf()),
        _ => ModelError::Io(e),
    })
}
