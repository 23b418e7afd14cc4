//! Derives the ordered class metadata from a `ClassGraph`.
//!
//! Classes are listed in post-order starting from every root, so each class
//! appears after all classes it contains. Classes that no root reaches are
//! left out.

use crate::error::ModelError;
use crate::graph::ClassGraph;
use crate::types::{MetadataEntry, Parameter};
use log::{debug, info};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Indentation used for every JSON artifact.
const JSON_INDENT: &[u8] = b"    ";

/// Returns the names of all classes reachable from a root, children first.
///
/// Roots are visited in declaration order and share one visited set, so a
/// class reachable from several roots is listed once.
///
/// # Errors
/// Returns `ModelError::CycleDetected` if a class (transitively) contains
/// itself, and `ModelError::UnknownClass` if a child is not declared.
pub fn order_classes(graph: &ClassGraph) -> Result<Vec<&str>, ModelError> {
    let mut walk = PostOrder {
        graph,
        visited: BTreeSet::new(),
        active: Vec::new(),
        order: Vec::with_capacity(graph.len()),
    };

    for root in graph.roots() {
        walk.visit(&root.name)?;
    }

    let skipped = graph.len() - walk.order.len();
    if skipped > 0 {
        debug!("{} classes are not reachable from any root", skipped);
    }
    Ok(walk.order)
}

struct PostOrder<'g> {
    graph: &'g ClassGraph,
    visited: BTreeSet<&'g str>,
    /// Classes on the current recursion path.
    active: Vec<&'g str>,
    order: Vec<&'g str>,
}

impl<'g> PostOrder<'g> {
    fn visit(&mut self, name: &'g str) -> Result<(), ModelError> {
        // Active classes are also visited, so check the path first.
        if let Some(pos) = self.active.iter().position(|&n| n == name) {
            return Err(cycle_error(&self.active[pos..], name));
        }
        if !self.visited.insert(name) {
            return Ok(());
        }

        let graph = self.graph;
        let record = graph.require(name)?;

        self.active.push(name);
        for child in &record.children {
            self.visit(&child.name)?;
        }
        self.active.pop();

        self.order.push(name);
        Ok(())
    }
}

pub(crate) fn cycle_error(path: &[&str], reentered: &str) -> ModelError {
    let mut path: Vec<String> = path.iter().map(|n| n.to_string()).collect();
    path.push(reentered.to_string());
    ModelError::CycleDetected { path }
}

/// Builds one `MetadataEntry` per reachable class, children first.
///
/// `min`/`max` are only filled for classes named as the source of some
/// aggregation, and hold the last bound recorded for them. Parameters are the class attributes followed by one
/// `class` parameter per contained class.
pub fn build_metadata(graph: &ClassGraph) -> Result<Vec<MetadataEntry>, ModelError> {
    order_classes(graph)?
        .into_iter()
        .map(|name| {
            let record = graph.require(name)?;
            let bounds = graph.declared_multiplicity(name);

            let parameters = record
                .attributes
                .iter()
                .map(Parameter::from)
                .chain(record.children.iter().map(Parameter::from))
                .collect();

            Ok(MetadataEntry {
                class_name: record.name.clone(),
                documentation: record.documentation.clone(),
                is_root: record.is_root,
                max: bounds.map(|m| m.max.clone()),
                min: bounds.map(|m| m.min.clone()),
                parameters,
            })
        })
        .collect()
}

/// Serializes metadata entries as an indented JSON array.
pub fn metadata_to_json_string(entries: &[MetadataEntry]) -> Result<String, ModelError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    entries.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Builds the metadata for `graph` and writes it to `path` as JSON.
pub fn save_metadata(
    graph: &ClassGraph,
    path: impl AsRef<Path>,
) -> Result<Vec<MetadataEntry>, ModelError> {
    let path = path.as_ref();
    let entries = build_metadata(graph)?;
    fs::write(path, metadata_to_json_string(&entries)?)?;
    info!("Wrote {} metadata entries to {}", entries.len(), path.display());
    Ok(entries)
}
