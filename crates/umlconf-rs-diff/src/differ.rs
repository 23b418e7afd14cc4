// crates/umlconf-rs-diff/src/differ.rs

//! File-backed diffing: loads two documents once, then writes the delta and
//! the reconstructed document as indented JSON.

use crate::delta::{self, ConfigDelta, Document};
use crate::error::DiffError;
use log::info;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

const JSON_INDENT: &[u8] = b"    ";

/// Reads a JSON document whose top-level value must be an object.
pub fn load_document(path: impl AsRef<Path>) -> Result<Document, DiffError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DiffError::MissingFile(path.to_path_buf()),
        _ => DiffError::Io(e),
    })?;

    match serde_json::from_str(&content)? {
        Value::Object(map) => Ok(map),
        _ => Err(DiffError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Serializes `value` as JSON indented with four spaces.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String, DiffError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Writes `value` to `path` as indented JSON.
pub fn write_json<T: Serialize + ?Sized>(
    value: &T,
    path: impl AsRef<Path>,
) -> Result<(), DiffError> {
    fs::write(path, to_json_string(value)?)?;
    Ok(())
}

/// An original and a patched document, loaded once and diffed on demand.
#[derive(Debug, Clone)]
pub struct ConfigDiffer {
    original: Document,
    patched: Document,
}

impl ConfigDiffer {
    pub fn new(original: Document, patched: Document) -> Self {
        Self { original, patched }
    }

    /// Loads both documents from disk.
    pub fn from_paths(
        original_path: impl AsRef<Path>,
        patched_path: impl AsRef<Path>,
    ) -> Result<Self, DiffError> {
        Ok(Self::new(
            load_document(original_path)?,
            load_document(patched_path)?,
        ))
    }

    pub fn original(&self) -> &Document {
        &self.original
    }

    pub fn patched(&self) -> &Document {
        &self.patched
    }

    /// Computes the delta without touching the filesystem.
    pub fn delta(&self) -> ConfigDelta {
        delta::generate_delta(&self.original, &self.patched)
    }

    /// Computes the delta, writes it to `out_path` and returns it.
    pub fn generate_delta(&self, out_path: impl AsRef<Path>) -> Result<ConfigDelta, DiffError> {
        let out_path = out_path.as_ref();
        let delta = self.delta();
        write_json(&delta, out_path)?;
        info!(
            "Wrote delta with {} additions, {} deletions, {} updates to {}",
            delta.additions.len(),
            delta.deletions.len(),
            delta.updates.len(),
            out_path.display()
        );
        Ok(delta)
    }

    /// Replays `delta` onto the original document, writes the result to
    /// `out_path` and returns it.
    pub fn apply_delta(
        &self,
        delta: &ConfigDelta,
        out_path: impl AsRef<Path>,
    ) -> Result<Document, DiffError> {
        let out_path = out_path.as_ref();
        let result = delta::apply_delta(&self.original, delta);
        write_json(&result, out_path)?;
        info!(
            "Wrote patched document with {} keys to {}",
            result.len(),
            out_path.display()
        );
        Ok(result)
    }
}
