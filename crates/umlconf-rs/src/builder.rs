// crates/umlconf-rs/src/builder.rs

//! Renders a class and everything it contains into an indented XML
//! configuration skeleton.

use crate::error::ModelError;
use crate::graph::ClassGraph;
use crate::meta::cycle_error;
use log::{info, warn};
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;

const INDENT_SIZE: usize = 4;

/// Renders the first root class of `graph` (in declaration order).
///
/// Returns `None` if the model has no root. Additional roots are ignored.
///
/// # Errors
/// Returns `ModelError::CycleDetected` if the root (transitively) contains
/// itself.
pub fn render_config(graph: &ClassGraph) -> Result<Option<String>, ModelError> {
    let mut roots = graph.roots();
    let Some(root) = roots.next() else {
        warn!("Model has no root class, nothing to render");
        return Ok(None);
    };

    let ignored = roots.count();
    if ignored > 0 {
        warn!(
            "Model has {} additional root classes, only '{}' is rendered",
            ignored, root.name
        );
    }

    render_class(graph, &root.name).map(Some)
}

/// Renders `class_name` and its descendants.
///
/// Each class becomes an element holding one `<attribute>type</attribute>`
/// element per attribute, followed by the elements of its children.
/// Multiplicities are not rendered. The output has no XML declaration, no
/// blank lines and no trailing newline.
pub fn render_class(graph: &ClassGraph, class_name: &str) -> Result<String, ModelError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
    let mut active = Vec::new();
    write_class(&mut writer, graph, class_name, &mut active)?;

    let raw = String::from_utf8(writer.into_inner())?;
    Ok(strip_blank_lines(&raw))
}

fn write_class<'g, W: Write>(
    writer: &mut Writer<W>,
    graph: &'g ClassGraph,
    class_name: &'g str,
    active: &mut Vec<&'g str>,
) -> Result<(), ModelError> {
    if let Some(pos) = active.iter().position(|&n| n == class_name) {
        return Err(cycle_error(&active[pos..], class_name));
    }
    let record = graph.require(class_name)?;
    active.push(class_name);

    writer.write_event(Event::Start(BytesStart::new(class_name)))?;
    for attribute in &record.attributes {
        let name = attribute.name.as_str();
        writer.write_event(Event::Start(BytesStart::new(name)))?;
        let text = escape_text(&attribute.type_name);
        writer.write_event(Event::Text(BytesText::from_escaped(text)))?;
        writer.write_event(Event::End(BytesEnd::new(name)))?;
    }
    for child in &record.children {
        write_class(writer, graph, &child.name, active)?;
    }
    writer.write_event(Event::End(BytesEnd::new(class_name)))?;

    active.pop();
    Ok(())
}

/// Escapes `&`, `<`, `>` and `"` in element text. Apostrophes stay as they are.
fn escape_text(raw: &str) -> Cow<'_, str> {
    let escaped = partial_escape(raw);
    if escaped.contains('"') {
        Cow::Owned(escaped.replace('"', "&quot;"))
    } else {
        escaped
    }
}

fn strip_blank_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the configuration skeleton and writes it to `path`.
///
/// Returns `false` (and writes nothing) when the model has no root.
pub fn save_config(graph: &ClassGraph, path: impl AsRef<Path>) -> Result<bool, ModelError> {
    let path = path.as_ref();
    match render_config(graph)? {
        Some(xml) => {
            fs::write(path, xml)?;
            info!("Wrote configuration skeleton to {}", path.display());
            Ok(true)
        }
        None => Ok(false),
    }
}
