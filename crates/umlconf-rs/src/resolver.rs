// crates/umlconf-rs/src/resolver.rs

//! Turns the raw deserialized `model` into a `ClassGraph`.
//!
//! Pass 1 declares every class, pass 2 wires the aggregations. Aggregations
//! may therefore reference classes declared further down the document.

use crate::error::ModelError;
use crate::graph::ClassGraph;
use crate::model::{AggregationElement, AttributeElement, ClassElement, ModelDocument};
use crate::types::{Attribute, ClassRecord, Multiplicity};
use log::debug;

/// Resolves the final `ClassGraph` from the raw deserialized document.
pub(crate) fn resolve_graph(document: ModelDocument) -> Result<ClassGraph, ModelError> {
    let mut builder = ClassGraph::builder();

    // --- Pass 1: Classes ---
    for class in document.classes {
        builder.add_class(resolve_class(class)?);
    }

    // --- Pass 2: Aggregations ---
    for aggregation in &document.aggregations {
        let (source, target, multiplicity) = resolve_aggregation(aggregation)?;
        builder.add_aggregation(source, target, multiplicity)?;
    }

    let graph = builder.build();
    debug!(
        "Resolved {} classes ({} roots) and {} aggregations",
        graph.len(),
        graph.roots().count(),
        document.aggregations.len()
    );
    Ok(graph)
}

fn resolve_class(class: ClassElement) -> Result<ClassRecord, ModelError> {
    let name = class.name.ok_or(ModelError::MissingAttribute {
        element: "Class",
        attribute: "name",
    })?;

    let attributes = class
        .attributes
        .into_iter()
        .map(resolve_attribute)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ClassRecord {
        name,
        is_root: class.is_root.as_deref() == Some("true"),
        documentation: class.documentation.unwrap_or_default(),
        attributes,
        children: Vec::new(),
    })
}

fn resolve_attribute(attribute: AttributeElement) -> Result<Attribute, ModelError> {
    let name = attribute.name.ok_or(ModelError::MissingAttribute {
        element: "Attribute",
        attribute: "name",
    })?;
    let type_name = attribute.type_name.ok_or(ModelError::MissingAttribute {
        element: "Attribute",
        attribute: "type",
    })?;
    Ok(Attribute { name, type_name })
}

fn resolve_aggregation(
    aggregation: &AggregationElement,
) -> Result<(&str, &str, Multiplicity), ModelError> {
    let source = aggregation
        .source
        .as_deref()
        .ok_or(ModelError::MissingAttribute {
            element: "Aggregation",
            attribute: "source",
        })?;
    let target = aggregation
        .target
        .as_deref()
        .ok_or(ModelError::MissingAttribute {
            element: "Aggregation",
            attribute: "target",
        })?;
    let multiplicity = aggregation
        .source_multiplicity
        .as_deref()
        .map(Multiplicity::parse)
        .ok_or(ModelError::MissingAttribute {
            element: "Aggregation",
            attribute: "sourceMultiplicity",
        })?;
    Ok((source, target, multiplicity))
}
