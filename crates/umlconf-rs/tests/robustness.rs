//! Integration tests focused on error handling and edge cases.
//!
//! These tests ensure the loader and the derivations report malformed XML,
//! missing attributes, dangling references and containment cycles as errors
//! without panicking.

use umlconf_rs::{
    ModelError, build_metadata, load_model_from_path, load_model_from_str, render_config,
};

/// A minimal valid model used as a base for creating corrupted test cases.
const MINIMAL_VALID_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Model>
  <Class name="Root" isRoot="true" documentation="The root">
    <Attribute name="id" type="int"/>
  </Class>
  <Class name="Item">
    <Attribute name="label" type="string"/>
  </Class>
  <Aggregation source="Item" target="Root" sourceMultiplicity="0..*"/>
</Model>"#;

#[test]
fn test_minimal_model_loads() {
    let graph = load_model_from_str(MINIMAL_VALID_XML).expect("Minimal model must load");
    assert_eq!(graph.len(), 2);
}

/// Verifies that the parser catches malformed XML syntax (e.g., unclosed tags).
#[test]
fn test_malformed_xml_syntax() {
    let xml = r#"<Model><Class name="Root"> ... missing closing tags"#;
    let result = load_model_from_str(xml);
    assert!(
        matches!(result, Err(ModelError::XmlParsing(_))),
        "Expected XmlParsing error, got {:?}",
        result
    );
}

/// Verifies that an aggregation naming an undeclared container is rejected.
#[test]
fn test_unknown_target_class() {
    let xml = MINIMAL_VALID_XML.replace(r#"target="Root""#, r#"target="Missing""#);
    let result = load_model_from_str(&xml);
    assert!(
        matches!(result, Err(ModelError::UnknownClass { ref name }) if name == "Missing"),
        "Expected UnknownClass error, got {:?}",
        result
    );
}

/// Verifies that an aggregation naming an undeclared contained class is rejected.
#[test]
fn test_unknown_source_class() {
    let xml = MINIMAL_VALID_XML.replace(r#"source="Item""#, r#"source="Ghost""#);
    let result = load_model_from_str(&xml);
    assert!(
        matches!(result, Err(ModelError::UnknownClass { ref name }) if name == "Ghost"),
        "Expected UnknownClass error, got {:?}",
        result
    );
}

/// A multiplicity without ".." is not an error; it is used for both bounds.
#[test]
fn test_single_token_multiplicity() {
    let xml = MINIMAL_VALID_XML.replace(
        r#"sourceMultiplicity="0..*""#,
        r#"sourceMultiplicity="many""#,
    );
    let graph = load_model_from_str(&xml).unwrap();
    let entries = build_metadata(&graph).unwrap();
    assert_eq!(entries[0].min.as_deref(), Some("many"));
    assert_eq!(entries[0].max.as_deref(), Some("many"));
}

#[test]
fn test_class_without_name() {
    let xml = MINIMAL_VALID_XML.replace(r#"<Class name="Item">"#, "<Class>");
    let result = load_model_from_str(&xml);
    assert!(
        matches!(
            result,
            Err(ModelError::MissingAttribute {
                element: "Class",
                attribute: "name"
            })
        ),
        "Expected MissingAttribute error, got {:?}",
        result
    );
}

#[test]
fn test_aggregation_without_source() {
    let xml = MINIMAL_VALID_XML.replace(r#"source="Item" "#, "");
    let result = load_model_from_str(&xml);
    assert!(matches!(
        result,
        Err(ModelError::MissingAttribute {
            element: "Aggregation",
            attribute: "source"
        })
    ));
}

/// Verifies that a containment cycle is reported by both derivations.
#[test]
fn test_cycle_is_reported() {
    let xml = MINIMAL_VALID_XML.replace(
        "</Model>",
        r#"<Aggregation source="Root" target="Item" sourceMultiplicity="1"/></Model>"#,
    );
    let graph = load_model_from_str(&xml).expect("Cycles are only detected when deriving");

    assert!(matches!(
        build_metadata(&graph),
        Err(ModelError::CycleDetected { .. })
    ));
    match render_config(&graph) {
        Err(ModelError::CycleDetected { path }) => {
            assert_eq!(path, ["Root", "Item", "Root"]);
        }
        other => panic!("Expected CycleDetected, got {:?}", other),
    }
}

/// Verifies that XML entities are correctly decoded.
#[test]
fn test_xml_entity_decoding() {
    let xml = MINIMAL_VALID_XML.replace(
        r#"documentation="The root""#,
        r#"documentation="Input &amp; output""#,
    );
    let graph = load_model_from_str(&xml).expect("Failed to parse XML with entities");
    assert_eq!(graph.class("Root").unwrap().documentation, "Input & output");
}

/// Unknown elements and attributes are ignored rather than validated.
#[test]
fn test_unknown_content_is_ignored() {
    let xml = MINIMAL_VALID_XML.replace(
        r#"<Class name="Item">"#,
        r#"<Comment>free text</Comment><Class name="Item" stereotype="entity">"#,
    );
    let graph = load_model_from_str(&xml).unwrap();
    assert!(graph.class("Item").is_some());
}

#[test]
fn test_missing_file() {
    let result = load_model_from_path("definitely/not/here.xml");
    assert!(
        matches!(result, Err(ModelError::MissingFile(_))),
        "Expected MissingFile error, got {:?}",
        result
    );
}
