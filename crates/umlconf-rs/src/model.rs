//! Internal `serde` data structures that map directly to the class model XML.
//!
//! These structs mirror the raw document layout and are only used as the
//! first stage of loading. All attributes are optional here; the resolver
//! decides which ones are required and reports what is missing.

use serde::Deserialize;

/// The document root. Its element name is not checked.
///
/// `<Class>` and `<Aggregation>` elements may appear in any order, and any
/// other elements are skipped.
#[derive(Debug, Deserialize, Default)]
pub struct ModelDocument {
    #[serde(rename = "Class", default)]
    pub classes: Vec<ClassElement>,

    #[serde(rename = "Aggregation", default)]
    pub aggregations: Vec<AggregationElement>,
}

/// Represents `<Class name=".." isRoot=".." documentation="..">`.
#[derive(Debug, Deserialize, Default)]
pub struct ClassElement {
    #[serde(rename = "@name", default)]
    pub name: Option<String>,

    /// Only the literal `"true"` marks a root.
    #[serde(rename = "@isRoot", default)]
    pub is_root: Option<String>,

    #[serde(rename = "@documentation", default)]
    pub documentation: Option<String>,

    #[serde(rename = "Attribute", default)]
    pub attributes: Vec<AttributeElement>,
}

/// Represents `<Attribute name=".." type=".."/>`.
#[derive(Debug, Deserialize, Default)]
pub struct AttributeElement {
    #[serde(rename = "@name", default)]
    pub name: Option<String>,

    #[serde(rename = "@type", default)]
    pub type_name: Option<String>,
}

/// Represents `<Aggregation source=".." target=".." sourceMultiplicity=".."/>`.
///
/// `source` is the contained class, `target` its container.
#[derive(Debug, Deserialize, Default)]
pub struct AggregationElement {
    #[serde(rename = "@source", default)]
    pub source: Option<String>,

    #[serde(rename = "@target", default)]
    pub target: Option<String>,

    #[serde(rename = "@sourceMultiplicity", default)]
    pub source_multiplicity: Option<String>,
}
