// crates/umlconf-rs/src/types.rs

//! Public, ergonomic data structures for a resolved class model and the
//! metadata derived from it.

use core::fmt;
use serde::Serialize;

/// The parameter type given to child classes in the metadata.
pub const CLASS_PARAMETER_TYPE: &str = "class";

// --- Class Records ---

/// A declared `<Attribute>` of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// `@name`
    pub name: String,
    /// `@type`
    pub type_name: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A contained class, as recorded on its container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRef {
    /// Name of the contained class.
    pub name: String,
    /// How many instances may appear under one container.
    pub multiplicity: Multiplicity,
}

/// A class of the model, keyed by its name inside a `ClassGraph`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassRecord {
    /// `@name`
    pub name: String,
    /// `@isRoot == "true"`
    pub is_root: bool,
    /// `@documentation`, empty when absent.
    pub documentation: String,
    /// All `<Attribute>` elements in document order.
    pub attributes: Vec<Attribute>,
    /// Contained classes in aggregation order.
    pub children: Vec<ChildRef>,
}

impl ClassRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn root(mut self, is_root: bool) -> Self {
        self.is_root = is_root;
        self
    }

    pub fn documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = documentation.into();
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, type_name));
        self
    }
}

// --- Multiplicity ---

/// A `min..max` repetition bound. Both ends are kept verbatim; `max` may be `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiplicity {
    pub min: String,
    pub max: String,
}

impl Multiplicity {
    /// The bound assumed for a container: exactly one.
    pub fn one() -> Self {
        Self {
            min: "1".into(),
            max: "1".into(),
        }
    }

    /// Splits `s` on `..` and keeps the first and last token.
    ///
    /// A value without `..` is used for both ends; this never fails.
    pub fn parse(s: &str) -> Self {
        let min = s.split("..").next().unwrap_or(s);
        let max = s.rsplit("..").next().unwrap_or(s);
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    /// `true` when the upper bound is `*`.
    pub fn is_unbounded(&self) -> bool {
        self.max == "*"
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

/// The last multiplicity recorded for a class.
///
/// Every aggregation overwrites the bound of both ends: the source gets the
/// declared multiplicity, the target `1..1`. `was_source` stays set once the
/// class has been named as a source, whatever edges follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMultiplicity {
    pub multiplicity: Multiplicity,
    pub was_source: bool,
}

// --- Metadata ---

/// One `{name, type}` item of a metadata entry's `parameters` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl From<&Attribute> for Parameter {
    fn from(attribute: &Attribute) -> Self {
        Self {
            name: attribute.name.clone(),
            type_name: attribute.type_name.clone(),
        }
    }
}

impl From<&ChildRef> for Parameter {
    fn from(child: &ChildRef) -> Self {
        Self {
            name: child.name.clone(),
            type_name: CLASS_PARAMETER_TYPE.into(),
        }
    }
}

/// The metadata describing one class, as written to the metadata JSON.
///
/// Field order matches the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataEntry {
    #[serde(rename = "class")]
    pub class_name: String,
    pub documentation: String,
    #[serde(rename = "isRoot")]
    pub is_root: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    pub parameters: Vec<Parameter>,
}
