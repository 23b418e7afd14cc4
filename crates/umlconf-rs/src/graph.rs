// crates/umlconf-rs/src/graph.rs

//! The in-memory class graph: class records in document order plus the
//! resolved multiplicity of every class taking part in an aggregation.

use crate::error::ModelError;
use crate::types::{ChildRef, ClassRecord, Multiplicity, ResolvedMultiplicity};
use log::{trace, warn};
use std::collections::BTreeMap;

/// A loaded class model.
///
/// Classes keep the order in which they were first declared. This order
/// decides which roots are visited first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassGraph {
    classes: Vec<ClassRecord>,
    index: BTreeMap<String, usize>,
    multiplicities: BTreeMap<String, ResolvedMultiplicity>,
}

impl ClassGraph {
    /// Starts an empty graph.
    pub fn builder() -> ClassGraphBuilder {
        ClassGraphBuilder::default()
    }

    pub fn class(&self, name: &str) -> Option<&ClassRecord> {
        self.index.get(name).map(|&i| &self.classes[i])
    }

    /// All classes in declaration order.
    pub fn classes(&self) -> &[ClassRecord] {
        &self.classes
    }

    /// Classes flagged `isRoot`, in declaration order.
    pub fn roots(&self) -> impl Iterator<Item = &ClassRecord> {
        self.classes.iter().filter(|c| c.is_root)
    }

    /// The last multiplicity recorded for `name` by any aggregation.
    pub fn multiplicity(&self, name: &str) -> Option<&ResolvedMultiplicity> {
        self.multiplicities.get(name)
    }

    /// The last multiplicity recorded for `name`, provided some aggregation
    /// named it as a source.
    pub fn declared_multiplicity(&self, name: &str) -> Option<&Multiplicity> {
        self.multiplicities
            .get(name)
            .filter(|m| m.was_source)
            .map(|m| &m.multiplicity)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Looks up a class that must exist.
    pub(crate) fn require(&self, name: &str) -> Result<&ClassRecord, ModelError> {
        self.class(name).ok_or_else(|| ModelError::UnknownClass {
            name: name.into(),
        })
    }
}

/// Builds a `ClassGraph` in two steps: declare classes, then aggregations.
#[derive(Debug, Default)]
pub struct ClassGraphBuilder {
    graph: ClassGraph,
}

impl ClassGraphBuilder {
    /// Declares a class.
    ///
    /// Re-declaring a name replaces the earlier record but keeps its position.
    pub fn add_class(&mut self, record: ClassRecord) -> &mut Self {
        let graph = &mut self.graph;
        let existing = graph.index.get(&record.name).copied();
        match existing {
            Some(i) => {
                warn!(
                    "Class '{}' declared more than once, keeping the last declaration",
                    record.name
                );
                graph.classes[i] = record;
            }
            None => {
                graph.index.insert(record.name.clone(), graph.classes.len());
                graph.classes.push(record);
            }
        }
        self
    }

    /// Records that `source` is contained by `target` with the given multiplicity.
    ///
    /// Both classes must already be declared. The multiplicity is recorded for
    /// `source` and `1..1` for `target`, each replacing any earlier bound.
    pub fn add_aggregation(
        &mut self,
        source: &str,
        target: &str,
        multiplicity: Multiplicity,
    ) -> Result<&mut Self, ModelError> {
        let graph = &mut self.graph;
        graph.require(source)?;
        let target_index = *graph
            .index
            .get(target)
            .ok_or_else(|| ModelError::UnknownClass {
                name: target.into(),
            })?;

        trace!("Aggregation {} -> {} [{}]", source, target, multiplicity);

        graph.multiplicities.insert(
            source.into(),
            ResolvedMultiplicity {
                multiplicity: multiplicity.clone(),
                was_source: true,
            },
        );
        graph
            .multiplicities
            .entry(target.into())
            .and_modify(|m| m.multiplicity = Multiplicity::one())
            .or_insert_with(|| ResolvedMultiplicity {
                multiplicity: Multiplicity::one(),
                was_source: false,
            });

        graph.classes[target_index].children.push(ChildRef {
            name: source.into(),
            multiplicity,
        });
        Ok(self)
    }

    pub fn build(self) -> ClassGraph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClassGraph {
        let mut builder = ClassGraph::builder();
        builder
            .add_class(ClassRecord::new("Root").root(true).attribute("id", "int"))
            .add_class(ClassRecord::new("Item").attribute("label", "string"))
            .add_class(ClassRecord::new("Tag"));
        builder
            .add_aggregation("Item", "Root", Multiplicity::parse("0..*"))
            .unwrap()
            .add_aggregation("Tag", "Item", Multiplicity::parse("1..3"))
            .unwrap();
        builder.build()
    }

    #[test]
    fn test_children_are_recorded_on_target() {
        let graph = sample();
        let root = graph.class("Root").unwrap();
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].name, "Item");
        assert_eq!(root.children[0].multiplicity, Multiplicity::parse("0..*"));
        assert_eq!(graph.class("Item").unwrap().children[0].name, "Tag");
        assert!(graph.class("Tag").unwrap().children.is_empty());
    }

    #[test]
    fn test_later_target_edge_overwrites_source_bound() {
        // "Item" is a source of the first edge and a target of the second.
        let graph = sample();
        let item = graph.multiplicity("Item").unwrap();
        assert!(item.was_source);
        assert_eq!(item.multiplicity, Multiplicity::one());
        assert_eq!(graph.declared_multiplicity("Item"), Some(&Multiplicity::one()));
    }

    #[test]
    fn test_later_source_edge_overwrites_target_bound() {
        let mut builder = ClassGraph::builder();
        builder
            .add_class(ClassRecord::new("A").root(true))
            .add_class(ClassRecord::new("B"))
            .add_class(ClassRecord::new("C"));
        builder
            .add_aggregation("C", "B", Multiplicity::parse("0..1"))
            .unwrap()
            .add_aggregation("B", "A", Multiplicity::parse("2..*"))
            .unwrap();
        let graph = builder.build();
        assert_eq!(graph.declared_multiplicity("B"), Some(&Multiplicity::parse("2..*")));
    }

    #[test]
    fn test_target_gets_implicit_single_bound() {
        let graph = sample();
        let root = graph.multiplicity("Root").unwrap();
        assert!(!root.was_source);
        assert_eq!(root.multiplicity, Multiplicity::one());
        assert_eq!(graph.declared_multiplicity("Root"), None);
    }

    #[test]
    fn test_later_declaration_overwrites_bound() {
        let mut builder = ClassGraph::builder();
        builder
            .add_class(ClassRecord::new("A").root(true))
            .add_class(ClassRecord::new("B").root(true))
            .add_class(ClassRecord::new("Shared"));
        builder
            .add_aggregation("Shared", "A", Multiplicity::parse("0..1"))
            .unwrap()
            .add_aggregation("Shared", "B", Multiplicity::parse("1..*"))
            .unwrap();
        let graph = builder.build();
        assert_eq!(
            graph.declared_multiplicity("Shared"),
            Some(&Multiplicity::parse("1..*"))
        );
        // Each container keeps the bound given on its own edge.
        assert_eq!(
            graph.class("A").unwrap().children[0].multiplicity,
            Multiplicity::parse("0..1")
        );
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        let mut builder = ClassGraph::builder();
        builder.add_class(ClassRecord::new("Root").root(true));
        let err = builder
            .add_aggregation("Ghost", "Root", Multiplicity::one())
            .unwrap_err();
        assert!(matches!(err, ModelError::UnknownClass { ref name } if name == "Ghost"));
    }

    #[test]
    fn test_unknown_target_is_rejected_without_side_effects() {
        let mut builder = ClassGraph::builder();
        builder.add_class(ClassRecord::new("Item"));
        let err = builder
            .add_aggregation("Item", "Ghost", Multiplicity::one())
            .unwrap_err();
        assert!(matches!(err, ModelError::UnknownClass { ref name } if name == "Ghost"));
        assert!(builder.build().multiplicity("Item").is_none());
    }

    #[test]
    fn test_redeclared_class_keeps_position() {
        let mut builder = ClassGraph::builder();
        builder
            .add_class(ClassRecord::new("A").documentation("first"))
            .add_class(ClassRecord::new("B"))
            .add_class(ClassRecord::new("A").documentation("second"));
        let graph = builder.build();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.classes()[0].name, "A");
        assert_eq!(graph.classes()[0].documentation, "second");
    }

    #[test]
    fn test_roots_follow_declaration_order() {
        let mut builder = ClassGraph::builder();
        builder
            .add_class(ClassRecord::new("Z").root(true))
            .add_class(ClassRecord::new("M"))
            .add_class(ClassRecord::new("A").root(true));
        let graph = builder.build();
        let roots: Vec<&str> = graph.roots().map(|c| c.name.as_str()).collect();
        assert_eq!(roots, ["Z", "A"]);
        assert!(!graph.is_empty());
    }
}
