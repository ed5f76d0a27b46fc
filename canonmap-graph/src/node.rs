//! Entity nodes
//!
//! An entity node is one generated subject: its IRI, its class assertions,
//! a short display label, and an insertion-ordered map of predicate IRI to
//! value sequence. A value sequence is either multi-valued (repeated
//! triples) or an ordered list (Turtle collection); the flag is fixed by
//! the first write to the predicate.

use crate::term::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The value sequence attached to one predicate
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyValues {
    /// Values in insertion order
    pub values: Vec<Value>,
    /// Render as an ordered Turtle collection instead of repeated triples
    pub ordered: bool,
}

/// A generated instance node
///
/// # Invariants
///
/// - `iri` is assigned once, at creation, and never changes.
/// - `types` behaves as an insertion-ordered set (duplicates are skipped).
/// - `properties` preserves predicate insertion order; values append.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EntityNode {
    iri: String,
    types: Vec<String>,
    label: String,
    properties: IndexMap<String, PropertyValues>,
}

impl EntityNode {
    /// Create an empty node with the given subject IRI
    pub fn new(iri: impl Into<String>) -> Self {
        Self {
            iri: iri.into(),
            types: Vec::new(),
            label: String::new(),
            properties: IndexMap::new(),
        }
    }

    /// The subject IRI
    pub fn iri(&self) -> &str {
        &self.iri
    }

    /// Class assertions in insertion order
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// The display label (empty until assigned)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Predicate map in insertion order
    pub fn properties(&self) -> &IndexMap<String, PropertyValues> {
        &self.properties
    }

    /// Add a class assertion, skipping duplicates
    pub fn add_type(&mut self, class_iri: impl Into<String>) {
        let class_iri = class_iri.into();
        if !self.types.contains(&class_iri) {
            self.types.push(class_iri);
        }
    }

    /// Set the display label unless one is already assigned
    ///
    /// The first occurrence of an entity fixes its label; later merges onto
    /// the same node leave it untouched.
    pub fn set_label_if_empty(&mut self, label: impl Into<String>) {
        if self.label.is_empty() {
            self.label = label.into();
        }
    }

    /// Append values to a predicate
    ///
    /// The `ordered` flag is established by the first write to the
    /// predicate; later appends extend the sequence without changing it.
    pub fn append_values<I>(&mut self, predicate: impl Into<String>, values: I, ordered: bool)
    where
        I: IntoIterator<Item = Value>,
    {
        let slot = self
            .properties
            .entry(predicate.into())
            .or_insert_with(|| PropertyValues {
                values: Vec::new(),
                ordered,
            });
        slot.values.extend(values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Literal;

    #[test]
    fn types_are_a_set() {
        let mut node = EntityNode::new("http://example.org/e/1");
        node.add_type("http://example.org/A");
        node.add_type("http://example.org/B");
        node.add_type("http://example.org/A");
        assert_eq!(node.types().len(), 2);
    }

    #[test]
    fn first_label_wins() {
        let mut node = EntityNode::new("http://example.org/e/1");
        node.set_label_if_empty("abc123 Person");
        node.set_label_if_empty("def456 Agent");
        assert_eq!(node.label(), "abc123 Person");
    }

    #[test]
    fn values_append_in_order() {
        let mut node = EntityNode::new("http://example.org/e/1");
        node.append_values("http://example.org/p", [Literal::Integer(1).into()], false);
        node.append_values("http://example.org/p", [Literal::Integer(2).into()], true);

        let slot = &node.properties()["http://example.org/p"];
        assert_eq!(slot.values.len(), 2);
        // first write fixed the rendering mode
        assert!(!slot.ordered);
    }
}
