//! Tree Mapper
//!
//! Recursively walks canonical documents, resolving JSON keys through the
//! Ontology Index and instantiating entity nodes in the graph. Repeated
//! `hasIdentifier` values correlate to a single node via the Identifier
//! Registry; attributes from every occurrence append in document encounter
//! order.

use crate::context::EntityContext;
use crate::error::{path_string, MapError, Result};
use crate::registry::IdentifierRegistry;
use canonmap_graph::{EntityGraph, Literal, NodeId, Value};
use canonmap_ontology::{LabelEntry, OntologyIndex};
use canonmap_vocab::local_name;
use oxrdf::NamedNode;
use serde_json::{Map, Value as JsonValue};
use std::collections::HashSet;
use tracing::trace;

/// Correlates repeated references to one logical entity
const KEY_IDENTIFIER: &str = "hasIdentifier";
/// Extra class assertions beyond the primary type
const KEY_ADDITIONAL_TYPES: &str = "additionalTypes";
/// Declares which of this object's array attributes are ordered lists
const KEY_LIST_HANDLER: &str = "listHandler";

fn is_reserved(key: &str) -> bool {
    matches!(key, KEY_IDENTIFIER | KEY_ADDITIONAL_TYPES | KEY_LIST_HANDLER)
}

/// Recursive canonical-JSON → entity-graph walker
///
/// One mapper instance serves one mapping call: the index is read-only,
/// the graph and registry accumulate across all top-level documents.
pub struct TreeMapper<'a> {
    index: &'a OntologyIndex,
    graph: &'a mut EntityGraph,
    registry: &'a mut IdentifierRegistry,
    entity: &'a EntityContext,
    ignore: HashSet<&'a str>,
}

impl<'a> TreeMapper<'a> {
    pub fn new(
        index: &'a OntologyIndex,
        graph: &'a mut EntityGraph,
        registry: &'a mut IdentifierRegistry,
        entity: &'a EntityContext,
        ignore_labels: &'a [String],
    ) -> Self {
        Self {
            index,
            graph,
            registry,
            entity,
            ignore: ignore_labels.iter().map(String::as_str).collect(),
        }
    }

    /// Map one top-level canonical document
    pub fn map_document(&mut self, doc: &JsonValue, path: &[String]) -> Result<NodeId> {
        let obj = doc.as_object().ok_or_else(|| malformed(
            "top-level document must be an object",
            path,
        ))?;
        self.map_entity(obj, path)
    }

    /// Map one entity object of shape `{ TypeLabel: { ...attributes } }`
    fn map_entity(&mut self, obj: &Map<String, JsonValue>, path: &[String]) -> Result<NodeId> {
        // the single non-reserved key is the primary type label
        let mut primary: Option<(&String, &JsonValue)> = None;
        for (key, value) in obj {
            if is_reserved(key) {
                continue;
            }
            if primary.is_some() {
                return Err(malformed("more than one type key", path));
            }
            primary = Some((key, value));
        }
        let (type_label, body) =
            primary.ok_or_else(|| malformed("missing type key", path))?;

        let mut path = path.to_vec();
        path.push(type_label.clone());

        let body = body
            .as_object()
            .ok_or_else(|| malformed("entity body must be an object", &path))?;

        let primary_iri = resolve(self.index, type_label, &path)?.iri.clone();

        let node_id = match body.get(KEY_IDENTIFIER) {
            Some(value) => {
                let identifier = stringify_identifier(value, &path)?;
                let (id, _created) = self.registry.get_or_create(self.graph, &identifier);
                id
            }
            None => self.registry.create_anonymous(self.graph),
        };
        trace!(iri = self.graph.node(node_id).iri(), label = %type_label, "entity");

        self.graph.node_mut(node_id).add_type(primary_iri.clone());
        if let Some(value) = body.get(KEY_ADDITIONAL_TYPES) {
            let items = value
                .as_array()
                .ok_or_else(|| malformed("additionalTypes must be an array", &path))?;
            for item in items {
                let text = item.as_str().ok_or_else(|| {
                    malformed("additionalTypes entries must be strings", &path)
                })?;
                if text.trim().is_empty() {
                    continue;
                }
                let iri = resolve(self.index, text, &path)?.iri.clone();
                self.graph.node_mut(node_id).add_type(iri);
            }
        }

        // "abc123 Person": the UUID's first 6 hex chars + the type's local name
        let short_id: String = self.graph.node(node_id).iri()[self.entity.iri().len()..]
            .chars()
            .take(6)
            .collect();
        self.graph
            .node_mut(node_id)
            .set_label_if_empty(format!("{short_id} {}", local_name(&primary_iri)));

        // list scope applies to this object's direct attributes only
        let mut list_scope: HashSet<&str> = HashSet::new();
        if let Some(value) = body.get(KEY_LIST_HANDLER) {
            let items = value
                .as_array()
                .ok_or_else(|| malformed("listHandler must be an array", &path))?;
            for item in items {
                let text = item
                    .as_str()
                    .ok_or_else(|| malformed("listHandler entries must be strings", &path))?;
                list_scope.insert(text);
            }
        }

        for (key, value) in body {
            if is_reserved(key) {
                continue;
            }
            let mut attr_path = path.clone();
            attr_path.push(key.clone());

            let predicate = resolve(self.index, key, &attr_path)?.iri.clone();

            if self.ignore.contains(key.as_str()) {
                let v = self.verbatim_value(value, &attr_path)?;
                self.graph
                    .node_mut(node_id)
                    .append_values(predicate, [v], false);
                continue;
            }

            match value {
                JsonValue::Array(items) => {
                    let ordered = list_scope.contains(key.as_str());
                    let mut values = Vec::with_capacity(items.len());
                    for (i, item) in items.iter().enumerate() {
                        let mut item_path = attr_path.clone();
                        item_path.push(i.to_string());
                        values.push(self.element_value(item, ordered, &item_path)?);
                    }
                    self.graph
                        .node_mut(node_id)
                        .append_values(predicate, values, ordered);
                }
                other => {
                    let v = self.attribute_value(other, &attr_path)?;
                    self.graph
                        .node_mut(node_id)
                        .append_values(predicate, [v], false);
                }
            }
        }

        Ok(node_id)
    }

    /// One element of an array-valued attribute
    fn element_value(
        &mut self,
        value: &JsonValue,
        ordered: bool,
        path: &[String],
    ) -> Result<Value> {
        match value {
            JsonValue::Object(obj) => {
                let child = self.map_entity(obj, path)?;
                Ok(Value::reference(self.graph.node(child).iri()))
            }
            JsonValue::Array(_) => Err(malformed("nested arrays are not supported", path)),
            _ if ordered => Err(malformed(
                "ordered list elements must be entity objects",
                path,
            )),
            other => literal_value(other, path),
        }
    }

    /// A non-array attribute value
    fn attribute_value(&mut self, value: &JsonValue, path: &[String]) -> Result<Value> {
        match value {
            JsonValue::Object(obj) => {
                let child = self.map_entity(obj, path)?;
                Ok(Value::reference(self.graph.node(child).iri()))
            }
            other => literal_value(other, path),
        }
    }

    /// An ignore-listed value, stored without instantiating a child entity
    ///
    /// Strings resolve as labels when possible and otherwise stay verbatim:
    /// as an IRI reference when well-formed, as a string literal when not.
    /// Structured values become one canonical JSON literal.
    fn verbatim_value(&mut self, value: &JsonValue, path: &[String]) -> Result<Value> {
        match value {
            JsonValue::String(s) => match self.index.resolve(s)? {
                Some(entry) => Ok(Value::reference(entry.iri.clone())),
                None if NamedNode::new(s.as_str()).is_ok() => Ok(Value::reference(s.clone())),
                None => Ok(Literal::string(s.clone()).into()),
            },
            JsonValue::Object(_) | JsonValue::Array(_) => Ok(Literal::json(value).into()),
            other => literal_value(other, path),
        }
    }
}

fn resolve<'i>(index: &'i OntologyIndex, label: &str, path: &[String]) -> Result<&'i LabelEntry> {
    index.resolve(label)?.ok_or_else(|| MapError::UnresolvedLabel {
        label: label.to_string(),
        path: path_string(path),
    })
}

fn literal_value(value: &JsonValue, path: &[String]) -> Result<Value> {
    match value {
        JsonValue::String(s) => Ok(Literal::string(s.clone()).into()),
        JsonValue::Bool(b) => Ok(Literal::Boolean(*b).into()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Literal::Integer(i).into())
            } else if let Some(d) = n.as_f64() {
                Ok(Literal::Double(d).into())
            } else {
                Err(malformed("unrepresentable number", path))
            }
        }
        _ => Err(malformed("null values are not supported", path)),
    }
}

/// `hasIdentifier` values are always treated as strings
fn stringify_identifier(value: &JsonValue, path: &[String]) -> Result<String> {
    match value {
        JsonValue::String(s) => Ok(s.clone()),
        JsonValue::Number(n) => Ok(n.to_string()),
        JsonValue::Bool(b) => Ok(b.to_string()),
        _ => Err(malformed("hasIdentifier must be a scalar value", path)),
    }
}

fn malformed(reason: &str, path: &[String]) -> MapError {
    MapError::MalformedShape {
        reason: reason.to_string(),
        path: path_string(path),
    }
}
