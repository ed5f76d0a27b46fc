//! Context resolution
//!
//! Binds the caller-supplied prefix→IRI context plus the designated entity
//! (prefix, IRI) pair into a [`PrefixTable`]. The table only drives output
//! compaction; label resolution never consults it.

use crate::error::{MapError, Result};
use canonmap_graph::PrefixTable;
use oxrdf::NamedNode;
use serde_json::Value as JsonValue;

/// The namespace new entities are minted under
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityContext {
    prefix: String,
    iri: String,
}

impl EntityContext {
    /// Validate and construct the entity context
    ///
    /// The IRI must be well-formed; the prefix must be non-empty.
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        let iri = iri.into();
        if prefix.is_empty() {
            return Err(MapError::Dependency(
                "entity prefix must not be empty".to_string(),
            ));
        }
        NamedNode::new(iri.as_str())
            .map_err(|e| MapError::Dependency(format!("invalid entity IRI <{iri}>: {e}")))?;
        Ok(Self { prefix, iri })
    }

    /// The entity namespace prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The entity namespace IRI
    pub fn iri(&self) -> &str {
        &self.iri
    }
}

/// Build the output prefix table from the context JSON and entity context
///
/// The context must be a JSON object of prefix → IRI strings. Binding the
/// entity prefix to a *different* IRI is rejected; binding it to the same
/// IRI is allowed. The entity binding is always present in the result.
pub fn resolve_context(context: &JsonValue, entity: &EntityContext) -> Result<PrefixTable> {
    let bindings = context.as_object().ok_or_else(|| {
        MapError::Dependency("context must be a JSON object of prefix to IRI".to_string())
    })?;

    let mut table = PrefixTable::new();
    for (prefix, value) in bindings {
        let iri = value.as_str().ok_or_else(|| {
            MapError::Dependency(format!("context binding for '{prefix}' must be a string"))
        })?;
        if prefix == entity.prefix() && iri != entity.iri() {
            return Err(MapError::PrefixCollision {
                prefix: prefix.clone(),
                bound: iri.to_string(),
                requested: entity.iri().to_string(),
            });
        }
        table.bind(prefix, iri);
    }
    table.bind(entity.prefix(), entity.iri());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entity() -> EntityContext {
        EntityContext::new("entity", "http://example.org/entity/").unwrap()
    }

    #[test]
    fn entity_binding_is_added() {
        let table = resolve_context(&json!({"foaf": "http://xmlns.com/foaf/0.1/"}), &entity())
            .unwrap();
        assert_eq!(table.namespace("entity"), Some("http://example.org/entity/"));
        assert_eq!(table.namespace("foaf"), Some("http://xmlns.com/foaf/0.1/"));
    }

    #[test]
    fn colliding_entity_prefix_is_rejected() {
        let err = resolve_context(&json!({"entity": "http://other.org/"}), &entity()).unwrap_err();
        assert!(matches!(err, MapError::PrefixCollision { .. }));
    }

    #[test]
    fn identical_entity_binding_is_allowed() {
        let table =
            resolve_context(&json!({"entity": "http://example.org/entity/"}), &entity()).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn non_object_context_is_a_dependency_error() {
        let err = resolve_context(&json!(["not", "a", "map"]), &entity()).unwrap_err();
        assert!(matches!(err, MapError::Dependency(_)));
    }

    #[test]
    fn invalid_entity_iri_is_rejected() {
        assert!(EntityContext::new("entity", "not an iri").is_err());
    }
}
