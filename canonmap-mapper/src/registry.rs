//! Identifier Registry
//!
//! Call-scoped map from canonical `hasIdentifier` values to entity nodes.
//! The same identifier always yields the same node within one mapping
//! call; distinct identifiers never merge, even with identical attributes.
//!
//! Entity IRIs are UUIDs minted under the entity namespace. UUIDs are
//! name-based (v5) over the namespace IRI and a per-call sequence number,
//! so identical input produces identical IRIs and the overall output stays
//! byte-reproducible.

use crate::context::EntityContext;
use canonmap_graph::{EntityGraph, EntityNode, NodeId};
use std::collections::HashMap;
use uuid::Uuid;

/// Call-scoped identifier → node correlation table
#[derive(Debug)]
pub struct IdentifierRegistry {
    by_identifier: HashMap<String, NodeId>,
    namespace: Uuid,
    entity_iri: String,
    minted: u64,
}

impl IdentifierRegistry {
    /// Create an empty registry minting under the given entity context
    pub fn new(entity: &EntityContext) -> Self {
        Self {
            by_identifier: HashMap::new(),
            namespace: Uuid::new_v5(&Uuid::NAMESPACE_URL, entity.iri().as_bytes()),
            entity_iri: entity.iri().to_string(),
            minted: 0,
        }
    }

    /// Fetch the node for an identifier, creating it on first encounter
    ///
    /// Returns the node handle and whether this call created it.
    pub fn get_or_create(&mut self, graph: &mut EntityGraph, identifier: &str) -> (NodeId, bool) {
        if let Some(&id) = self.by_identifier.get(identifier) {
            return (id, false);
        }
        let id = self.mint(graph);
        self.by_identifier.insert(identifier.to_string(), id);
        (id, true)
    }

    /// Create a node with no identifier correlation
    pub fn create_anonymous(&mut self, graph: &mut EntityGraph) -> NodeId {
        self.mint(graph)
    }

    fn mint(&mut self, graph: &mut EntityGraph) -> NodeId {
        let uuid = Uuid::new_v5(&self.namespace, self.minted.to_string().as_bytes());
        self.minted += 1;
        let iri = format!("{}{}", self.entity_iri, uuid.simple());
        graph.add(EntityNode::new(iri))
    }
}
