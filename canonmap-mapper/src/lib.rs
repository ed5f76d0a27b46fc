//! Core mapping engine: canonical JSON → Turtle assertion graph
//!
//! Converts ontology-independent nested JSON documents ("canonical
//! documents") into an RDF assertion graph serialized as Turtle, guided by
//! the label annotations of supplied ontology terminologies.
//!
//! One call to [`map`]:
//! 1. builds the Ontology Index and the output prefix table once;
//! 2. walks every top-level document with the Tree Mapper, correlating
//!    repeated `hasIdentifier` values through a call-scoped Identifier
//!    Registry;
//! 3. serializes the resulting entity graph deterministically.
//!
//! Any error aborts the whole call - no partial Turtle is ever emitted.
//! The transformation is pure and single-threaded; nothing persists
//! across calls.
//!
//! # Example
//!
//! ```
//! use canonmap_mapper::{map, EntityContext};
//! use serde_json::json;
//!
//! let terms = r#"
//!     @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!     @prefix owl: <http://www.w3.org/2002/07/owl#> .
//!     @prefix foaf: <http://xmlns.com/foaf/0.1/> .
//!
//!     foaf:Person a owl:Class ; rdfs:label "Person"@en .
//!     foaf:name a owl:DatatypeProperty ; rdfs:label "name"@en .
//! "#;
//!
//! let canon = json!({"Person": {"name": "Alice"}});
//! let context = json!({"foaf": "http://xmlns.com/foaf/0.1/"});
//! let entity = EntityContext::new("entity", "http://example.org/entity/").unwrap();
//!
//! let turtle = map(&canon, &[terms], &context, &entity, &[]).unwrap();
//! assert!(turtle.contains("a foaf:Person"));
//! assert!(turtle.contains("foaf:name \"Alice\""));
//! ```

mod context;
mod error;
mod mapper;
mod registry;

pub use context::{resolve_context, EntityContext};
pub use error::{MapError, Result};
pub use mapper::TreeMapper;
pub use registry::IdentifierRegistry;

use canonmap_graph::{format_turtle, EntityGraph};
use canonmap_ontology::OntologyIndex;
use serde_json::Value as JsonValue;
use tracing::{debug, info};

/// Map canonical documents to Turtle text
///
/// `canon` is either a single document object or an array of them.
/// `ontologies` are raw Turtle terminology sources. `context` is a JSON
/// object of prefix → IRI bindings used only for output compaction;
/// `entity` designates the namespace generated instances are minted
/// under. Labels in `ignore_labels` store their values verbatim instead
/// of instantiating child entities.
pub fn map<S: AsRef<str>>(
    canon: &JsonValue,
    ontologies: &[S],
    context: &JsonValue,
    entity: &EntityContext,
    ignore_labels: &[String],
) -> Result<String> {
    let index = OntologyIndex::build(ontologies)?;
    let prefixes = resolve_context(context, entity)?;
    debug!(labels = index.len(), prefixes = prefixes.len(), "mapping call prepared");

    let mut graph = EntityGraph::new();
    let mut registry = IdentifierRegistry::new(entity);
    let mut tree = TreeMapper::new(&index, &mut graph, &mut registry, entity, ignore_labels);

    match canon {
        JsonValue::Array(documents) => {
            for (i, document) in documents.iter().enumerate() {
                tree.map_document(document, &[i.to_string()])?;
            }
        }
        document => {
            tree.map_document(document, &[])?;
        }
    }

    info!(subjects = graph.len(), "canonical documents mapped");
    Ok(format_turtle(&graph, &prefixes))
}
