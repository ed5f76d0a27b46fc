//! Ontology Index for canonmap
//!
//! Parses supplied ontology terminologies (Turtle syntax, via the external
//! `oxttl` parser) into an immutable Label Resolution Table mapping
//! human-readable annotation labels to term IRIs.
//!
//! Lookup precedence over (annotation predicate, language) buckets:
//!
//! 1. `skos:altLabel` - en, en-US, en-GB, untagged, in that order
//! 2. `rdfs:label` - same language order
//! 3. `skos:altLabel` - de
//! 4. `rdfs:label` - de
//!
//! The first bucket containing any match wins; distinct terms tied inside
//! that bucket are an [`OntologyError::AmbiguousLabel`].
//!
//! # Example
//!
//! ```
//! use canonmap_ontology::OntologyIndex;
//!
//! let terms = r#"
//!     @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!     @prefix owl: <http://www.w3.org/2002/07/owl#> .
//!     @prefix foaf: <http://xmlns.com/foaf/0.1/> .
//!
//!     foaf:Person a owl:Class ; rdfs:label "Person"@en .
//! "#;
//!
//! let index = OntologyIndex::build(&[terms]).unwrap();
//! let entry = index.resolve("Person").unwrap().unwrap();
//! assert_eq!(entry.iri, "http://xmlns.com/foaf/0.1/Person");
//! ```

mod error;
mod index;

pub use error::{OntologyError, Result};
pub use index::{LabelEntry, LabelSource, OntologyIndex, TermKind};
