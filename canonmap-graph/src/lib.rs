//! Entity-graph intermediate representation for canonmap
//!
//! This crate provides the types the tree mapper accumulates entities into,
//! plus the Turtle writer that serializes the finished graph.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - Nodes, types, and predicates store expanded
//!    IRIs. Compaction is the writer's job, driven by a [`PrefixTable`].
//!
//! 2. **Insertion order is the contract** - Subjects serialize in
//!    first-encountered order, predicates and object values in insertion
//!    order. Identical input therefore yields byte-identical Turtle.
//!
//! 3. **Arena storage** - Entities live in a `Vec` addressed by copyable
//!    [`NodeId`] handles, so repeated-identifier references never create
//!    ownership cycles.
//!
//! # Example
//!
//! ```
//! use canonmap_graph::{format_turtle, EntityGraph, EntityNode, PrefixTable};
//!
//! let mut graph = EntityGraph::new();
//! let id = graph.add(EntityNode::new("http://example.org/entity/0af31c"));
//! graph.node_mut(id).add_type("http://xmlns.com/foaf/0.1/Person");
//!
//! let mut prefixes = PrefixTable::new();
//! prefixes.bind("foaf", "http://xmlns.com/foaf/0.1/");
//!
//! let turtle = format_turtle(&graph, &prefixes);
//! assert!(turtle.starts_with("@prefix foaf:"));
//! ```

mod graph;
mod node;
mod prefix;
mod term;
mod writer;

pub use graph::{EntityGraph, NodeId};
pub use node::{EntityNode, PropertyValues};
pub use prefix::PrefixTable;
pub use term::{Literal, Value};
pub use writer::format_turtle;
