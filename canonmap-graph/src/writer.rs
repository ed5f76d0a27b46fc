//! Deterministic Turtle writer
//!
//! Output layout: one `@prefix` line per binding sorted by prefix, a blank
//! line, then one block per entity in first-encountered order. Within a
//! block the order is: `a` clause, `rdfs:label` clause, then predicates in
//! insertion order with their objects in insertion order. Ordered
//! sequences render as parenthesized Turtle collections; everything else
//! as comma-separated objects (repeated triples).

use crate::graph::EntityGraph;
use crate::node::EntityNode;
use crate::prefix::PrefixTable;
use crate::term::{Literal, Value};
use canonmap_vocab::{rdf, rdfs, xsd};

/// Serialize the graph to Turtle text
pub fn format_turtle(graph: &EntityGraph, prefixes: &PrefixTable) -> String {
    let mut out = String::new();

    for (prefix, ns) in prefixes.iter() {
        out.push_str("@prefix ");
        out.push_str(prefix);
        out.push_str(": <");
        out.push_str(ns);
        out.push_str("> .\n");
    }

    for node in graph {
        out.push('\n');
        write_node(&mut out, node, prefixes);
    }

    out
}

fn write_node(out: &mut String, node: &EntityNode, prefixes: &PrefixTable) {
    let mut clauses: Vec<String> = Vec::new();

    if !node.types().is_empty() {
        let types: Vec<String> = node
            .types()
            .iter()
            .map(|t| render_iri(t, prefixes))
            .collect();
        clauses.push(format!("a {}", types.join(", ")));
    }

    if !node.label().is_empty() {
        clauses.push(format!(
            "{} {}",
            render_iri(rdfs::LABEL, prefixes),
            quote(node.label())
        ));
    }

    for (predicate, slot) in node.properties() {
        let rendered: Vec<String> = slot
            .values
            .iter()
            .map(|v| render_value(v, prefixes))
            .collect();
        let objects = if slot.ordered {
            if rendered.is_empty() {
                "()".to_string()
            } else {
                format!("( {} )", rendered.join(" "))
            }
        } else {
            rendered.join(", ")
        };
        clauses.push(format!("{} {}", render_iri(predicate, prefixes), objects));
    }

    if clauses.is_empty() {
        return;
    }

    out.push_str(&render_iri(node.iri(), prefixes));
    for (i, clause) in clauses.iter().enumerate() {
        if i == 0 {
            out.push(' ');
        } else {
            out.push_str("    ");
        }
        out.push_str(clause);
        if i + 1 < clauses.len() {
            out.push_str(" ;\n");
        } else {
            out.push_str(" .\n");
        }
    }
}

fn render_value(value: &Value, prefixes: &PrefixTable) -> String {
    match value {
        Value::Ref(iri) => render_iri(iri, prefixes),
        Value::Literal(lit) => render_literal(lit, prefixes),
    }
}

fn render_literal(lit: &Literal, prefixes: &PrefixTable) -> String {
    match lit {
        Literal::String(s) => quote(s),
        // booleans and integers have bare Turtle token forms
        Literal::Boolean(_) | Literal::Integer(_) => lit.lexical(),
        Literal::Double(_) => format!(
            "{}^^{}",
            quote(&lit.lexical()),
            render_iri(xsd::DOUBLE, prefixes)
        ),
        Literal::Json(s) => format!("{}^^{}", quote(s), render_iri(rdf::JSON, prefixes)),
    }
}

fn render_iri(iri: &str, prefixes: &PrefixTable) -> String {
    prefixes
        .compact(iri)
        .unwrap_or_else(|| format!("<{iri}>"))
}

/// Quote and escape a Turtle string literal
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
