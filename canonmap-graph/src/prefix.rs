//! Prefix table for output compaction
//!
//! Bindings are kept in a `BTreeMap` so the `@prefix` block iterates in
//! sorted order. The table is used solely by the writer; label resolution
//! never consults it.

use std::collections::BTreeMap;

/// Namespace prefix bindings, sorted by prefix
#[derive(Clone, Debug, Default)]
pub struct PrefixTable {
    bindings: BTreeMap<String, String>,
}

impl PrefixTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a prefix to a namespace IRI, replacing any previous binding
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.bindings.insert(prefix.into(), namespace.into());
    }

    /// Look up the namespace bound to a prefix
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.bindings.get(prefix).map(String::as_str)
    }

    /// Iterate bindings sorted by prefix
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Compact an expanded IRI to `prefix:local` form
    ///
    /// Picks the longest bound namespace that prefixes the IRI. Returns
    /// `None` when no namespace matches or the remainder is not a safe
    /// local name, in which case the writer falls back to `<...>` form.
    pub fn compact(&self, iri: &str) -> Option<String> {
        let mut best: Option<(&str, &str)> = None;
        for (prefix, ns) in &self.bindings {
            if !ns.is_empty() && iri.starts_with(ns.as_str()) {
                match best {
                    Some((_, current)) if current.len() >= ns.len() => {}
                    _ => best = Some((prefix.as_str(), ns.as_str())),
                }
            }
        }
        let (prefix, ns) = best?;
        let local = &iri[ns.len()..];
        if is_safe_local(local) {
            Some(format!("{prefix}:{local}"))
        } else {
            None
        }
    }
}

/// Conservative check that a string is usable as a Turtle local name
/// without escaping: alphanumerics, `_`, `-`, and interior `.`.
fn is_safe_local(local: &str) -> bool {
    if local.is_empty() || local.starts_with('-') || local.starts_with('.') || local.ends_with('.')
    {
        return false;
    }
    local
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PrefixTable {
        let mut t = PrefixTable::new();
        t.bind("foaf", "http://xmlns.com/foaf/0.1/");
        t.bind("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        t
    }

    #[test]
    fn compacts_bound_namespaces() {
        let t = table();
        assert_eq!(
            t.compact("http://xmlns.com/foaf/0.1/Person").as_deref(),
            Some("foaf:Person")
        );
        assert_eq!(
            t.compact("http://www.w3.org/2000/01/rdf-schema#label")
                .as_deref(),
            Some("rdfs:label")
        );
    }

    #[test]
    fn unbound_iri_stays_expanded() {
        let t = table();
        assert_eq!(t.compact("http://example.org/other#thing"), None);
    }

    #[test]
    fn longest_namespace_wins() {
        let mut t = PrefixTable::new();
        t.bind("ex", "http://example.org/");
        t.bind("voc", "http://example.org/vocab/");
        assert_eq!(
            t.compact("http://example.org/vocab/name").as_deref(),
            Some("voc:name")
        );
    }

    #[test]
    fn unsafe_locals_are_rejected() {
        let t = table();
        // a slash in the remainder would need escaping; fall back to <...>
        assert_eq!(t.compact("http://xmlns.com/foaf/0.1/a/b"), None);
    }

    #[test]
    fn iteration_is_sorted() {
        let t = table();
        let prefixes: Vec<&str> = t.iter().map(|(p, _)| p).collect();
        assert_eq!(prefixes, ["foaf", "rdfs"]);
    }
}
