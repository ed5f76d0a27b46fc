//! Label Resolution Table
//!
//! Ontology terminologies are parsed once and folded into an immutable
//! index from annotation label text to term IRI. Lookup follows a fixed
//! precedence over (annotation predicate, language tag) buckets; a tie
//! between distinct terms inside the winning bucket is reported as an
//! error, never silently resolved.

use crate::error::{OntologyError, Result};
use canonmap_vocab::{owl, rdf, rdfs, skos};
use oxrdf::Term;
use std::collections::HashMap;
use std::io::Cursor;
use tracing::debug;

/// What an ontology declares a term to be
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermKind {
    Class,
    ObjectProperty,
    DataProperty,
}

/// Which annotation predicate carried a label
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelSource {
    /// skos:altLabel
    AltLabel,
    /// rdfs:label
    DisplayLabel,
}

/// One label annotation collected from the ontologies
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelEntry {
    /// The annotated term's IRI (expanded)
    pub iri: String,
    /// Declared kind of the term
    pub kind: TermKind,
    /// Language tag of the annotation, lowercased; `None` for no tag
    pub language: Option<String>,
    /// Annotation predicate the label came from
    pub source: LabelSource,
}

/// Resolution precedence: the first bucket with any match wins.
const PRECEDENCE: [(LabelSource, Option<&str>); 10] = [
    (LabelSource::AltLabel, Some("en")),
    (LabelSource::AltLabel, Some("en-us")),
    (LabelSource::AltLabel, Some("en-gb")),
    (LabelSource::AltLabel, None),
    (LabelSource::DisplayLabel, Some("en")),
    (LabelSource::DisplayLabel, Some("en-us")),
    (LabelSource::DisplayLabel, Some("en-gb")),
    (LabelSource::DisplayLabel, None),
    (LabelSource::AltLabel, Some("de")),
    (LabelSource::DisplayLabel, Some("de")),
];

/// Immutable label → term index, built once per mapping call
#[derive(Clone, Debug, Default)]
pub struct OntologyIndex {
    entries: HashMap<String, Vec<LabelEntry>>,
}

impl OntologyIndex {
    /// Build the index from raw Turtle terminology sources
    ///
    /// Parse failures surface the external parser's message unmodified.
    pub fn build<S: AsRef<str>>(sources: &[S]) -> Result<Self> {
        // (subject, source, text, lang) annotations and subject → rdf:type
        let mut labels: Vec<(String, LabelSource, String, Option<String>)> = Vec::new();
        let mut types: HashMap<String, Vec<String>> = HashMap::new();

        for source in sources {
            let reader = Cursor::new(source.as_ref().as_bytes());
            for parsed in oxttl::TurtleParser::new().for_reader(reader) {
                let triple = parsed.map_err(|e| OntologyError::Parse {
                    message: e.to_string(),
                })?;

                let subject: Term = triple.subject.into();
                let Term::NamedNode(subject) = subject else {
                    continue;
                };
                let predicate = triple.predicate.as_str();

                match &triple.object {
                    Term::Literal(lit) if predicate == rdfs::LABEL => {
                        labels.push((
                            subject.as_str().to_string(),
                            LabelSource::DisplayLabel,
                            lit.value().to_string(),
                            lit.language().map(|l| l.to_ascii_lowercase()),
                        ));
                    }
                    Term::Literal(lit) if predicate == skos::ALT_LABEL => {
                        labels.push((
                            subject.as_str().to_string(),
                            LabelSource::AltLabel,
                            lit.value().to_string(),
                            lit.language().map(|l| l.to_ascii_lowercase()),
                        ));
                    }
                    Term::NamedNode(class) if predicate == rdf::TYPE => {
                        types
                            .entry(subject.as_str().to_string())
                            .or_default()
                            .push(class.as_str().to_string());
                    }
                    _ => {}
                }
            }
        }

        let mut entries: HashMap<String, Vec<LabelEntry>> = HashMap::new();
        for (iri, source, text, language) in labels {
            let kind = classify(types.get(&iri).map(Vec::as_slice).unwrap_or(&[]));
            entries.entry(text).or_default().push(LabelEntry {
                iri,
                kind,
                language,
                source,
            });
        }

        debug!(
            labels = entries.len(),
            terms = types.len(),
            sources = sources.len(),
            "label resolution table built"
        );

        Ok(Self { entries })
    }

    /// Resolve a label to its term
    ///
    /// Walks the precedence buckets; the first bucket containing any match
    /// wins. Two or more *distinct* IRIs inside the winning bucket are an
    /// [`OntologyError::AmbiguousLabel`]. A miss is `Ok(None)` so callers
    /// can attach their own context to the unresolved-label report.
    pub fn resolve(&self, label: &str) -> Result<Option<&LabelEntry>> {
        let candidates = match self.entries.get(label) {
            Some(c) => c,
            None => return Ok(None),
        };

        for (source, language) in PRECEDENCE {
            let matching: Vec<&LabelEntry> = candidates
                .iter()
                .filter(|e| e.source == source && e.language.as_deref() == language)
                .collect();
            let Some(first) = matching.first() else {
                continue;
            };
            if matching.iter().any(|e| e.iri != first.iri) {
                let mut iris: Vec<String> =
                    matching.iter().map(|e| e.iri.clone()).collect();
                iris.sort();
                iris.dedup();
                return Err(OntologyError::AmbiguousLabel {
                    label: label.to_string(),
                    candidates: iris,
                });
            }
            return Ok(Some(*first));
        }

        Ok(None)
    }

    /// Number of distinct label strings in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Classify a term from its rdf:type assertions.
///
/// Anything that is not declared a class or an object property (including
/// untyped terms) counts as a data property; the mapper treats kind as
/// metadata, so the permissive default mirrors plain rdf:Property terms.
fn classify(types: &[String]) -> TermKind {
    if types.iter().any(|t| t == owl::CLASS || t == rdfs::CLASS) {
        TermKind::Class
    } else if types.iter().any(|t| t == owl::OBJECT_PROPERTY) {
        TermKind::ObjectProperty
    } else {
        TermKind::DataProperty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TERMS: &str = r#"
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix skos: <http://www.w3.org/2004/02/skos/core#> .
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix ex: <http://example.org/vocab#> .

        ex:Person a owl:Class ;
            rdfs:label "Person"@en ;
            rdfs:label "Person"@de .

        ex:knows a owl:ObjectProperty ;
            rdfs:label "knows"@en .

        ex:name a owl:DatatypeProperty ;
            rdfs:label "name"@en ;
            skos:altLabel "full name"@en .

        ex:surname rdfs:label "surname" .
    "#;

    fn index() -> OntologyIndex {
        OntologyIndex::build(&[TERMS]).unwrap()
    }

    #[test]
    fn resolves_display_labels() {
        let idx = index();
        let entry = idx.resolve("Person").unwrap().unwrap();
        assert_eq!(entry.iri, "http://example.org/vocab#Person");
        assert_eq!(entry.kind, TermKind::Class);
        assert_eq!(entry.language.as_deref(), Some("en"));
    }

    #[test]
    fn alt_label_outranks_display_label() {
        let extra = r#"
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix skos: <http://www.w3.org/2004/02/skos/core#> .
            @prefix ex: <http://example.org/vocab#> .

            ex:alias skos:altLabel "name"@en .
        "#;
        let idx = OntologyIndex::build(&[TERMS, extra]).unwrap();
        // "name" now matches an altLabel (tier 1) and a rdfs:label (tier 2)
        let entry = idx.resolve("name").unwrap().unwrap();
        assert_eq!(entry.iri, "http://example.org/vocab#alias");
        assert_eq!(entry.source, LabelSource::AltLabel);
    }

    #[test]
    fn no_tag_label_resolves_after_english() {
        let idx = index();
        let entry = idx.resolve("surname").unwrap().unwrap();
        assert_eq!(entry.iri, "http://example.org/vocab#surname");
        assert_eq!(entry.language, None);
        // untyped term defaults to data property
        assert_eq!(entry.kind, TermKind::DataProperty);
    }

    #[test]
    fn german_is_last_resort() {
        let german_only = r#"
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix ex: <http://example.org/vocab#> .

            ex:Werkstoff rdfs:label "Werkstoff"@de .
        "#;
        let idx = OntologyIndex::build(&[german_only]).unwrap();
        let entry = idx.resolve("Werkstoff").unwrap().unwrap();
        assert_eq!(entry.language.as_deref(), Some("de"));
    }

    #[test]
    fn language_tags_match_case_insensitively() {
        let tagged = r#"
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix ex: <http://example.org/vocab#> .

            ex:colour rdfs:label "colour"@en-GB .
        "#;
        let idx = OntologyIndex::build(&[tagged]).unwrap();
        let entry = idx.resolve("colour").unwrap().unwrap();
        assert_eq!(entry.language.as_deref(), Some("en-gb"));
    }

    #[test]
    fn tie_in_winning_bucket_is_ambiguous() {
        let clashing = r#"
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix ex: <http://example.org/vocab#> .
            @prefix other: <http://example.org/other#> .

            ex:Sample rdfs:label "Sample"@en .
            other:Sample rdfs:label "Sample"@en .
        "#;
        let idx = OntologyIndex::build(&[clashing]).unwrap();
        let err = idx.resolve("Sample").unwrap_err();
        match err {
            OntologyError::AmbiguousLabel { label, candidates } => {
                assert_eq!(label, "Sample");
                assert_eq!(candidates.len(), 2);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }

    #[test]
    fn same_term_twice_is_not_ambiguous() {
        // supplying the same terminology twice must not create a tie
        let idx = OntologyIndex::build(&[TERMS, TERMS]).unwrap();
        let entry = idx.resolve("Person").unwrap().unwrap();
        assert_eq!(entry.iri, "http://example.org/vocab#Person");
    }

    #[test]
    fn lower_bucket_ambiguity_is_shadowed_by_a_winner() {
        // the en bucket has a single winner; the de tie never comes into play
        let de_clash = r#"
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix ex: <http://example.org/vocab#> .
            @prefix other: <http://example.org/other#> .

            ex:Thing rdfs:label "Thing"@en .
            ex:Thing rdfs:label "Thing"@de .
            other:Thing rdfs:label "Thing"@de .
        "#;
        let idx = OntologyIndex::build(&[de_clash]).unwrap();
        let entry = idx.resolve("Thing").unwrap().unwrap();
        assert_eq!(entry.iri, "http://example.org/vocab#Thing");
    }

    #[test]
    fn unknown_label_misses() {
        let idx = index();
        assert!(idx.resolve("nonexistent").unwrap().is_none());
    }

    #[test]
    fn broken_turtle_is_a_parse_error() {
        let err = OntologyIndex::build(&["@prefix broken"]).unwrap_err();
        assert!(matches!(err, OntologyError::Parse { .. }));
    }

    #[test]
    fn object_property_kind() {
        let idx = index();
        let entry = idx.resolve("knows").unwrap().unwrap();
        assert_eq!(entry.kind, TermKind::ObjectProperty);
    }
}
