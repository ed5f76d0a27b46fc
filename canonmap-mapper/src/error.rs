use canonmap_ontology::OntologyError;
use thiserror::Error;

/// Errors raised while mapping canonical documents
///
/// Every error aborts the whole mapping call; no partial Turtle is ever
/// produced. Variants carry the offending label and, where feasible, the
/// path into the canonical JSON.
#[derive(Error, Debug, Clone)]
pub enum MapError {
    /// A JSON key or value label is absent from all supplied ontologies.
    #[error("unresolved label '{label}' at {path}")]
    UnresolvedLabel { label: String, path: String },

    /// Distinct ontology terms tied within one resolution bucket.
    #[error("ambiguous label '{label}': matches {}", candidates.join(", "))]
    AmbiguousLabel {
        label: String,
        candidates: Vec<String>,
    },

    /// The canonical document violates the expected shape.
    #[error("malformed canonical document at {path}: {reason}")]
    MalformedShape { reason: String, path: String },

    /// The entity prefix is bound in the context to a different IRI.
    #[error("entity prefix '{prefix}' is bound to <{bound}> in the context, expected <{requested}>")]
    PrefixCollision {
        prefix: String,
        bound: String,
        requested: String,
    },

    /// An external collaborator failed (ontology or context parsing);
    /// the underlying message is surfaced unmodified.
    #[error("{0}")]
    Dependency(String),
}

impl From<OntologyError> for MapError {
    fn from(e: OntologyError) -> Self {
        match e {
            OntologyError::AmbiguousLabel { label, candidates } => {
                MapError::AmbiguousLabel { label, candidates }
            }
            parse @ OntologyError::Parse { .. } => MapError::Dependency(parse.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, MapError>;

/// Render a JSON path for error reports.
pub(crate) fn path_string(path: &[String]) -> String {
    if path.is_empty() {
        "document root".to_string()
    } else {
        path.join("/")
    }
}
