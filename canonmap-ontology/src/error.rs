use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum OntologyError {
    /// A supplied ontology source failed to parse. The message is the
    /// external Turtle parser's, surfaced unmodified.
    #[error("ontology parse error: {message}")]
    Parse { message: String },

    /// Two or more distinct terms carry the same label within the winning
    /// resolution bucket.
    #[error("ambiguous label '{label}': matches {}", candidates.join(", "))]
    AmbiguousLabel {
        label: String,
        candidates: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, OntologyError>;
