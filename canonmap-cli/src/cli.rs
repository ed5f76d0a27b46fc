use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "canonmap",
    about = "Converts canonical JSON documents to Turtle",
    version
)]
pub struct Cli {
    /// Ontology terminology file in Turtle syntax (repeatable)
    #[arg(short = 'o', long = "ontology", required = true, value_name = "FILE")]
    pub ontologies: Vec<PathBuf>,

    /// Canonical JSON document file
    #[arg(short = 'j', long = "canonical", value_name = "FILE")]
    pub canonical: PathBuf,

    /// Context JSON file with prefix-to-IRI bindings
    #[arg(short = 'c', long = "context", value_name = "FILE")]
    pub context: PathBuf,

    /// Prefix for instantiated entities (e.g. entity)
    #[arg(short = 'p', long = "entity-prefix", value_name = "PREFIX")]
    pub entity_prefix: String,

    /// Namespace IRI for instantiated entities (e.g. http://example.org/entity/)
    #[arg(short = 'e', long = "entity-iri", value_name = "IRI")]
    pub entity_iri: String,

    /// Label whose values are kept verbatim instead of instantiated (repeatable)
    #[arg(short = 'i', long = "ignore-label", value_name = "LABEL")]
    pub ignore_labels: Vec<String>,

    /// Write the generated Turtle to a file instead of stdout
    #[arg(short = 'w', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_color: bool,
}
