mod cli;
mod error;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use error::{exit_with_error, CliError, CliResult};
use serde_json::Value as JsonValue;
use std::path::Path;

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet  → always "off"
    //   --verbose → "info" level, RUST_LOG honoured for finer control
    //   default  → "off" (clean terminal; use --verbose to see logs)
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let mut ontologies = Vec::with_capacity(cli.ontologies.len());
    for path in &cli.ontologies {
        ontologies.push(read_file(path)?);
    }
    let canon: JsonValue = serde_json::from_str(&read_file(&cli.canonical)?)?;
    let context: JsonValue = serde_json::from_str(&read_file(&cli.context)?)?;

    if !cli.entity_iri.ends_with('/') && !cli.entity_iri.ends_with('#') {
        eprintln!(
            "{} entity IRI does not end with '/' or '#'; the entity prefix may not appear in the output",
            "warning:".yellow().bold()
        );
    }

    let entity = canonmap_mapper::EntityContext::new(&cli.entity_prefix, &cli.entity_iri)?;
    let turtle = canonmap_mapper::map(&canon, &ontologies, &context, &entity, &cli.ignore_labels)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &turtle)
                .map_err(|e| CliError::Input(format!("cannot write {}: {e}", path.display())))?;
            if !cli.quiet {
                println!("written to {}", path.display());
            }
        }
        None => print!("{turtle}"),
    }

    Ok(())
}

fn read_file(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| CliError::Input(format!("cannot read {}: {e}", path.display())))
}
