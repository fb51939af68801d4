//! # Refract CLI Entry Point
//!
//! The main executable for the Refract tool. This file drives the application lifecycle:
//!
//! 1. **Initialization**: Parses command-line arguments using [`cli::Cli`] and installs the
//!    log subscriber.
//! 2. **Resolution**: Looks the requested type up in the schema registry.
//! 3. **Execution**: Describes the type or transforms a JSON value of it through the [`catalog`].
//! 4. **Presentation**: Formats and prints the resulting data or error to standard output/error.

mod catalog;
mod cli;
mod formatter;
mod transforms;

use anyhow::Context;
use catalog::Catalog;
use clap::Parser;
use cli::{Cli, Commands};
use formatter::{ExpandedRecord, FormattedString, TypeList};
use refract_core::RecordInfo;
use serde_json::Value;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use transforms::Operation;
use user_schema::REGISTRY;

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::List => list_types(),
        Commands::Describe {
            type_name,
            recursive,
            json,
        } => describe_type(&type_name, recursive, json),
        Commands::Transform {
            type_name,
            body,
            file,
            op,
        } => run_transform(&type_name, body, file, op),
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    // A subscriber may already be installed; logging is best effort.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn lookup_or_exit(type_name: &str) -> RecordInfo {
    match REGISTRY.lookup(type_name) {
        Ok(record) => record,
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

fn list_types() {
    let records = REGISTRY.records().collect();
    println!("{}", FormattedString::from(TypeList(records)));
}

fn describe_type(type_name: &str, recursive: bool, json: bool) {
    let record = lookup_or_exit(type_name);
    tracing::debug!(type_name = record.qualified_name(), "Describing type");

    let formatted = if json {
        FormattedString::from(record.signature().to_json())
    } else if recursive {
        FormattedString::from(ExpandedRecord(record))
    } else {
        FormattedString::from(record)
    };

    println!("{formatted}");
}

fn run_transform(type_name: &str, body: Option<Value>, file: Option<PathBuf>, op: Operation) {
    let record = lookup_or_exit(type_name);

    let body = match read_body(body, file) {
        Ok(body) => body,
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    };

    match Catalog::user_schema().transform(record, body, op) {
        Ok(value) => println!("{}", FormattedString::from(value)),
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

fn read_body(body: Option<Value>, file: Option<PathBuf>) -> anyhow::Result<Value> {
    if let Some(body) = body {
        return Ok(body);
    }

    let path = file.context("Either --body or --file is required")?;
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid JSON in '{}'", path.display()))
}
