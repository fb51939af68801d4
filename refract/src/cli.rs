//! # CLI
//!
//! This module defines the command-line interface of `refract` using `clap`.
//!
//! It is responsible for parsing user input and performing validation (e.g., ensuring the body
//! is valid JSON).
use crate::transforms::Operation;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "refract",
    version,
    about = "Inspect schema types and transform their values"
)]
pub struct Cli {
    /// Print debug logs to stderr (`RUST_LOG` takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every type of the schema
    List,

    /// Describe a type (show its definition)
    Describe {
        /// Type name, qualified (e.g. user.User) or simple when unique (e.g. User)
        type_name: String,
        /// Recursively describe all dependencies (nested structs and enums)
        #[arg(short, long)]
        recursive: bool,
        /// Print the type descriptor as JSON
        #[arg(long, conflicts_with = "recursive")]
        json: bool,
    },

    /// Apply a transform to every string of a JSON value
    ///
    /// The value is decoded into the type, transformed and encoded back to JSON.
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// refract transform user.Pet --body '{"name": "Cheeta"}' --op upper-case
    /// ```
    #[command(group(ArgGroup::new("input").required(true).args(["body", "file"])))]
    Transform {
        /// Type name, qualified (e.g. user.User) or simple when unique (e.g. User)
        type_name: String,
        /// JSON value of the type
        #[arg(long, value_parser = parse_body)]
        body: Option<serde_json::Value>,
        /// Path to a file holding the JSON value
        #[arg(long)]
        file: Option<PathBuf>,
        /// Transform to apply to every string
        #[arg(long, value_enum, default_value_t = Operation::UpperCase)]
        op: Operation,
    },
}

fn parse_body(value: &str) -> Result<serde_json::Value, String> {
    serde_json::from_str(value).map_err(|e| format!("Invalid JSON: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_body_rejects_invalid_json() {
        assert!(parse_body(r#"{"name": "Cheeta"}"#).is_ok());
        assert!(parse_body("{name}").unwrap_err().starts_with("Invalid JSON"));
    }

    #[test]
    fn transform_requires_an_input() {
        assert!(Cli::try_parse_from(["refract", "transform", "user.Pet"]).is_err());
        assert!(
            Cli::try_parse_from(["refract", "transform", "Pet", "--body", "{}", "--file", "x"])
                .is_err()
        );
    }

    #[test]
    fn transform_defaults_to_upper_case() {
        let cli = Cli::try_parse_from(["refract", "transform", "Pet", "--body", "{}"]).unwrap();

        let Commands::Transform { op, body, .. } = cli.command else {
            panic!("Expected the transform command");
        };
        assert_eq!(op, Operation::UpperCase);
        assert_eq!(body, Some(serde_json::json!({})));
    }

    #[test]
    fn operations_use_kebab_case_names() {
        let cli = Cli::try_parse_from([
            "refract",
            "transform",
            "Pet",
            "--file",
            "pet.json",
            "--op",
            "ascii-only",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Commands::Transform {
                op: Operation::AsciiOnly,
                ..
            }
        ));
    }
}
