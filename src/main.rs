use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use style_wizard::catalog::Catalog;
use style_wizard::intent::{IntentField, SCHEMA_VERSION};
use style_wizard::logging::{init_tracing, LogTarget};
use style_wizard::Session;

/// Headless driver for the citation style wizard.
#[derive(Parser, Debug)]
#[command(name = "style-wizard")]
#[command(version)]
#[command(about = "Inspect and step through citation style intents.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the recognized intent fields and schema revision
    Schema,

    /// Apply answers to an intent and print the next wizard question
    Decide {
        /// Intent JSON document (older schema revisions are accepted)
        #[arg(long)]
        intent: Option<PathBuf>,

        /// Field answer as name=value; value is JSON, or a bare string
        #[arg(long = "set", value_name = "NAME=VALUE")]
        sets: Vec<String>,

        /// Catalog TOML file (defaults to the user config directory)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Print the effective option catalog as TOML
    Catalog {
        /// Catalog TOML file (defaults to the user config directory)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing(LogTarget::from_env()).context("Failed to open log file")?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Schema => {
            let fields: Vec<&str> = IntentField::all().iter().map(|f| f.as_str()).collect();
            let schema = json!({ "version": SCHEMA_VERSION, "fields": fields });
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Commands::Decide {
            intent,
            sets,
            catalog,
        } => {
            let session = Session::new(load_catalog(catalog.as_deref())?);

            if let Some(path) = intent {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read intent file '{}'", path.display()))?;
                session
                    .intent()
                    .load_json(&content)
                    .with_context(|| format!("Invalid intent file '{}'", path.display()))?;
            }

            for assignment in &sets {
                let (name, value) = parse_assignment(assignment)?;
                session.intent().update(name, value)?;
            }

            let output = json!({
                "intent": session.intent().get(),
                "decision": session.decide(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Catalog { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            print!("{}", toml::to_string(&catalog)?);
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => Catalog::load_from(path)?,
        None => Catalog::load()?,
    };
    Ok(catalog)
}

/// Split `name=value`. The value is parsed as JSON when possible so
/// `has_bibliography=true` and `class=null` work, otherwise taken as a string.
fn parse_assignment(input: &str) -> Result<(&str, Value)> {
    let (name, raw) = input
        .split_once('=')
        .with_context(|| format!("Expected NAME=VALUE, got '{}'", input))?;
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((name.trim(), value))
}
