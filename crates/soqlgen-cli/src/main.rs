//! soqlgen command-line front end.
//!
//! Loads a JSON schema and a JSON rule list, prints the confirmed rules
//! as a table, then the generated SELECT statement.

mod formatter;

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use soqlgen::core::{Locale, OperatorId, RuleValue, StaticSchemaProvider};
use soqlgen::{BuilderError, Logic, QueryBuilder};
use std::path::PathBuf;

/// Generate a SOQL-style query from typed filter rules.
#[derive(Parser, Debug)]
#[command(name = "soqlgen")]
#[command(version, about = "Generate a SOQL-style query from filter rules")]
struct Args {
    /// Schema JSON file: object -> field set -> field descriptors
    #[arg(long)]
    schema: PathBuf,

    /// Target object API name
    #[arg(long)]
    object: String,

    /// Field set holding the filterable fields
    #[arg(long, default_value = "FilterFields")]
    filter_field_set: String,

    /// Field set projected into the SELECT list
    #[arg(long, default_value = "QueryFields")]
    query_field_set: String,

    /// Rules JSON file: array of { field, operator, value }
    #[arg(long)]
    rules: PathBuf,

    /// Custom logic expression over rule numbers, e.g. "(1 AND 2) OR 3"
    #[arg(long, conflicts_with = "combine")]
    logic: Option<String>,

    /// Connective used when no custom logic is given
    #[arg(long, value_enum, default_value_t = Combine::And)]
    combine: Combine,

    /// Display language for the rule table (en, fr)
    #[arg(long, default_value = "en")]
    lang: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Combine {
    And,
    Or,
}

/// One rule as it appears in the rules file.
#[derive(Debug, Deserialize)]
struct RuleSpec {
    field: String,
    operator: OperatorId,
    value: RuleValue,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let schema_json = std::fs::read_to_string(&args.schema)?;
    let provider = StaticSchemaProvider::from_json(&schema_json)?;

    let mut builder = QueryBuilder::from_provider(
        &provider,
        &args.object,
        &args.filter_field_set,
        &args.query_field_set,
        Locale::for_lang(&args.lang),
    )?;

    let rules_json = std::fs::read_to_string(&args.rules)?;
    let rules: Vec<RuleSpec> = serde_json::from_str(&rules_json)?;
    for rule in rules {
        builder.add_rule(&rule.field, rule.operator, rule.value)?;
    }

    println!("{}", formatter::summary_table(&builder.summaries()));

    let logic = match &args.logic {
        Some(expression) => Logic::Custom(expression.clone()),
        None => match args.combine {
            Combine::And => Logic::And,
            Combine::Or => Logic::Or,
        },
    };

    match builder.build_query(&logic) {
        Ok(query) => {
            println!("{query}");
            Ok(())
        }
        // Custom logic errors get the caret rendering against the
        // expression the user typed.
        Err(BuilderError::Logic(err)) => {
            if let Some(expression) = &args.logic {
                eprintln!("{}", err.format_with_source(expression));
            }
            Err(err.into())
        }
        Err(other) => Err(other.into()),
    }
}
