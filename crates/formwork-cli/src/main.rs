//! formwork CLI
//!
//! Command-line tool for compiling form schemas and checking submitted
//! values against them.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

use formwork::{InputDescriptor, RuleTable, Schema, ValidatorRegistry};

/// Declarative form schemas with compiled validation rules.
#[derive(Parser)]
#[command(name = "formwork")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a schema and print its projected inputs.
    Inputs {
        /// Schema file (JSON).
        #[arg(short, long, env = "FORMWORK_SCHEMA")]
        schema: PathBuf,

        /// Print the inputs as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Check submitted values against a schema.
    Check {
        /// Schema file (JSON).
        #[arg(short, long, env = "FORMWORK_SCHEMA")]
        schema: PathBuf,

        /// Values file (JSON object mapping field names to values).
        #[arg(long)]
        values: PathBuf,

        /// Print the checked inputs as JSON instead of a report.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Inputs { schema, json } => {
            let table = compile_schema(&schema)?;
            let inputs = table.project();

            if json {
                println!("{}", serde_json::to_string_pretty(&inputs)?);
            } else {
                print_inputs(&inputs);
            }
        }

        Commands::Check {
            schema,
            values,
            json,
        } => {
            let table = compile_schema(&schema)?;
            let submitted = load_values(&values)?;
            let inputs = apply_values(table.project(), &submitted);
            let checked = table.validate(&inputs);

            if json {
                println!("{}", serde_json::to_string_pretty(&checked)?);
            } else {
                print_report(&checked);
            }

            if checked.iter().any(|input| !input.is_valid) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn compile_schema(path: &Path) -> anyhow::Result<RuleTable> {
    let raw = std::fs::read_to_string(path)?;
    let schema = Schema::from_json(&raw)?;
    Ok(RuleTable::compile(&schema, &ValidatorRegistry::new())?)
}

fn load_values(path: &Path) -> anyhow::Result<serde_json::Map<String, Value>> {
    let raw = std::fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&raw)?;
    match document {
        Value::Object(map) => Ok(map),
        _ => anyhow::bail!("values file must hold a JSON object"),
    }
}

/// Copies submitted values onto the projected inputs by field name.
fn apply_values(
    inputs: Vec<InputDescriptor>,
    submitted: &serde_json::Map<String, Value>,
) -> Vec<InputDescriptor> {
    for name in submitted.keys() {
        if !inputs.iter().any(|input| &input.name == name) {
            warn!(field = %name, "Value has no matching schema field");
        }
    }

    inputs
        .into_iter()
        .map(|input| match submitted.get(&input.name) {
            Some(value) => input.with_value(value.clone()),
            None => input,
        })
        .collect()
}

fn print_inputs(inputs: &[InputDescriptor]) {
    println!("\nProjected inputs:");
    println!("{:-<60}", "");
    for input in inputs {
        let required = if input.required { "required" } else { "optional" };
        println!(
            " {:<24} {:<10} {}",
            input.label,
            input.input_type.as_str(),
            required
        );
    }
    println!();
}

fn print_report(inputs: &[InputDescriptor]) {
    println!("\nValidation report:");
    println!("{:-<60}", "");
    for input in inputs {
        if input.is_valid {
            println!(" [X] {}", input.label);
        } else {
            println!(" [ ] {}: {}", input.label, input.error_message);
        }
    }

    let invalid = inputs.iter().filter(|input| !input.is_valid).count();
    if invalid == 0 {
        println!("\nAll {} fields valid.", inputs.len());
    } else {
        println!("\n{} of {} fields invalid.", invalid, inputs.len());
    }
}
