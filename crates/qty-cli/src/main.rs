//! qty - Command-line front end for the qty unit engine
//!
//! Usage:
//!   qty parse "5.6 kg*m/s^2"            # Parse and normalize
//!   qty convert "2500 m/h" "ft/s"       # Convert
//!   qty calc "2.5 m" + "3 cm"           # Unit-aware arithmetic
//!   qty compare "1 cm" "10 mm"          # Order two quantities
//!   qty series tempC tempF 0 37 100     # Convert many numbers at once
//!   qty --json units --kind length      # Machine-readable output

use std::cmp::Ordering;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use qty_core::{Engine, Operand, Quantity, Registry};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "qty")]
#[command(about = "Parse, convert and combine physical quantities", long_about = None)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Load the unit registry from a JSON file instead of the builtin catalog
    #[arg(long, value_name = "FILE", global = true)]
    registry: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a quantity and print it normalized
    Parse { expr: String },

    /// Convert a quantity to other units
    Convert { expr: String, units: String },

    /// Convert a quantity to SI base units
    Base { expr: String },

    /// Round a quantity to a multiple of a precision, e.g. "0.1 m" or 0.5
    Prec { expr: String, precision: String },

    /// Combine two quantities with + - * or /
    Calc { lhs: String, op: String, rhs: String },

    /// Print the reciprocal of a quantity
    Inverse { expr: String },

    /// Compare two compatible quantities
    Compare { lhs: String, rhs: String },

    /// List every kind of quantity
    Kinds,

    /// List unit names
    Units {
        /// Only units of this kind
        #[arg(long)]
        kind: Option<String>,
    },

    /// List the aliases of a unit or prefix
    Aliases { name: String },

    /// Convert a series of plain numbers from one unit to another
    Series {
        from: String,
        to: String,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

/// Result of one command, printed as text or JSON
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Output {
    Quantity(Quantity),
    Comparison { ordering: &'static str },
    Names(Vec<String>),
    Numbers(Vec<f64>),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let engine = load_engine(args.registry.as_ref())?;
    let output = run(&engine, args.command)?;
    print_output(&output, args.json)?;
    Ok(())
}

fn load_engine(registry: Option<&PathBuf>) -> Result<Engine> {
    let Some(path) = registry else {
        return Ok(Engine::new());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read registry {}", path.display()))?;
    let registry = Registry::from_json(&json)
        .with_context(|| format!("failed to load registry {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded unit registry");
    Ok(Engine::with_registry(registry))
}

fn run(engine: &Engine, command: Command) -> Result<Output> {
    let output = match command {
        Command::Parse { expr } => Output::Quantity(engine.parse(&expr)?),
        Command::Convert { expr, units } => {
            let q = engine.parse(&expr)?;
            Output::Quantity(engine.to(&q, &units)?)
        }
        Command::Base { expr } => Output::Quantity(engine.to_base(&engine.parse(&expr)?)?),
        Command::Prec { expr, precision } => {
            let q = engine.parse(&expr)?;
            Output::Quantity(engine.to_prec(&q, operand(&precision))?)
        }
        Command::Calc { lhs, op, rhs } => {
            let q = engine.parse(&lhs)?;
            let rhs = operand(&rhs);
            let result = match op.as_str() {
                "+" => engine.add(&q, rhs)?,
                "-" => engine.sub(&q, rhs)?,
                "*" | "x" => engine.mul(&q, rhs)?,
                "/" => engine.div(&q, rhs)?,
                other => bail!("unknown operator '{other}', expected one of + - * /"),
            };
            Output::Quantity(result)
        }
        Command::Inverse { expr } => Output::Quantity(engine.inverse(&engine.parse(&expr)?)?),
        Command::Compare { lhs, rhs } => {
            let ordering = engine.parse(&lhs)?.compare_to(&engine.parse(&rhs)?)?;
            Output::Comparison {
                ordering: match ordering {
                    Ordering::Less => "less",
                    Ordering::Equal => "equal",
                    Ordering::Greater => "greater",
                },
            }
        }
        Command::Kinds => Output::Names(engine.kinds().into_iter().map(String::from).collect()),
        Command::Units { kind: None } => Output::Names(engine.units()),
        Command::Units { kind: Some(kind) } => Output::Names(engine.units_of_kind(&kind)?),
        Command::Aliases { name } => Output::Names(engine.aliases_of(&name)?),
        Command::Series { from, to, values } => {
            Output::Numbers(engine.converter(&from, &to)?.convert_all(&values)?)
        }
    };
    Ok(output)
}

/// Numeric arguments become bare-number operands
fn operand(text: &str) -> Operand {
    match text.trim().parse::<f64>() {
        Ok(value) => Operand::Scalar(value),
        Err(_) => Operand::Text(text.to_string()),
    }
}

fn print_output(output: &Output, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(output)?);
        return Ok(());
    }
    match output {
        Output::Quantity(q) => println!("{q}"),
        Output::Comparison { ordering } => println!("{ordering}"),
        Output::Names(names) => {
            for name in names {
                println!("{name}");
            }
        }
        Output::Numbers(values) => {
            for value in values {
                println!("{value}");
            }
        }
    }
    Ok(())
}
