//! Sheetplan CLI - range parsing, operation planning and sheet profiling

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sheetplan::prelude::*;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheetplan")]
#[command(
    author,
    version,
    about = "Parse A1 ranges, translate sheet operations into API requests, profile sheets"
)]
struct Cli {
    /// Engine configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by commands that parse range expressions
#[derive(clap::Args)]
struct RangeContext {
    /// Sheet for expressions without a sheet prefix
    #[arg(short, long)]
    sheet: Option<String>,

    /// Named range known to the spreadsheet (repeatable)
    #[arg(short, long = "name")]
    names: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a range expression and print its structure
    Parse {
        /// Range expression, e.g. "'Q1 Sales'!B2:D10"
        expression: String,

        #[command(flatten)]
        context: RangeContext,
    },

    /// Resolve a range expression against a data size
    Resolve {
        /// Range expression
        expression: String,

        /// Rows of data to place at a single-cell anchor
        #[arg(long, requires = "columns")]
        rows: Option<u32>,

        /// Columns of data to place at a single-cell anchor
        #[arg(long, requires = "rows")]
        columns: Option<u32>,

        #[command(flatten)]
        context: RangeContext,
    },

    /// Translate operation intents (JSON object or array) into API requests
    Build {
        /// Intent file, or "-" for stdin
        input: PathBuf,

        #[command(flatten)]
        context: RangeContext,
    },

    /// Profile a CSV file as a sheet
    #[command(alias = "sample")]
    Profile {
        /// Input CSV file
        input: PathBuf,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,

        /// Sheet title (default: file name without extension)
        #[arg(long)]
        sheet_name: Option<String>,

        /// Print the narrative summary instead of JSON
        #[arg(long)]
        summary: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Parse {
            expression,
            context,
        } => {
            let planner = planner(config, context);
            let range = planner
                .parse(&expression)
                .with_context(|| format!("Failed to parse '{}'", expression))?;
            print_json(&range)
        }
        Commands::Resolve {
            expression,
            rows,
            columns,
            context,
        } => {
            let planner = planner(config, context);
            let extent = rows.zip(columns).map(|(r, c)| DataExtent::new(r, c));
            let resolution = planner
                .resolve(&expression, extent)
                .with_context(|| format!("Failed to resolve '{}'", expression))?;
            if let Some(warning) = &resolution.warning {
                eprintln!("Warning: {}", warning);
            }
            print_json(&resolution)
        }
        Commands::Build { input, context } => build(&input, planner(config, context)),
        Commands::Profile {
            input,
            delimiter,
            sheet_name,
            summary,
        } => profile(&input, &config, delimiter, sheet_name, summary),
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn planner(mut config: EngineConfig, context: RangeContext) -> Planner {
    if context.sheet.is_some() {
        config.default_sheet = context.sheet;
    }
    config.named_ranges.extend(context.names);
    Planner::new(config)
}

fn build(input: &Path, planner: Planner) -> Result<()> {
    let text = read_input(input)?;
    let document: serde_json::Value =
        serde_json::from_str(&text).context("Intent input is not valid JSON")?;

    match document {
        serde_json::Value::Array(items) => {
            tracing::debug!(intents = items.len(), "planning intent batch");
            let mut translations = Vec::with_capacity(items.len());
            for (i, item) in items.into_iter().enumerate() {
                let translation =
                    plan_one(&planner, item).with_context(|| format!("Intent #{}", i))?;
                translations.push(translation);
            }
            print_json(&translations)
        }
        item => print_json(&plan_one(&planner, item)?),
    }
}

fn plan_one(planner: &Planner, item: serde_json::Value) -> Result<Translation> {
    let intent: OperationIntent =
        serde_json::from_value(item).context("Unrecognized operation intent")?;
    let kind = intent.as_str();
    let translation = planner
        .plan(intent)
        .with_context(|| format!("Invalid {} operation", kind))?;
    for warning in &translation.warnings {
        eprintln!("Warning: {}", warning);
    }
    Ok(translation)
}

fn profile(
    input: &Path,
    config: &EngineConfig,
    delimiter: char,
    sheet_name: Option<String>,
    summary: bool,
) -> Result<()> {
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", delimiter);
    }

    let mut options = CsvReadOptions::default().with_delimiter(delimiter as u8);
    if let Some(name) = sheet_name {
        options = options.with_sheet_name(name);
    }
    let sheet = CsvSheet::read_file(input, &options)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;

    let planner = Planner::new(config.clone());
    let sample = planner
        .profile(&sheet.descriptor(), &sheet)
        .with_context(|| format!("Failed to profile sheet '{}'", sheet.title()))?;

    if summary {
        println!("{}", sample.summary());
        Ok(())
    } else {
        print_json(&sample)
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read '{}'", input.display()))
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("Failed to serialize output")?;
    writeln!(stdout).context("Failed to write to stdout")?;
    Ok(())
}
