//! h5frame - Write tabular numeric data into HDF5 group/dataset hierarchies

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use h5frame::builder::build_table;
use h5frame::config::{Config, OutputFormat};
use h5frame::output::render_to_stdout;
use h5frame::parser::load_table;
use h5frame::writer::{write_tables, TableEntry};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Write a numeric table into an HDF5 container, one group per path
#[derive(Parser, Debug)]
#[command(name = "h5frame")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Container file to create
    #[arg(default_value = "dataframe.h5")]
    output: PathBuf,

    /// Number of synthetic columns to generate
    #[arg(long, default_value_t = 62)]
    cols: usize,

    /// Number of synthetic rows to generate
    #[arg(long, default_value_t = 1000)]
    rows: usize,

    /// Maximum column-name length, in characters
    #[arg(long, default_value_t = 5)]
    max_name_len: usize,

    /// Group path(s) to write the table under (comma-separated)
    #[arg(short, long, value_delimiter = ',', default_values_t = ["df".to_string(), "df_sum".to_string()])]
    group: Vec<String>,

    /// Load the table from a CSV file instead of generating one
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output format for the write summary
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::new(cli.output)
        .with_dimensions(cli.cols, cli.rows)
        .with_max_name_len(cli.max_name_len)
        .with_groups(cli.group)
        .with_output_format(cli.format.into());
    if let Some(input) = cli.input {
        config = config.with_input(input);
    }

    let table = match &config.input {
        Some(input) => load_table(input, config.max_name_len)
            .with_context(|| format!("Failed to load table from {}", input.display()))?,
        None => build_table(config.columns, config.rows, config.max_name_len)
            .context("Failed to build synthetic table")?,
    };

    let entries: Vec<TableEntry<'_>> = config
        .groups
        .iter()
        .map(|group| TableEntry::new(group.clone(), &table))
        .collect();

    let summary = write_tables(&config.output, &entries)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    render_to_stdout(&summary, config.output_format)?;
    Ok(())
}
