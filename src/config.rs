//! Configuration handling for h5frame

use std::path::PathBuf;

/// Output format for the write summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration for a single write run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the container file to create
    pub output: PathBuf,
    /// Number of synthetic columns to generate
    pub columns: usize,
    /// Number of synthetic rows to generate
    pub rows: usize,
    /// Maximum column-name length, in characters
    pub max_name_len: usize,
    /// Top-level group paths to write the table under, in order
    pub groups: Vec<String>,
    /// Optional CSV file to load the table from instead of generating one
    pub input: Option<PathBuf>,
    /// Output format for the write summary
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        // Defaults reproduce the original demo: a 62x1000 table written under
        // /df and /df_sum in dataframe.h5.
        Self {
            output: PathBuf::from("dataframe.h5"),
            columns: 62,
            rows: 1000,
            max_name_len: 5,
            groups: vec!["df".to_string(), "df_sum".to_string()],
            input: None,
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Create a new Config writing to the given container path
    pub fn new(output: PathBuf) -> Self {
        Self {
            output,
            ..Default::default()
        }
    }

    /// Set the synthetic table dimensions
    pub fn with_dimensions(mut self, columns: usize, rows: usize) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    /// Set the maximum column-name length
    pub fn with_max_name_len(mut self, max_name_len: usize) -> Self {
        self.max_name_len = max_name_len;
        self
    }

    /// Set the group paths to write under
    pub fn with_groups(mut self, groups: Vec<String>) -> Self {
        self.groups = groups;
        self
    }

    /// Load the table from a CSV file instead of generating one
    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    /// Set the summary output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}
