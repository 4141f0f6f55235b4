//! Parser layer for loading tables from files

mod csv;

use std::path::Path;

use anyhow::{bail, Result};

use crate::model::Table;

pub use self::csv::CsvParser;

/// Trait for loading a numeric table from a file
pub trait TableParser {
    /// Parse a file and return a Table
    fn parse(&self, path: &Path, max_name_len: usize) -> Result<Table>;

    /// Check if this parser can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Load a table from a file, dispatching on the extension
pub fn load_table(path: &Path, max_name_len: usize) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let parser = CsvParser;
    if !parser.supports_extension(&ext) {
        bail!(
            "Unsupported input format: {}",
            if ext.is_empty() { "unknown" } else { ext.as_str() }
        );
    }
    parser.parse(path, max_name_len)
}
