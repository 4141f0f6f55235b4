//! CSV table loader

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::model::Table;

use super::TableParser;

/// Parser for all-numeric CSV files: the header row gives the column names,
/// every body cell must be a float, and the index is the dense row ordinal.
pub struct CsvParser;

impl TableParser for CsvParser {
    fn parse(&self, path: &Path, max_name_len: usize) -> Result<Table> {
        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .context("Failed to read CSV headers")?
            .clone();
        let columns: Vec<String> = headers.iter().map(|name| name.trim().to_string()).collect();
        if columns.is_empty() {
            bail!("CSV file has no columns");
        }

        // Rows arrive row-major; the table payload is column-major.
        let mut data: Vec<Vec<f64>> = vec![Vec::new(); columns.len()];
        let mut rows = 0u64;
        for (row_num, result) in csv_reader.records().enumerate() {
            // +2 for 1-indexing and the header row
            let record =
                result.with_context(|| format!("Failed to read CSV row {}", row_num + 2))?;
            if record.len() != columns.len() {
                bail!(
                    "CSV row {} has {} cells, expected {}",
                    row_num + 2,
                    record.len(),
                    columns.len()
                );
            }
            for (col, cell) in record.iter().enumerate() {
                let value: f64 = cell.trim().parse().with_context(|| {
                    format!(
                        "CSV row {} column '{}': not a number: '{}'",
                        row_num + 2,
                        columns[col],
                        cell
                    )
                })?;
                data[col].push(value);
            }
            rows += 1;
        }

        let index: Vec<u64> = (0..rows).collect();
        let table = Table::new(columns, index, data, max_name_len)
            .with_context(|| format!("Invalid table in {}", path.display()))?;
        Ok(table)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "csv" | "tsv" | "txt")
    }
}
