//! Synthetic table builder
//!
//! Generates the deterministic demo table: fixed OHLC column names followed
//! by moving-average columns, a dense row index, and a payload derived from
//! the cell position so runs are fully reproducible.

use crate::error::StoreError;
use crate::model::Table;

/// Base value for every payload cell; cell (i, j) is BASE + i + j
const BASE: f64 = 25530.0;

/// The first four column names are fixed domain labels
const FIXED_NAMES: [&str; 4] = ["open", "high", "low", "close"];

/// Build a synthetic `columns x rows` table.
///
/// Column names are `open, high, low, close`, then `ma{i-2}` for column
/// index i >= 4. The index is the dense sequence `0..rows`. Fails with
/// `InvalidShape` if either dimension is zero or a generated name would
/// exceed `max_name_len` characters.
pub fn build_table(columns: usize, rows: usize, max_name_len: usize) -> Result<Table, StoreError> {
    if columns == 0 || rows == 0 {
        return Err(StoreError::invalid_shape(format!(
            "dimensions must be positive, got {} cols x {} rows",
            columns, rows
        )));
    }

    let names: Vec<String> = (0..columns).map(column_name).collect();
    let index: Vec<u64> = (0..rows as u64).collect();
    let data: Vec<Vec<f64>> = (0..columns)
        .map(|i| (0..rows).map(|j| BASE + (i + j) as f64).collect())
        .collect();

    Table::new(names, index, data, max_name_len)
}

/// Name for the column at the given position
fn column_name(i: usize) -> String {
    match FIXED_NAMES.get(i) {
        Some(name) => name.to_string(),
        None => format!("ma{}", i - 2),
    }
}
