//! Table and TableShape data structures

use indexmap::IndexSet;
use serde::Serialize;

use crate::error::StoreError;

/// Declared table dimensions: column count, row count, and the maximum
/// column-name length in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableShape {
    /// Number of columns
    pub columns: usize,
    /// Number of rows
    pub rows: usize,
    /// Maximum column-name length, in characters
    pub max_name_len: usize,
}

impl TableShape {
    /// Create a new shape
    pub fn new(columns: usize, rows: usize, max_name_len: usize) -> Self {
        Self {
            columns,
            rows,
            max_name_len,
        }
    }
}

impl std::fmt::Display for TableShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} cols x {} rows (name len <= {})",
            self.columns, self.rows, self.max_name_len
        )
    }
}

/// An in-memory numeric table: ordered column names, an unsigned row index,
/// and a column-major f64 payload.
///
/// A Table is constructed once, validated up front, and never mutated; the
/// writer takes it by shared reference. Its only persistent identity is the
/// group path it is written under.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    index: Vec<u64>,
    data: Vec<Vec<f64>>,
    max_name_len: usize,
}

impl Table {
    /// Create a table, validating the shape invariants.
    ///
    /// `data` is column-major: one inner vector per column, each holding one
    /// value per index entry. Fails with `InvalidShape` if the table is
    /// empty, the payload is not rectangular, column names are duplicated or
    /// empty, or any name exceeds `max_name_len` characters.
    pub fn new(
        columns: Vec<String>,
        index: Vec<u64>,
        data: Vec<Vec<f64>>,
        max_name_len: usize,
    ) -> Result<Self, StoreError> {
        if columns.is_empty() {
            return Err(StoreError::invalid_shape("table must have at least one column"));
        }
        if index.is_empty() {
            return Err(StoreError::invalid_shape("table must have at least one row"));
        }
        if data.len() != columns.len() {
            return Err(StoreError::invalid_shape(format!(
                "payload has {} columns but {} names were given",
                data.len(),
                columns.len()
            )));
        }
        for (name, values) in columns.iter().zip(&data) {
            if values.len() != index.len() {
                return Err(StoreError::invalid_shape(format!(
                    "column '{}' has {} rows but the index has {}",
                    name,
                    values.len(),
                    index.len()
                )));
            }
        }

        let mut seen = IndexSet::with_capacity(columns.len());
        for name in &columns {
            if name.is_empty() {
                return Err(StoreError::invalid_shape("column names must be non-empty"));
            }
            if name.chars().count() > max_name_len {
                return Err(StoreError::invalid_shape(format!(
                    "column name '{}' exceeds the maximum length of {}",
                    name, max_name_len
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(StoreError::invalid_shape(format!(
                    "duplicate column name '{}'",
                    name
                )));
            }
        }

        Ok(Self {
            columns,
            index,
            data,
            max_name_len,
        })
    }

    /// Column names, in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row index values
    pub fn index(&self) -> &[u64] {
        &self.index
    }

    /// Payload values for one column
    pub fn column_values(&self, idx: usize) -> Option<&[f64]> {
        self.data.get(idx).map(|v| v.as_slice())
    }

    /// Column-major payload
    pub fn data(&self) -> &[Vec<f64>] {
        &self.data
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.index.len()
    }

    /// The table's actual shape
    pub fn shape(&self) -> TableShape {
        TableShape::new(self.column_count(), self.row_count(), self.max_name_len)
    }
}
