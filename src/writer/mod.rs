//! Hierarchical table writer
//!
//! Persists tables into a single HDF5 container: one top-level group per
//! entry, provenance attributes on the group, and the table's columns, index,
//! and payload as datasets under `<group>/data`. Create-only, single pass; no
//! append or read-back.

mod attrs;

use std::path::{Path, PathBuf};

use hdf5::types::VarLenUnicode;
use hdf5::Group;
use ndarray::Array2;
use serde::Serialize;

use crate::error::{DatasetFailure, StoreError};
use crate::model::{Table, TableShape};

pub use attrs::GroupAttrs;

/// One table to be written, paired with the group path to write it under
#[derive(Debug)]
pub struct TableEntry<'a> {
    /// Top-level group path, with or without a leading slash
    pub group_path: String,
    /// The table to persist
    pub table: &'a Table,
    /// Declared dimensions; must match the table's actual shape
    pub declared: TableShape,
}

impl<'a> TableEntry<'a> {
    /// Create an entry whose declared shape is the table's actual shape
    pub fn new(group_path: impl Into<String>, table: &'a Table) -> Self {
        Self {
            group_path: group_path.into(),
            table,
            declared: table.shape(),
        }
    }

    /// Override the declared shape (the writer validates it against the
    /// table before writing)
    pub fn with_declared_shape(mut self, declared: TableShape) -> Self {
        self.declared = declared;
        self
    }
}

/// Record of what a successful run wrote
#[derive(Debug, Serialize)]
pub struct WriteSummary {
    /// The container file that was created
    pub container: PathBuf,
    /// One record per written entry, in write order
    pub entries: Vec<EntrySummary>,
}

/// Record of one written entry
#[derive(Debug, Serialize)]
pub struct EntrySummary {
    /// Top-level group name
    pub group: String,
    /// Path of the dataframe node within the container
    pub data_path: String,
    /// Dimensions that were written
    pub shape: TableShape,
}

/// Write the given entries, in order, into a new container file at `path`.
///
/// The container is created (truncating any existing file) and closed exactly
/// once, on every exit path. Each entry gets a fresh top-level group; group
/// handles are scoped to the entry and released even when a step fails. The
/// first error aborts the run: there is no retry and no partial-success mode,
/// and a container left behind by a failed run should be treated as invalid.
pub fn write_tables(path: &Path, entries: &[TableEntry<'_>]) -> Result<WriteSummary, StoreError> {
    let file = hdf5::File::create(path).map_err(|source| StoreError::ContainerOpen {
        path: path.to_path_buf(),
        source,
    })?;

    match write_entries(&file, entries) {
        Ok(written) => {
            file.close().map_err(|source| StoreError::HandleClose {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(WriteSummary {
                container: path.to_path_buf(),
                entries: written,
            })
        }
        Err(err) => {
            // Best-effort release; a close failure must not mask the
            // primary error.
            let _ = file.close();
            Err(err)
        }
    }
}

fn write_entries(
    file: &hdf5::File,
    entries: &[TableEntry<'_>],
) -> Result<Vec<EntrySummary>, StoreError> {
    let mut written = Vec::with_capacity(entries.len());
    for entry in entries {
        written.push(write_entry(file, entry)?);
    }
    Ok(written)
}

/// Write one entry: group, attributes, then the dataframe node. The group
/// handle lives only for this call, so it is released on every exit path.
fn write_entry(file: &hdf5::File, entry: &TableEntry<'_>) -> Result<EntrySummary, StoreError> {
    let name = normalize_group_path(&entry.group_path)?;

    let group = file
        .create_group(&name)
        .map_err(|source| StoreError::GroupCreate {
            path: name.clone(),
            source,
        })?;

    GroupAttrs::current()
        .apply(&group)
        .map_err(|source| StoreError::AttributeWrite {
            path: name.clone(),
            source,
        })?;

    let data_path = format!("{}/data", name);
    let actual = entry.table.shape();
    if entry.declared != actual {
        // Validate before any dataset bytes are written.
        return Err(StoreError::DatasetWrite {
            path: data_path,
            source: DatasetFailure::ShapeMismatch {
                declared: entry.declared,
                actual,
            },
        });
    }

    write_dataframe(&group, entry.table).map_err(|source| StoreError::DatasetWrite {
        path: data_path.clone(),
        source: DatasetFailure::Backend(source),
    })?;

    Ok(EntrySummary {
        group: name,
        data_path,
        shape: actual,
    })
}

/// Write the dataframe node: a `data` subgroup holding the `columns`,
/// `index`, and `values` datasets
fn write_dataframe(group: &Group, table: &Table) -> hdf5::Result<()> {
    let data = group.create_group("data")?;

    let names = table
        .columns()
        .iter()
        .map(|n| n.parse::<VarLenUnicode>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| hdf5::Error::Internal(e.to_string()))?;
    data.new_dataset::<VarLenUnicode>()
        .shape(table.column_count())
        .create("columns")?
        .write_raw(&names)?;

    data.new_dataset::<u64>()
        .shape(table.row_count())
        .create("index")?
        .write_raw(table.index())?;

    let shape = (table.column_count(), table.row_count());
    let values = Array2::from_shape_fn(shape, |(i, j)| table.data()[i][j]);
    data.new_dataset::<f64>()
        .shape(shape)
        .create("values")?
        .write(&values)?;

    Ok(())
}

/// A group path must name a single top-level group, optionally with a
/// leading slash
fn normalize_group_path(raw: &str) -> Result<String, StoreError> {
    let name = raw.strip_prefix('/').unwrap_or(raw);
    if name.is_empty() || name.contains('/') {
        return Err(StoreError::GroupCreate {
            path: raw.to_string(),
            source: hdf5::Error::Internal(
                "group path must be a single non-empty top-level name".to_string(),
            ),
        });
    }
    Ok(name.to_string())
}
