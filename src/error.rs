//! Error taxonomy for table construction and container writing

use std::path::PathBuf;

use thiserror::Error;

use crate::model::TableShape;

/// Errors produced while building tables or writing them to a container
#[derive(Debug, Error)]
pub enum StoreError {
    /// Malformed table dimensions at build time
    #[error("invalid table shape: {0}")]
    InvalidShape(String),

    /// The container file could not be created at the given path
    #[error("failed to create container file at {path}")]
    ContainerOpen {
        path: PathBuf,
        #[source]
        source: hdf5::Error,
    },

    /// A group could not be created (already exists or malformed path)
    #[error("failed to create group /{path}")]
    GroupCreate {
        path: String,
        #[source]
        source: hdf5::Error,
    },

    /// The provenance attributes could not be stamped on a group
    #[error("failed to write attributes on group /{path}")]
    AttributeWrite {
        path: String,
        #[source]
        source: hdf5::Error,
    },

    /// A dataset write failed, either up front on shape validation or in the
    /// backend
    #[error("failed to write dataset at /{path}")]
    DatasetWrite {
        path: String,
        #[source]
        source: DatasetFailure,
    },

    /// The container handle could not be released cleanly
    #[error("failed to close container file at {path}")]
    HandleClose {
        path: PathBuf,
        #[source]
        source: hdf5::Error,
    },
}

/// Cause of a dataset write failure
#[derive(Debug, Error)]
pub enum DatasetFailure {
    /// Declared dimensions did not match the table; nothing was written
    #[error("declared shape {declared} does not match table shape {actual}")]
    ShapeMismatch {
        declared: TableShape,
        actual: TableShape,
    },

    /// The storage backend rejected the write
    #[error(transparent)]
    Backend(#[from] hdf5::Error),
}

impl StoreError {
    /// Shorthand for an `InvalidShape` with a formatted message
    pub(crate) fn invalid_shape(msg: impl Into<String>) -> Self {
        StoreError::InvalidShape(msg.into())
    }
}
