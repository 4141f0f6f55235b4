//! h5frame - Write tabular numeric data into HDF5 group/dataset hierarchies
//!
//! Builds (or loads from CSV) an in-memory numeric table and persists it into
//! a single HDF5 container file, one named group per table, with provenance
//! attributes stamped on each group.

pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod writer;

pub use config::Config;
pub use error::StoreError;
pub use model::{Table, TableShape};
pub use writer::{write_tables, TableEntry, WriteSummary};
