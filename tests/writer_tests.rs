//! Integration tests for the hierarchical table writer, reading results back
//! through the same HDF5 backend.

use hdf5::types::VarLenUnicode;
use ndarray::Array2;
use tempfile::TempDir;

use h5frame::builder::build_table;
use h5frame::error::{DatasetFailure, StoreError};
use h5frame::model::{Table, TableShape};
use h5frame::writer::{write_tables, TableEntry};

fn temp_container(dir: &TempDir, name: &str) -> std::path::PathBuf {
    dir.path().join(name)
}

fn read_columns(file: &hdf5::File, group: &str) -> Vec<String> {
    file.dataset(&format!("{}/data/columns", group))
        .unwrap()
        .read_raw::<VarLenUnicode>()
        .unwrap()
        .into_iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn round_trip_preserves_table() {
    let dir = TempDir::new().unwrap();
    let path = temp_container(&dir, "round_trip.h5");
    let table = build_table(6, 10, 5).unwrap();

    let summary = write_tables(&path, &[TableEntry::new("df", &table)]).unwrap();
    assert_eq!(summary.entries.len(), 1);
    assert_eq!(summary.entries[0].data_path, "df/data");

    let file = hdf5::File::open(&path).unwrap();

    assert_eq!(read_columns(&file, "df"), table.columns());

    let index = file
        .dataset("df/data/index")
        .unwrap()
        .read_1d::<u64>()
        .unwrap();
    assert_eq!(index.as_slice().unwrap(), table.index());

    let values = file
        .dataset("df/data/values")
        .unwrap()
        .read_2d::<f64>()
        .unwrap();
    let expected = Array2::from_shape_fn((6, 10), |(i, j)| table.data()[i][j]);
    assert_eq!(values, expected);
}

#[test]
fn group_attributes_are_stamped() {
    let dir = TempDir::new().unwrap();
    let path = temp_container(&dir, "attrs.h5");
    let table = build_table(4, 3, 5).unwrap();

    write_tables(&path, &[TableEntry::new("df", &table)]).unwrap();

    let file = hdf5::File::open(&path).unwrap();
    let group = file.group("df").unwrap();
    let read = |name: &str| {
        group
            .attr(name)
            .unwrap()
            .read_scalar::<VarLenUnicode>()
            .unwrap()
            .to_string()
    };
    assert_eq!(read("CLASS"), "GROUP");
    assert_eq!(read("VERSION"), "1.0");
    assert_eq!(read("tool"), "h5frame");
    assert!(!read("created").is_empty());
}

#[test]
fn two_groups_are_independent() {
    let dir = TempDir::new().unwrap();
    let path = temp_container(&dir, "two_groups.h5");
    let raw = build_table(6, 10, 5).unwrap();
    let summed = build_table(4, 3, 5).unwrap();

    write_tables(
        &path,
        &[
            TableEntry::new("df", &raw),
            TableEntry::new("/df_sum", &summed),
        ],
    )
    .unwrap();

    let file = hdf5::File::open(&path).unwrap();
    assert_eq!(read_columns(&file, "df"), raw.columns());
    assert_eq!(read_columns(&file, "df_sum"), summed.columns());

    let values = file
        .dataset("df_sum/data/values")
        .unwrap()
        .read_2d::<f64>()
        .unwrap();
    assert_eq!(values.dim(), (4, 3));
}

#[test]
fn duplicate_group_path_fails_and_keeps_earlier_group() {
    let dir = TempDir::new().unwrap();
    let path = temp_container(&dir, "duplicate.h5");
    let table = build_table(4, 3, 5).unwrap();

    let err = write_tables(
        &path,
        &[TableEntry::new("df", &table), TableEntry::new("df", &table)],
    )
    .unwrap_err();
    assert!(matches!(err, StoreError::GroupCreate { .. }));

    // The first group was fully written before the failure.
    let file = hdf5::File::open(&path).unwrap();
    assert_eq!(read_columns(&file, "df"), table.columns());
}

#[test]
fn shape_mismatch_fails_before_any_bytes() {
    let dir = TempDir::new().unwrap();
    let path = temp_container(&dir, "mismatch.h5");
    let table = build_table(4, 3, 5).unwrap();

    let entry =
        TableEntry::new("df", &table).with_declared_shape(TableShape::new(4, 5, 5));
    let err = write_tables(&path, &[entry]).unwrap_err();
    match err {
        StoreError::DatasetWrite {
            source: DatasetFailure::ShapeMismatch { declared, actual },
            ..
        } => {
            assert_eq!(declared.rows, 5);
            assert_eq!(actual.rows, 3);
        }
        other => panic!("expected shape mismatch, got {:?}", other),
    }

    // The group exists but no dataframe node was committed under it.
    let file = hdf5::File::open(&path).unwrap();
    assert!(file.group("df").is_ok());
    assert!(file.group("df/data").is_err());
}

#[test]
fn four_identical_columns_round_trip_exactly() {
    let dir = TempDir::new().unwrap();
    let path = temp_container(&dir, "exact.h5");
    let columns = ["open", "high", "low", "close"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let table = Table::new(columns, vec![0, 1, 2], vec![vec![1.0, 2.0, 3.0]; 4], 5).unwrap();

    write_tables(&path, &[TableEntry::new("df", &table)]).unwrap();

    let file = hdf5::File::open(&path).unwrap();
    let values = file
        .dataset("df/data/values")
        .unwrap()
        .read_2d::<f64>()
        .unwrap();
    assert_eq!(values.dim(), (4, 3));
    for col in values.rows() {
        assert_eq!(col.as_slice().unwrap(), &[1.0, 2.0, 3.0]);
    }
}

#[test]
fn unwritable_path_is_container_open_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("out.h5");
    let table = build_table(4, 3, 5).unwrap();

    let err = write_tables(&path, &[TableEntry::new("df", &table)]).unwrap_err();
    assert!(matches!(err, StoreError::ContainerOpen { .. }));
}

#[test]
fn malformed_group_path_is_group_create_error() {
    let dir = TempDir::new().unwrap();
    let path = temp_container(&dir, "malformed.h5");
    let table = build_table(4, 3, 5).unwrap();

    let err = write_tables(&path, &[TableEntry::new("/df/nested", &table)]).unwrap_err();
    assert!(matches!(err, StoreError::GroupCreate { .. }));
}
