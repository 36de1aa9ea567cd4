use std::fs;
use std::path::Path;

use leaselens::logging::open_log_file;

#[test]
fn log_file_parent_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("logs").join("leaselens.log");

    open_log_file(&path).unwrap();

    assert!(path.is_file());
}

#[test]
fn log_file_is_truncated_on_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leaselens.log");
    fs::write(&path, "old run").unwrap();

    open_log_file(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn empty_path_is_an_error() {
    assert!(open_log_file(Path::new("")).is_err());
}
