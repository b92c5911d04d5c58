//! Source expansion tests

use rdm_domain::Error;
use rdm_infrastructure::sources::{expand_sources, ruby_files};
use std::fs;

#[test]
fn test_directories_expand_to_sorted_ruby_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("net")).unwrap();
    fs::write(dir.path().join("set.rb"), "").unwrap();
    fs::write(dir.path().join("abbrev.rb"), "").unwrap();
    fs::write(dir.path().join("net/http.rb"), "").unwrap();
    fs::write(dir.path().join("README.md"), "").unwrap();

    let files = ruby_files(dir.path()).unwrap();
    let relative: Vec<_> = files
        .iter()
        .map(|f| f.strip_prefix(dir.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        relative,
        vec![
            std::path::PathBuf::from("abbrev.rb"),
            std::path::PathBuf::from("net/http.rb"),
            std::path::PathBuf::from("set.rb"),
        ]
    );
}

#[test]
fn test_files_are_kept_in_argument_order_once() {
    let dir = tempfile::tempdir().unwrap();
    let b = dir.path().join("b.rb");
    let a = dir.path().join("a.rb");
    fs::write(&b, "").unwrap();
    fs::write(&a, "").unwrap();

    let sources = expand_sources(&[b.clone(), dir.path().to_path_buf()]).unwrap();
    assert_eq!(sources, vec![b, a]);
}

#[test]
fn test_missing_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = expand_sources(&[dir.path().join("nope.rb")]);
    assert!(matches!(result, Err(Error::Io { .. })));
}
