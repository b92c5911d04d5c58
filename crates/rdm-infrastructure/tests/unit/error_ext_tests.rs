//! Error context extension tests

use rdm_domain::Error;
use rdm_infrastructure::ErrorContext;
use std::io;

fn failing() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
}

#[test]
fn test_io_context() {
    let err = failing().io_context("Failed to read lib/set.rb").unwrap_err();
    match err {
        Error::Io { message, source } => {
            assert_eq!(message, "Failed to read lib/set.rb: gone");
            assert!(source.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_config_context() {
    let err = failing().config_context("Bad config").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("Bad config: gone"));
}

#[test]
fn test_context_and_lazy_context() {
    assert!(matches!(failing().context("Plain").unwrap_err(), Error::Internal { .. }));
    let err = failing().with_context(|| format!("Lazy {}", 42)).unwrap_err();
    assert!(err.to_string().contains("Lazy 42: gone"));
}

#[test]
fn test_ok_passes_through() {
    let value: Result<u8, io::Error> = Ok(7);
    assert_eq!(value.io_context("unused").unwrap(), 7);
}
