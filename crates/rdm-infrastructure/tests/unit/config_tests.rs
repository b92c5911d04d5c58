//! Configuration loading and validation tests
//!
//! Tests that mutate environment variables are ignored by default:
//!
//! ```bash
//! cargo test -p rdm-infrastructure --test unit config -- --test-threads=1 --ignored
//! ```

use rdm_domain::Error;
use rdm_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader, validate_app_config};
use std::env;
use std::path::{Path, PathBuf};

/// Prefix nobody sets, so the developer's environment cannot leak in
const ISOLATED_PREFIX: &str = "RDM_UNIT_TEST";

fn loader(path: &Path) -> ConfigLoader {
    ConfigLoader::new()
        .with_config_path(path)
        .with_env_prefix(ISOLATED_PREFIX)
}

fn write_config(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("rdm.toml");
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.output.dir, PathBuf::from("out"));
    assert_eq!(config.output.extension, "md");
    assert_eq!(config.output.reference_base, "https://docs.ruby-lang.org/en/master");
    assert_eq!(config.library.root, PathBuf::from("ruby/lib"));
    assert_eq!(config.library.namespaces_with_submodules, vec!["Net", "IO"]);
    assert_eq!(config.logging.level, "info");
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_toml_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[output]
dir = "docs"
reference_base = "https://example.org/ref"

[library]
namespaces_with_submodules = ["Net", "IO", "Gem"]
"#,
    );

    let config = loader(&path).load().unwrap();
    assert_eq!(config.output.dir, PathBuf::from("docs"));
    assert_eq!(config.output.reference_base, "https://example.org/ref");
    assert_eq!(config.output.extension, "md");
    assert_eq!(config.library.namespaces_with_submodules, vec!["Net", "IO", "Gem"]);
    assert_eq!(config.library.root, PathBuf::from("ruby/lib"));
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = loader(&dir.path().join("absent.toml")).load().unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_file_values_fail_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "[output]\nextension = \"\"\n");
    assert!(matches!(loader(&path).load(), Err(Error::Configuration { .. })));
}

#[test]
fn test_malformed_toml_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "[output\ndir = ");
    assert!(matches!(loader(&path).load(), Err(Error::Configuration { .. })));
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.toml");
    let config = ConfigBuilder::new()
        .with_output_dir("site/docs")
        .with_reference_base("https://example.org")
        .with_namespaces(["Net"])
        .build();

    ConfigLoader::new().save_to_file(&config, &path).unwrap();
    let reloaded = loader(&path).load().unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_validation_rules() {
    let empty_dir = ConfigBuilder::new().with_output_dir("").build_validated();
    assert!(empty_dir.is_err());

    let mut bad_extension = AppConfig::default();
    bad_extension.output.extension = "md/x".to_string();
    assert!(validate_app_config(&bad_extension).is_err());

    let nested = ConfigBuilder::new().with_namespaces(["Net::HTTP"]).build_validated();
    assert!(nested.is_err());

    let blank = ConfigBuilder::new().with_namespaces([""]).build_validated();
    assert!(blank.is_err());

    let mut bad_level = AppConfig::default();
    bad_level.logging.level = "loud".to_string();
    assert!(matches!(
        validate_app_config(&bad_level),
        Err(Error::Configuration { .. })
    ));

    let no_namespaces = ConfigBuilder::new()
        .with_namespaces(Vec::<String>::new())
        .build_validated();
    assert!(no_namespaces.is_ok());
}

#[test]
fn test_writer_config_trims_trailing_slash() {
    let config = ConfigBuilder::new()
        .with_reference_base("https://example.org/ref/")
        .build();
    assert_eq!(config.output.writer_config().reference_base, "https://example.org/ref");
}

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "[output]\ndir = \"from-file\"\n");
    set_env("RDM_ENV_TEST__OUTPUT__DIR", "from-env");

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("RDM_ENV_TEST")
        .load()
        .unwrap();

    remove_env("RDM_ENV_TEST__OUTPUT__DIR");
    assert_eq!(config.output.dir, PathBuf::from("from-env"));
}
