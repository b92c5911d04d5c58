//! Pipeline bootstrap tests

use rdm_domain::ports::Verbosity;
use rdm_infrastructure::bootstrap::parser_options;
use rdm_infrastructure::config::LoggingConfig;
use rdm_infrastructure::{ConfigBuilder, build_pipeline};

#[test]
fn test_parser_is_quiet_by_default() {
    let config = ConfigBuilder::new().build();
    assert_eq!(parser_options(&config).verbosity, Verbosity::Quiet);

    let debug = ConfigBuilder::new()
        .with_logging(LoggingConfig {
            level: "debug".to_string(),
            ..LoggingConfig::default()
        })
        .build();
    assert_eq!(parser_options(&debug).verbosity, Verbosity::Normal);
}

#[test]
fn test_configured_pipeline_writes_pages() {
    let lib = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let source = lib.path().join("widget.rb");
    std::fs::write(&source, "# Does widget things.\nclass Widget\nend\n").unwrap();

    let config = ConfigBuilder::new()
        .with_library_root(lib.path())
        .with_output_dir(out.path())
        .with_reference_base("https://example.org/ref")
        .build();
    let report = build_pipeline(&config).run("core", &[source]).unwrap();

    assert_eq!(report.documents_written, 1);
    let page = std::fs::read_to_string(out.path().join("core/Widget.md")).unwrap();
    assert!(page.starts_with("# Widget\n\nDoes widget things.\n"));
}

#[test]
fn test_configured_namespaces_drive_root_selection() {
    let lib = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let source = lib.path().join("gem.rb");
    std::fs::write(&source, "module Gem\n  # Versions.\n  class Version\n  end\nend\n").unwrap();

    let config = ConfigBuilder::new()
        .with_library_root(lib.path())
        .with_output_dir(out.path())
        .with_namespaces(["Gem"])
        .build();
    build_pipeline(&config).run("gems", &[source]).unwrap();

    assert!(out.path().join("gems/Gem--Version.md").exists());
}
