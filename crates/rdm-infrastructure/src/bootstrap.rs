//! Pipeline bootstrap
//!
//! Builds a [`DocumentationPipeline`] from configuration, wiring the
//! tree-sitter Ruby parser and the RDoc markup providers into the
//! application stages.

use crate::config::AppConfig;
use crate::logging::parse_log_level;
use rdm_application::{DocumentWriter, DocumentationPipeline, LibraryNameResolver, RootModuleFilter};
use rdm_domain::ports::{ParserOptions, Verbosity};
use rdm_providers::{RdocMarkupParser, RdocToMarkdown, RubyTreeParser};
use std::sync::Arc;
use tracing::Level;

/// Parser options matching the configured log level
///
/// The parser stays quiet unless debug output was asked for.
pub fn parser_options(config: &AppConfig) -> ParserOptions {
    let verbose = parse_log_level(&config.logging.level).is_ok_and(|level| level >= Level::DEBUG);
    ParserOptions {
        verbosity: if verbose {
            Verbosity::Normal
        } else {
            Verbosity::Quiet
        },
    }
}

/// Pipeline wired with the default providers
pub fn build_pipeline(config: &AppConfig) -> DocumentationPipeline {
    DocumentationPipeline::new(
        Arc::new(RubyTreeParser::new(parser_options(config))),
        LibraryNameResolver::new(&config.library.root),
        RootModuleFilter::new(config.library.namespaces_with_submodules.iter().cloned()),
        DocumentWriter::new(
            config.output.writer_config(),
            Arc::new(RdocMarkupParser::new()),
            Arc::new(RdocToMarkdown::new()),
        ),
    )
}
