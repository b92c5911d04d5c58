//! # rdm - Provider Implementations
//!
//! Implementations of the ports defined in `rdm-domain`.
//!
//! | Category | Port | Implementation |
//! |----------|------|----------------|
//! | Language | `ModuleTreeParser` | [`RubyTreeParser`] (tree-sitter-ruby) |
//! | Markup | `MarkupParser` | [`RdocMarkupParser`] |
//! | Markup | `MarkdownRenderer` | [`RdocToMarkdown`] |
//!
//! ## Usage
//!
//! ```ignore
//! use rdm_domain::ports::{ModuleTreeParser, ParserOptions};
//! use rdm_providers::RubyTreeParser;
//!
//! let corpus = RubyTreeParser::new(ParserOptions::quiet()).parse_files(&paths)?;
//! ```

// Re-export rdm-domain types commonly used with providers
pub use rdm_domain::error::{Error, Result};
pub use rdm_domain::ports::{MarkdownRenderer, MarkupParser, ModuleTreeParser};

/// Provider-specific constants
pub mod constants;

/// Source language parsers
///
/// Implements `ModuleTreeParser` for Ruby using tree-sitter.
pub mod language;

/// Documentation markup parsing and rendering
pub mod markup;

pub use language::RubyTreeParser;
pub use markup::{RdocMarkupParser, RdocToMarkdown};
