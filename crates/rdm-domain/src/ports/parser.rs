//! Module Tree Parser Port
//!
//! Parses a batch of source files into module/class trees with their
//! attached documentation comments.

use crate::entities::ParsedCorpus;
use crate::error::Result;
use std::path::PathBuf;

/// How much the parser may report while working
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// No progress or warning output
    #[default]
    Quiet,
    /// Per-file progress at debug level
    Normal,
}

/// Parser setup, fixed at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    /// Diagnostic verbosity
    pub verbosity: Verbosity,
}

impl ParserOptions {
    /// Quiet parser, the setting used by batch runs
    pub fn quiet() -> Self {
        Self {
            verbosity: Verbosity::Quiet,
        }
    }
}

/// Batch source parser
///
/// # Example
///
/// ```ignore
/// use rdm_domain::ports::ModuleTreeParser;
///
/// let corpus = parser.parse_files(&[PathBuf::from("lib/set.rb")])?;
/// for context in &corpus.contexts {
///     println!("{}: {} declarations", context.source.display(), context.modules.len());
/// }
/// ```
pub trait ModuleTreeParser: Send + Sync {
    /// Parse every path into one corpus with a fresh symbol store
    ///
    /// Returns one context per path, in input order. Fails on the first
    /// unreadable or syntactically invalid file; no partial corpus is
    /// returned.
    fn parse_files(&self, paths: &[PathBuf]) -> Result<ParsedCorpus>;

    /// Short identifier of the implementation, for diagnostics
    fn provider_name(&self) -> &str;
}
