//! Domain Port Interfaces
//!
//! Contracts between the pipeline and its external collaborators. The
//! pipeline only talks to these traits; `rdm-providers` implements them.
//!
//! | Port | Implemented by |
//! |------|----------------|
//! | [`ModuleTreeParser`] | tree-sitter Ruby parser |
//! | [`MarkupParser`] | RDoc markup parser |
//! | [`MarkdownRenderer`] | RDoc-to-Markdown renderer |

/// Documentation markup ports
pub mod markup;
/// Source parsing port
pub mod parser;

pub use markup::{MarkdownRenderer, MarkupParser};
pub use parser::{ModuleTreeParser, ParserOptions, Verbosity};
