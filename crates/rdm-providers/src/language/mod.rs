//! Source language parsers
//!
//! Only Ruby is supported: the parser walks tree-sitter-ruby syntax trees
//! for `class` and `module` declarations and attaches the comment block
//! directly above each declaration.

/// Declaration comment collection and normalisation
pub mod comments;
/// tree-sitter-ruby module-tree parser
pub mod ruby;

pub use comments::{CommentIndex, normalize_comment};
pub use ruby::RubyTreeParser;
