//! Documentation Markup Ports

use crate::value_objects::Document;

/// Parses raw comment text into a [`Document`]
pub trait MarkupParser: Send + Sync {
    /// Parse normalised comment text. Never fails: unrecognised input
    /// becomes paragraph text.
    fn parse(&self, text: &str) -> Document;
}

/// Converts a parsed [`Document`] into Markdown text
///
/// Implementations are pure: the same document always renders to the
/// same text.
pub trait MarkdownRenderer: Send + Sync {
    /// Render a document; the output ends with a newline unless empty
    fn render(&self, document: &Document) -> String;
}
