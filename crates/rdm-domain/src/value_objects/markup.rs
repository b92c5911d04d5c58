//! Parsed documentation comment markup
//!
//! A [`Document`] is the structured form of one comment's raw text. It is
//! produced by a [`MarkupParser`](crate::ports::MarkupParser) and consumed by
//! a [`MarkdownRenderer`](crate::ports::MarkdownRenderer). Inline markup
//! (code spans, emphasis, links) stays in the text and is the renderer's
//! concern.

use serde::{Deserialize, Serialize};

/// Structured form of a documentation comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level blocks in source order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a document from its blocks
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// True when the comment contained nothing renderable
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// One block-level element of a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// `= Title` style heading; level is the number of `=` signs
    Heading {
        /// Heading depth, 1 to 6
        level: u8,
        /// Heading text with inline markup
        text: String,
    },
    /// Run of text lines joined with single spaces
    Paragraph(String),
    /// Indented literal text, relative indentation preserved
    Verbatim(String),
    /// Horizontal rule (`---`)
    Rule,
    /// List of items sharing one kind
    List {
        /// Marker style of every item in the list
        kind: ListKind,
        /// Items in source order
        items: Vec<ListItem>,
    },
}

/// List marker style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListKind {
    /// `*` or `-` items
    Bullet,
    /// `1.` items
    Number,
    /// `[label] body` items
    Label,
    /// `label:: body` items
    Note,
}

/// One list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Term of label and note items
    pub label: Option<String>,
    /// Item body
    pub blocks: Vec<Block>,
}

impl ListItem {
    /// Unlabelled item (bullet and number lists)
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            label: None,
            blocks,
        }
    }

    /// Labelled item (label and note lists)
    pub fn labelled<S: Into<String>>(label: S, blocks: Vec<Block>) -> Self {
        Self {
            label: Some(label.into()),
            blocks,
        }
    }
}
