//! Comment Location Entity

use crate::ports::MarkupParser;
use crate::value_objects::Document;
use once_cell::unsync::OnceCell;
use std::path::{Path, PathBuf};

/// One documentation block attached to one declaration site
///
/// The raw text is normalised comment text (comment markers stripped,
/// flushed left). The parsed [`Document`] is computed on first use and
/// cached, so modules whose comment is never selected are never parsed.
#[derive(Debug, Clone)]
pub struct CommentLocation {
    /// Normalised comment text; empty when the declaration had no comment
    pub text: String,
    /// File holding the declaration
    pub file: Option<PathBuf>,
    /// 1-based line of the declaration
    pub line: usize,
    document: OnceCell<Document>,
}

impl CommentLocation {
    /// Comment with no recorded location
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            file: None,
            line: 0,
            document: OnceCell::new(),
        }
    }

    /// Record where the documented declaration lives
    pub fn at<P: AsRef<Path>>(mut self, file: P, line: usize) -> Self {
        self.file = Some(file.as_ref().to_path_buf());
        self.line = line;
        self
    }

    /// True when there is no documentation text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length of the raw text in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Parsed document, parsing the raw text on first access
    pub fn document(&self, parser: &dyn MarkupParser) -> &Document {
        self.document.get_or_init(|| parser.parse(&self.text))
    }

    /// True once [`document`](Self::document) has been called
    pub fn is_parsed(&self) -> bool {
        self.document.get().is_some()
    }
}
