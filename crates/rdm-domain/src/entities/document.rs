//! Output Document Entity

use std::path::PathBuf;

/// A rendered reference page
///
/// Created by the document writer, persisted immediately and then only
/// kept around for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    /// Target path under the output base directory
    pub path: PathBuf,
    /// Composed Markdown text
    pub body: String,
    /// Source file the module was first collected from (diagnostics only)
    pub source: Option<PathBuf>,
}
