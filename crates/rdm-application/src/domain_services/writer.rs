//! Document composition and output
//!
//! For every retained module the longest non-empty comment is rendered to
//! Markdown, wrapped in a title and a reference back-link, and written to
//! `<output_dir>/<category>/<Full--Name>.<extension>`.

use rdm_domain::constants::{
    DEFAULT_DOCUMENT_EXTENSION, DEFAULT_OUTPUT_DIR, DEFAULT_REFERENCE_BASE, REFERENCE_LINK_SUFFIX,
    REFERENCE_PAGE_EXTENSION,
};
use rdm_domain::error::{Error, Result};
use rdm_domain::ports::{MarkdownRenderer, MarkupParser};
use rdm_domain::{CommentLocation, FullName, ModuleEntity, OutputDocument};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Where and how documents are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterConfig {
    /// Base directory of every category
    pub output_dir: PathBuf,
    /// URL the reference back-links point under
    pub reference_base: String,
    /// Document file extension, without the dot
    pub extension: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            reference_base: DEFAULT_REFERENCE_BASE.to_string(),
            extension: DEFAULT_DOCUMENT_EXTENSION.to_string(),
        }
    }
}

/// Comment to document a module with
///
/// Empty comments never count. Among the rest the longest wins; on a tie
/// the one declared last wins.
pub fn select_comment(module: &ModuleEntity) -> Option<&CommentLocation> {
    module
        .comment_locations
        .iter()
        .filter(|comment| !comment.is_empty())
        .max_by_key(|comment| comment.len())
}

/// Full page text: title, rendered body and reference back-link
pub fn compose_document(name: &FullName, body: &str, reference_base: &str) -> String {
    format!(
        "# {name}\n\n{body}\n[{name} {REFERENCE_LINK_SUFFIX}]({reference_base}/{}.{REFERENCE_PAGE_EXTENSION})\n",
        name.url_path()
    )
}

/// Renders modules and writes their pages
pub struct DocumentWriter {
    config: WriterConfig,
    markup: Arc<dyn MarkupParser>,
    renderer: Arc<dyn MarkdownRenderer>,
}

impl DocumentWriter {
    /// Writer with explicit configuration and markup collaborators
    pub fn new(
        config: WriterConfig,
        markup: Arc<dyn MarkupParser>,
        renderer: Arc<dyn MarkdownRenderer>,
    ) -> Self {
        Self {
            config,
            markup,
            renderer,
        }
    }

    /// Output configuration
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Target path of `name` in `category`
    pub fn target_path(&self, category: &str, name: &FullName) -> PathBuf {
        self.config
            .output_dir
            .join(category)
            .join(format!("{}.{}", name.file_stem(), self.config.extension))
    }

    /// Compose the page of `module` without writing it
    ///
    /// `None` when the module has no non-empty comment.
    pub fn render(
        &self,
        category: &str,
        module: &ModuleEntity,
        source: Option<&Path>,
    ) -> Option<OutputDocument> {
        let comment = select_comment(module)?;
        let document = comment.document(self.markup.as_ref());
        let body = self.renderer.render(document);

        Some(OutputDocument {
            path: self.target_path(category, &module.full_name),
            body: compose_document(&module.full_name, &body, &self.config.reference_base),
            source: source.map(Path::to_path_buf),
        })
    }

    /// Render and write the page of `module`, overwriting any previous file
    ///
    /// Undocumented modules are skipped and yield `Ok(None)`.
    pub fn write(
        &self,
        category: &str,
        module: &ModuleEntity,
        source: Option<&Path>,
    ) -> Result<Option<OutputDocument>> {
        let Some(document) = self.render(category, module, source) else {
            debug!(module = %module.full_name, "Skipping undocumented module");
            return Ok(None);
        };

        if let Some(parent) = document.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io_with_source(
                    format!("Failed to create output directory {}", parent.display()),
                    e,
                )
            })?;
        }
        std::fs::write(&document.path, &document.body).map_err(|e| {
            Error::io_with_source(
                format!("Failed to write document {}", document.path.display()),
                e,
            )
        })?;

        let source = document
            .source
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        info!(
            source = %source,
            target = %document.path.display(),
            "{} => {}",
            source,
            document.path.display()
        );

        Ok(Some(document))
    }
}

impl std::fmt::Debug for DocumentWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentWriter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
