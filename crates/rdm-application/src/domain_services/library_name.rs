//! Library unit naming
//!
//! A library unit is the short name progress messages use for a source
//! file: `lib/set.rb` is `set`, `lib/net/http.rb` is `net/http`.

use rdm_domain::constants::{NET_LIBRARY_DIR, RUBY_SOURCE_EXTENSION};
use rdm_domain::error::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Maps source paths to library units relative to a library root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryNameResolver {
    root: PathBuf,
}

impl LibraryNameResolver {
    /// Resolver for files under `root`
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Library unit of `path`
    ///
    /// Both paths are made absolute first (without touching the
    /// filesystem), so relative and absolute spellings agree.
    pub fn resolve(&self, path: &Path) -> Result<String> {
        let root = absolute(&self.root)?;
        let path = absolute(path)?;
        let relative = path.strip_prefix(&root).unwrap_or(&path);

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::invalid_argument(format!("Not a file path: {}", path.display())))?;
        let suffix = format!(".{RUBY_SOURCE_EXTENSION}");
        let stem = file_name.strip_suffix(&suffix).unwrap_or(file_name);

        let in_net = matches!(
            relative.components().next(),
            Some(Component::Normal(dir)) if dir == NET_LIBRARY_DIR
        );
        Ok(if in_net {
            format!("{NET_LIBRARY_DIR}/{stem}")
        } else {
            stem.to_string()
        })
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        Error::io_with_source(format!("Failed to resolve path {}", path.display()), e)
    })
}
