//! Source argument expansion
//!
//! Files are taken as given. Directories expand to the Ruby files below
//! them, walked in file-name order so every run sees the same sequence.

use crate::error_ext::ErrorContext;
use rdm_domain::constants::RUBY_SOURCE_EXTENSION;
use rdm_domain::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand `paths` into the source files to parse, in order
///
/// A path reached twice (a file also covered by a directory argument) is
/// kept at its first position only.
pub fn expand_sources(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut sources: Vec<PathBuf> = Vec::new();

    for path in paths {
        if path.is_dir() {
            for file in ruby_files(path)? {
                if !sources.contains(&file) {
                    sources.push(file);
                }
            }
        } else if path.is_file() {
            if !sources.contains(path) {
                sources.push(path.clone());
            }
        } else {
            return Err(Error::io(format!("Source path not found: {}", path.display())));
        }
    }

    Ok(sources)
}

/// Ruby files below `dir`, sorted by path
pub fn ruby_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.io_context(format!("Failed to walk {}", dir.display()))?;
        if entry.file_type().is_file() && is_ruby_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_ruby_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == RUBY_SOURCE_EXTENSION)
}
