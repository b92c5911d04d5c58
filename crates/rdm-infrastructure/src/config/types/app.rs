//! Main application configuration

use super::logging::LoggingConfig;
use rdm_application::WriterConfig;
use rdm_domain::constants::{
    DEFAULT_DOCUMENT_EXTENSION, DEFAULT_LIBRARY_ROOT, DEFAULT_NAMESPACES_WITH_SUBMODULES,
    DEFAULT_OUTPUT_DIR, DEFAULT_REFERENCE_BASE,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where generated pages go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Base output directory
    pub dir: PathBuf,
    /// URL reference back-links point under
    pub reference_base: String,
    /// Page file extension, without the dot
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            reference_base: DEFAULT_REFERENCE_BASE.to_string(),
            extension: DEFAULT_DOCUMENT_EXTENSION.to_string(),
        }
    }
}

impl OutputConfig {
    /// Writer settings for the document writer
    pub fn writer_config(&self) -> WriterConfig {
        WriterConfig {
            output_dir: self.dir.clone(),
            reference_base: self.reference_base.trim_end_matches('/').to_string(),
            extension: self.extension.clone(),
        }
    }
}

/// The library being documented
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Root directory library units are computed against
    pub root: PathBuf,
    /// Namespaces whose direct members are libraries of their own
    pub namespaces_with_submodules: Vec<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_LIBRARY_ROOT),
            namespaces_with_submodules: DEFAULT_NAMESPACES_WITH_SUBMODULES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings
    pub output: OutputConfig,
    /// Library settings
    pub library: LibraryConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}
