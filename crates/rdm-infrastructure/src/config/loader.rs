//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables
//! and default values, then validates the merged result.

use crate::config::AppConfig;
use crate::config::types::{LibraryConfig, LoggingConfig, OutputConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use rdm_domain::constants::NAMESPACE_SEPARATOR;
use rdm_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, else the first default location found)
    /// 3. Environment variables with prefix (e.g., `RDM__OUTPUT__DIR`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys (RDM__OUTPUT__DIR)
        let prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Configuration as TOML text, in the layout `load` reads back
    pub fn to_toml(config: &AppConfig) -> Result<String> {
        toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = Self::to_toml(config)?;

        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;

        Ok(())
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_output_config(&config.output)?;
    validate_library_config(&config.library)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<()> {
    if config.dir.as_os_str().is_empty() {
        return Err(Error::configuration("Output directory cannot be empty"));
    }
    if config.extension.is_empty() {
        return Err(Error::configuration("Output extension cannot be empty"));
    }
    if config.extension.contains(['/', '\\']) {
        return Err(Error::configuration(format!(
            "Output extension cannot contain a path separator: {}",
            config.extension
        )));
    }
    Ok(())
}

fn validate_library_config(config: &LibraryConfig) -> Result<()> {
    for namespace in &config.namespaces_with_submodules {
        if namespace.is_empty() {
            return Err(Error::configuration(
                "Namespaces with submodules cannot contain an empty name",
            ));
        }
        if namespace.contains(NAMESPACE_SEPARATOR) {
            return Err(Error::configuration(format!(
                "Namespace with submodules must be a single segment: {namespace}"
            )));
        }
    }
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.output.dir = dir.into();
        self
    }

    /// Set the reference base URL
    pub fn with_reference_base<S: Into<String>>(mut self, base: S) -> Self {
        self.config.output.reference_base = base.into();
        self
    }

    /// Set the library root
    pub fn with_library_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.config.library.root = root.into();
        self
    }

    /// Set the namespaces whose members are libraries of their own
    pub fn with_namespaces<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.library.namespaces_with_submodules =
            namespaces.into_iter().map(Into::into).collect();
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }

    /// Build and validate the configuration
    pub fn build_validated(self) -> Result<AppConfig> {
        validate_app_config(&self.config)?;
        Ok(self.config)
    }
}
