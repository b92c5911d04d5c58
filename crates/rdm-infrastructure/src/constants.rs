//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Naming and output defaults are defined in `rdm_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "rdm.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "rdm";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "RDM";

/// Separator between the prefix and nested keys of configuration variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "RDM_LOG";

/// Fallback file name prefix for rolled log files
pub const DEFAULT_LOG_FILE_PREFIX: &str = "rdm";
