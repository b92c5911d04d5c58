//! Configuration management
//!
//! Settings are merged by figment from, in increasing precedence:
//! built-in defaults, a TOML file, and `RDM__`-prefixed environment
//! variables (`RDM__OUTPUT__DIR=docs`).

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, validate_app_config};
pub use types::{AppConfig, LibraryConfig, LoggingConfig, OutputConfig};
