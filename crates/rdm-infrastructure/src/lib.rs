//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns of rdm.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML file, `RDM__` environment |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension methods for foreign errors |
//! | [`sources`] | Expansion of source arguments into Ruby files |
//! | [`bootstrap`] | Wiring providers into the documentation pipeline |
//! | [`constants`] | Infrastructure constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod sources;

pub use bootstrap::build_pipeline;
pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use error_ext::ErrorContext;
