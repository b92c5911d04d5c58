//! # rdm
//!
//! Turns the documentation comments of Ruby library entry points into
//! standalone Markdown reference pages, each linking back to the full
//! generated reference.
//!
//! ## Example
//!
//! ```ignore
//! use rdm::infrastructure::{ConfigLoader, build_pipeline};
//!
//! let config = ConfigLoader::new().load()?;
//! let report = build_pipeline(&config).run("core", &sources)?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Entities, markup documents, ports and the domain error
//! - `application` - Pipeline stages and the documentation use case
//! - `providers` - tree-sitter Ruby parser, RDoc markup, Markdown renderer
//! - `infrastructure` - Configuration, logging, bootstrap
//! - [`cli`] - The `rdm` command line

/// Domain layer - core business logic and types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use rdm_domain::*;
}

/// Application layer - pipeline stages and use case
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use rdm_application::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use rdm_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use rdm_infrastructure::*;
}

pub mod cli;

pub use cli::{Cli, Commands, run};
pub use rdm_domain::error::{Error, Result};
