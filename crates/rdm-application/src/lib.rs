//! Application Layer - rdm
//!
//! The documentation pipeline and the stages it is built from:
//!
//! ```text
//! ModuleTreeParser -> ModuleCollector -> RootModuleFilter
//!     -> ModuleDeduplicator -> DocumentWriter
//! ```
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `rdm-domain`: entities, value objects and the parser/renderer ports
//! - Pure Rust libraries for logging and serialization
//!
//! Concrete parsers and renderers are injected as `Arc<dyn Port>` values.

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
