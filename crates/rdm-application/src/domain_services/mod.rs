//! Pipeline Stages
//!
//! | Stage | Description |
//! |-------|-------------|
//! | [`LibraryNameResolver`] | Source path to library unit, for diagnostics |
//! | [`ModuleCollector`] | Flattens parse contexts depth-first |
//! | [`RootModuleFilter`] | Selects library entry points |
//! | [`ModuleDeduplicator`] | One entity per full name, first wins |
//! | [`DocumentWriter`] | Comment selection, rendering and output |

/// Parse context flattening
pub mod collector;
/// Deduplication by full name
pub mod dedup;
/// Library unit naming
pub mod library_name;
/// Root module selection
pub mod root_filter;
/// Document composition and output
pub mod writer;

pub use collector::{CollectedModule, ModuleCollector};
pub use dedup::ModuleDeduplicator;
pub use library_name::LibraryNameResolver;
pub use root_filter::RootModuleFilter;
pub use writer::{DocumentWriter, WriterConfig, compose_document, select_comment};
