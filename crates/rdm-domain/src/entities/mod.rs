//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`ModuleEntity`] | One class or module definition, possibly reopened across files |
//! | [`CommentLocation`] | One documentation block attached to one declaration site |
//! | [`SymbolStore`] | Arena owning every module entity of one parse batch |
//! | [`ParseContext`] | File-scope declarations of one parsed source file |
//! | [`OutputDocument`] | A rendered reference page ready to be written |

/// Documentation comments attached to declaration sites
pub mod comment;
/// Rendered reference pages
pub mod document;
/// Class and module definitions
pub mod module;
/// Symbol store and per-file parse contexts
pub mod store;

pub use comment::CommentLocation;
pub use document::OutputDocument;
pub use module::{ModuleEntity, ModuleId, ModuleKind};
pub use store::{ParseContext, ParsedCorpus, SymbolStore};
