//! # rdm domain layer
//!
//! Core types for turning documented Ruby classes and modules into
//! standalone Markdown reference pages.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Module entities, comment locations, the symbol store and output documents |
//! | [`value_objects`] | Full names and the parsed markup document |
//! | [`ports`] | Contracts implemented by the parser and renderer providers |
//! | [`error`] | Domain error type shared by every layer |
//! | [`constants`] | Domain constants (namespace separator, defaults) |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{
    CommentLocation, ModuleEntity, ModuleId, ModuleKind, OutputDocument, ParseContext,
    ParsedCorpus, SymbolStore,
};
pub use error::{Error, Result};
pub use value_objects::{Block, Document, FullName, ListItem, ListKind};
