//! Domain Value Objects
//!
//! Immutable values without identity.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`FullName`] | Namespace-qualified class/module name such as `Net::HTTP` |
//! | [`Document`] | Parsed form of a documentation comment |

/// Namespace-qualified names
pub mod full_name;
/// Parsed documentation comment markup
pub mod markup;

pub use full_name::FullName;
pub use markup::{Block, Document, ListItem, ListKind};
