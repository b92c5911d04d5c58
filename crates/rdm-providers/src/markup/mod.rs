//! Documentation markup
//!
//! RDoc markup is parsed into the domain [`Document`](rdm_domain::Document)
//! and rendered back out as CommonMark.

/// Inline markup conversion
pub mod inline;
/// Markdown renderer
pub mod markdown;
/// RDoc markup parser
pub mod rdoc;

pub use inline::convert_inline;
pub use markdown::RdocToMarkdown;
pub use rdoc::RdocMarkupParser;
