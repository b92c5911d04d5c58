//! Domain layer constants
//!
//! Naming conventions shared by the parser, the pipeline stages and the
//! document writer.

// ============================================================================
// NAMING CONSTANTS
// ============================================================================

/// Separator between the segments of a fully-qualified class/module name
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Replacement for [`NAMESPACE_SEPARATOR`] in output file names
pub const FILE_NAME_SEPARATOR: &str = "--";

/// Replacement for [`NAMESPACE_SEPARATOR`] in reference URLs
pub const URL_PATH_SEPARATOR: &str = "/";

/// Namespaces whose direct members are documented as libraries of their own
pub const DEFAULT_NAMESPACES_WITH_SUBMODULES: &[&str] = &["Net", "IO"];

/// Library sub-directory whose files are reported with a `net/` prefix
pub const NET_LIBRARY_DIR: &str = "net";

/// Ruby source file extension, without the dot
pub const RUBY_SOURCE_EXTENSION: &str = "rb";

/// Directory the library unit of a source file is computed against
pub const DEFAULT_LIBRARY_ROOT: &str = "ruby/lib";

// ============================================================================
// OUTPUT CONSTANTS
// ============================================================================

/// Base directory generated pages are written under
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Extension of generated reference pages, without the dot
pub const DEFAULT_DOCUMENT_EXTENSION: &str = "md";

/// Where the full generated reference documentation is published
pub const DEFAULT_REFERENCE_BASE: &str = "https://docs.ruby-lang.org/en/master";

/// Suffix appended to the full name in the reference back-link text
pub const REFERENCE_LINK_SUFFIX: &str = "Reference";

/// Extension of the pages the reference back-link points at
pub const REFERENCE_PAGE_EXTENSION: &str = "html";
