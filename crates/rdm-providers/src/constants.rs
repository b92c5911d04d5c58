//! Provider constants

// ============================================================================
// RUBY GRAMMAR NODE KINDS
// ============================================================================

/// `class Foo ... end`
pub const NODE_CLASS: &str = "class";

/// `module Foo ... end`
pub const NODE_MODULE: &str = "module";

/// Line comments and `=begin`/`=end` blocks
pub const NODE_COMMENT: &str = "comment";

/// Field holding the declared name of a class or module
pub const FIELD_NAME: &str = "name";

/// Nodes whose bodies never contribute class/module declarations
pub const OPAQUE_NODES: &[&str] = &["method", "singleton_method", "singleton_class"];

// ============================================================================
// COMMENT CONSTANTS
// ============================================================================

/// Opening line of an embedded documentation block
pub const BLOCK_COMMENT_BEGIN: &str = "=begin";

/// Closing line of an embedded documentation block
pub const BLOCK_COMMENT_END: &str = "=end";

/// Magic comment keys honoured anywhere in the leading comment section
pub const MAGIC_COMMENT_KEYS: &[&str] = &[
    "frozen_string_literal",
    "warn_indent",
    "shareable_constant_value",
    "typed",
];

/// Magic comment keys honoured only on the first two lines
pub const ENCODING_COMMENT_KEYS: &[&str] = &["encoding", "coding"];

/// Last 0-based row an encoding magic comment may sit on
pub const ENCODING_COMMENT_LAST_ROW: usize = 1;

/// Line starting a hidden section of a comment
pub const HIDDEN_SECTION_START: &str = "--";

/// Line ending a hidden section of a comment
pub const HIDDEN_SECTION_END: &str = "++";

/// Tab stop width used when flushing comments left
pub const TAB_WIDTH: usize = 8;

// ============================================================================
// MARKDOWN CONSTANTS
// ============================================================================

/// Deepest heading level Markdown supports
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Fence around verbatim blocks
pub const CODE_FENCE: &str = "```";

/// Indentation of definition bodies under their term
pub const DEFINITION_INDENT: &str = "    ";
