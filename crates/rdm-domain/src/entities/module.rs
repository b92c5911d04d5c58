//! Module Entity

use crate::entities::CommentLocation;
use crate::value_objects::FullName;

/// Index of a [`ModuleEntity`] inside its [`SymbolStore`](crate::SymbolStore)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(pub(crate) usize);

/// Whether a definition is a `class` or a `module`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// `class Foo`
    Class,
    /// `module Foo`
    Module,
}

/// One class or module definition
///
/// A class reopened in several places (or several files) is a single
/// entity with one [`CommentLocation`] per declaration site. Children are
/// owned through the store and referenced by id; an entity never refers
/// to its parent.
#[derive(Debug, Clone)]
pub struct ModuleEntity {
    /// Namespace-qualified name
    pub full_name: FullName,
    /// Class or module
    pub kind: ModuleKind,
    /// One entry per declaration site, in parse order
    pub comment_locations: Vec<CommentLocation>,
    /// Nested classes and modules in first-declaration order
    pub children: Vec<ModuleId>,
}

impl ModuleEntity {
    /// Entity with no declaration sites and no children
    pub fn new<N: Into<FullName>>(full_name: N, kind: ModuleKind) -> Self {
        Self {
            full_name: full_name.into(),
            kind,
            comment_locations: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a declaration site
    pub fn with_comment(mut self, comment: CommentLocation) -> Self {
        self.comment_locations.push(comment);
        self
    }

    /// True when at least one declaration site carries comment text
    pub fn is_documented(&self) -> bool {
        self.comment_locations.iter().any(|c| !c.is_empty())
    }
}
