//! Symbol store and parse contexts
//!
//! The store is an arena: entities live in one vector and refer to their
//! children by [`ModuleId`]. A fresh store is created for every parse batch,
//! so reopened classes merge within a batch and nothing leaks across runs.

use crate::entities::{CommentLocation, ModuleEntity, ModuleId, ModuleKind};
use crate::value_objects::FullName;
use std::collections::HashMap;
use std::ops::Index;
use std::path::PathBuf;

/// Arena of every class/module seen in one parse batch
#[derive(Debug, Default, Clone)]
pub struct SymbolStore {
    modules: Vec<ModuleEntity>,
    by_name: HashMap<FullName, ModuleId>,
}

impl SymbolStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct entities
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// True when nothing has been declared
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Entity by id, `None` for ids minted by another store
    pub fn get(&self, id: ModuleId) -> Option<&ModuleEntity> {
        self.modules.get(id.0)
    }

    /// Id of the entity with this full name
    pub fn find(&self, name: &FullName) -> Option<ModuleId> {
        self.by_name.get(name).copied()
    }

    /// Declare `segment` inside `parent` (or at the top level)
    ///
    /// Returns the existing entity when the name is already known. A
    /// namespace first created implicitly (through a qualified name such as
    /// `class A::B`) takes the kind of its first explicit declaration.
    pub fn declare(&mut self, parent: Option<ModuleId>, segment: &str, kind: ModuleKind) -> ModuleId {
        let id = self.find_or_insert(parent, segment, kind);
        let module = &mut self.modules[id.0];
        if module.comment_locations.is_empty() {
            module.kind = kind;
        }
        id
    }

    /// Find or implicitly create the namespace `segment` inside `parent`
    pub fn ensure_namespace(&mut self, parent: Option<ModuleId>, segment: &str) -> ModuleId {
        self.find_or_insert(parent, segment, ModuleKind::Module)
    }

    /// Attach a declaration site to an entity
    pub fn add_comment(&mut self, id: ModuleId, comment: CommentLocation) {
        if let Some(module) = self.modules.get_mut(id.0) {
            module.comment_locations.push(comment);
        }
    }

    /// Reorder ids the way contexts expose them: classes first, then modules,
    /// each group in declaration order
    pub fn classes_then_modules(&self, ids: &[ModuleId]) -> Vec<ModuleId> {
        let is_kind = |id: &ModuleId, kind: ModuleKind| self.get(*id).is_some_and(|m| m.kind == kind);
        let mut ordered: Vec<ModuleId> = ids
            .iter()
            .copied()
            .filter(|id| is_kind(id, ModuleKind::Class))
            .collect();
        ordered.extend(ids.iter().copied().filter(|id| is_kind(id, ModuleKind::Module)));
        ordered
    }

    /// Children of an entity, classes first, then modules
    pub fn children(&self, id: ModuleId) -> Vec<ModuleId> {
        self.get(id)
            .map(|module| self.classes_then_modules(&module.children))
            .unwrap_or_default()
    }

    fn find_or_insert(&mut self, parent: Option<ModuleId>, segment: &str, kind: ModuleKind) -> ModuleId {
        let parent_name = parent.and_then(|p| self.get(p)).map(|m| m.full_name.clone());
        let full_name = FullName::nested(parent_name.as_ref(), segment);
        if let Some(id) = self.find(&full_name) {
            return id;
        }

        let id = ModuleId(self.modules.len());
        self.modules.push(ModuleEntity::new(full_name.clone(), kind));
        self.by_name.insert(full_name, id);
        if let Some(parent) = parent.and_then(|p| self.modules.get_mut(p.0)) {
            parent.children.push(id);
        }
        id
    }
}

impl Index<ModuleId> for SymbolStore {
    type Output = ModuleEntity;

    fn index(&self, id: ModuleId) -> &Self::Output {
        &self.modules[id.0]
    }
}

/// File-scope declarations of one parsed source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContext {
    /// The parsed source file
    pub source: PathBuf,
    /// Classes and modules declared at file scope, in declaration order
    pub modules: Vec<ModuleId>,
}

impl ParseContext {
    /// Context with no declarations yet
    pub fn new<P: Into<PathBuf>>(source: P) -> Self {
        Self {
            source: source.into(),
            modules: Vec::new(),
        }
    }

    /// Record a file-scope declaration once
    pub fn add_module(&mut self, id: ModuleId) {
        if !self.modules.contains(&id) {
            self.modules.push(id);
        }
    }
}

/// Result of parsing one batch of source files
#[derive(Debug, Clone, Default)]
pub struct ParsedCorpus {
    /// Every entity of the batch
    pub store: SymbolStore,
    /// One context per input file, in input order
    pub contexts: Vec<ParseContext>,
}
