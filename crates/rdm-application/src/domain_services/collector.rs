//! Parse context flattening

use rdm_domain::{ModuleEntity, ModuleId, ParseContext, SymbolStore};
use std::path::Path;

/// A module reached from one parse context
#[derive(Debug, Clone, Copy)]
pub struct CollectedModule<'a> {
    /// Source file of the context the module was reached from
    pub source: &'a Path,
    /// The module itself
    pub module: &'a ModuleEntity,
}

/// Flattens module trees into pre-order sequences
#[derive(Debug, Clone, Copy)]
pub struct ModuleCollector<'a> {
    store: &'a SymbolStore,
}

impl<'a> ModuleCollector<'a> {
    /// Collector over the entities of `store`
    pub fn new(store: &'a SymbolStore) -> Self {
        Self { store }
    }

    /// Every module of `context`, depth-first, parents before children
    ///
    /// Each file-scope declaration is followed by all of its descendants
    /// before the next one starts.
    pub fn collect_ids(&self, context: &ParseContext) -> Vec<ModuleId> {
        let mut collected = Vec::new();
        let mut pending: Vec<ModuleId> = context.modules.iter().rev().copied().collect();

        while let Some(id) = pending.pop() {
            collected.push(id);
            pending.extend(self.store.children(id).into_iter().rev());
        }
        collected
    }

    /// Like [`collect_ids`](Self::collect_ids), tagged with the context's source
    pub fn collect(&self, context: &'a ParseContext) -> Vec<CollectedModule<'a>> {
        let store = self.store;
        self.collect_ids(context)
            .into_iter()
            .filter_map(|id| store.get(id))
            .map(|module| CollectedModule {
                source: &context.source,
                module,
            })
            .collect()
    }

    /// Collect over several contexts, in context order
    pub fn collect_all(&self, contexts: &'a [ParseContext]) -> Vec<CollectedModule<'a>> {
        contexts
            .iter()
            .flat_map(|context| self.collect(context))
            .collect()
    }
}
