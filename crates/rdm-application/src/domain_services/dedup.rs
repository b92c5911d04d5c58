//! Deduplication by full name

use crate::domain_services::collector::CollectedModule;
use std::collections::HashSet;

/// Keeps the first module seen for every full name
///
/// Which module wins depends on input order: the first file that
/// declared a name supplies the kept entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleDeduplicator;

impl ModuleDeduplicator {
    /// Drop every module whose full name was already seen, keeping order
    pub fn dedup<'a, I>(modules: I) -> Vec<CollectedModule<'a>>
    where
        I: IntoIterator<Item = CollectedModule<'a>>,
    {
        let mut seen = HashSet::new();
        modules
            .into_iter()
            .filter(|collected| seen.insert(&collected.module.full_name))
            .collect()
    }
}
