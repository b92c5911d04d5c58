//! Root module selection
//!
//! Top-level names are always roots. One level below the top, only
//! members of the configured namespaces are roots (`Net::HTTP` yes,
//! `Foo::Bar` no). Nothing deeper ever is.

use rdm_domain::constants::DEFAULT_NAMESPACES_WITH_SUBMODULES;
use rdm_domain::{FullName, ModuleEntity};
use std::collections::HashSet;

/// Predicate selecting library entry points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootModuleFilter {
    namespaces: HashSet<String>,
}

impl RootModuleFilter {
    /// Filter treating members of `namespaces` as libraries of their own
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespaces: namespaces.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `module` is a library entry point
    pub fn is_root(&self, module: &ModuleEntity) -> bool {
        self.is_root_name(&module.full_name)
    }

    /// Whether a module named `name` is a library entry point
    pub fn is_root_name(&self, name: &FullName) -> bool {
        let parts: Vec<&str> = name.segments().collect();
        match parts.as_slice() {
            [_] => true,
            [namespace, _] => self.namespaces.contains(*namespace),
            _ => false,
        }
    }
}

impl Default for RootModuleFilter {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACES_WITH_SUBMODULES.iter().copied())
    }
}
