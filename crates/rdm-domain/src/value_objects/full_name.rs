//! Fully-qualified class/module names

use crate::constants::{FILE_NAME_SEPARATOR, NAMESPACE_SEPARATOR, URL_PATH_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace-qualified identifier of a class or module
///
/// Segments are joined by [`NAMESPACE_SEPARATOR`]; `Net::HTTP` has the
/// segments `Net` and `HTTP`. After deduplication a full name identifies
/// exactly one module across the parsed corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FullName(String);

impl FullName {
    /// Wrap an already-qualified name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Name of `segment` nested inside `parent` (or at the top level)
    pub fn nested(parent: Option<&FullName>, segment: &str) -> Self {
        match parent {
            Some(parent) => Self(format!("{}{NAMESPACE_SEPARATOR}{segment}", parent.0)),
            None => Self(segment.to_string()),
        }
    }

    /// The name as written, e.g. `Net::HTTP`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split on the namespace separator
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(NAMESPACE_SEPARATOR)
    }

    /// True when the name carries no namespace separator
    pub fn is_top_level(&self) -> bool {
        !self.0.contains(NAMESPACE_SEPARATOR)
    }

    /// Enclosing namespace, e.g. `Net` for `Net::HTTP`
    pub fn parent(&self) -> Option<FullName> {
        self.0
            .rsplit_once(NAMESPACE_SEPARATOR)
            .map(|(parent, _)| Self(parent.to_string()))
    }

    /// File name stem of the reference page: `Net::HTTP` becomes `Net--HTTP`
    pub fn file_stem(&self) -> String {
        self.0.replace(NAMESPACE_SEPARATOR, FILE_NAME_SEPARATOR)
    }

    /// URL path of the reference page: `Net::HTTP` becomes `Net/HTTP`
    pub fn url_path(&self) -> String {
        self.0.replace(NAMESPACE_SEPARATOR, URL_PATH_SEPARATOR)
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FullName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
