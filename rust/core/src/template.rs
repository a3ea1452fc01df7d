// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Marker template registry
//!
//! Marker instances are stamped from shared templates; the template
//! name doubles as the marker's semantic category. The registry itself
//! lives outside this system (it belongs to the producing application),
//! so it is abstracted behind a trait. Lookups may run concurrently
//! across markers, hence the `Sync` bound.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Opaque identifier of a marker template
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(pub String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of marker categories
///
/// A failed lookup is terminal-but-non-fatal per marker: callers
/// degrade the category to an empty string and keep going.
pub trait TemplateLibrary: Sync {
    /// Resolve a template id to its category name
    fn category(&self, id: &TemplateId) -> Result<String>;
}

/// In-memory template registry backed by a hash map
///
/// Used when embedding the exporter and throughout the tests.
#[derive(Debug, Clone, Default)]
pub struct StaticTemplateLibrary {
    categories: FxHashMap<TemplateId, String>,
}

impl StaticTemplateLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template's category, replacing any previous entry
    pub fn insert(&mut self, id: TemplateId, category: impl Into<String>) {
        self.categories.insert(id, category.into());
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl FromIterator<(TemplateId, String)> for StaticTemplateLibrary {
    fn from_iter<I: IntoIterator<Item = (TemplateId, String)>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}

impl TemplateLibrary for StaticTemplateLibrary {
    fn category(&self, id: &TemplateId) -> Result<String> {
        self.categories
            .get(id)
            .cloned()
            .ok_or_else(|| Error::UnknownTemplate(id.0.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_library_lookup() {
        let mut library = StaticTemplateLibrary::new();
        library.insert(TemplateId::new("tpl-exit"), "exit");

        assert_eq!(
            library.category(&TemplateId::new("tpl-exit")).unwrap(),
            "exit"
        );
        assert!(library.category(&TemplateId::new("tpl-missing")).is_err());
    }
}
