//! Identifier mapping cache.
//!
//! Maps each old identifier to the new identifier minted for it the first
//! time it was seen. Lives for exactly one migration run.

use std::collections::HashMap;

use crate::identifier::generate_identifier;

/// Stable old-to-new identifier mapping.
#[derive(Debug, Default)]
pub struct IdentifierCache {
    mapping: HashMap<String, String>,
}

impl IdentifierCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the replacement for `old`, minting one on first sight.
    pub fn resolve(&mut self, old: &str) -> String {
        if let Some(new) = self.mapping.get(old) {
            return new.clone();
        }

        let new = generate_identifier();
        tracing::trace!(old, new = %new, "minted identifier");
        self.mapping.insert(old.to_string(), new.clone());
        new
    }

    /// Returns the replacement already chosen for `old`, if any.
    #[must_use]
    pub fn get(&self, old: &str) -> Option<&str> {
        self.mapping.get(old).map(String::as_str)
    }

    /// Number of distinct identifiers regenerated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Returns whether nothing has been regenerated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Iterates over `(old, new)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mapping.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
