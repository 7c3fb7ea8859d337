//! Realm-level regeneration.
//!
//! Wraps the generic [`Remapper`] with the handling a realm export needs at
//! its root: the realm `id` is always regenerated, user records keep their
//! own `id`, and every other root entry is traversed under its own key.

use kc_core::KeyPolicy;

use crate::cache::IdentifierCache;
use crate::classify::KeyClassifier;
use crate::document::{RealmDocument, REALM_ID_KEY, USERS_KEY};
use crate::remap::Remapper;

/// One migration run: a key policy plus the identifier cache it fills.
#[derive(Debug, Default)]
pub struct RealmMigration {
    classifier: KeyClassifier,
    cache: IdentifierCache,
}

impl RealmMigration {
    /// Creates a migration applying `policy`.
    #[must_use]
    pub fn new(policy: KeyPolicy) -> Self {
        Self {
            classifier: KeyClassifier::new(policy),
            cache: IdentifierCache::new(),
        }
    }

    /// Regenerates identifiers throughout `document`.
    ///
    /// Returns how many distinct identifiers this call regenerated. Running
    /// several documents through the same migration shares the cache, so an
    /// identifier seen in an earlier document keeps its replacement.
    pub fn regenerate(&mut self, document: &mut RealmDocument) -> usize {
        let before = self.cache.len();
        let root = document.root_mut();
        let mut remapper = Remapper::new(&self.classifier, &mut self.cache);

        if let Some(id) = root.get_mut(REALM_ID_KEY) {
            remapper.remap_identifier(id);
        }

        if let Some(users) = root.get_mut(USERS_KEY) {
            remapper.transform_users(users);
        }

        for (key, value) in root.iter_mut() {
            if key != USERS_KEY {
                remapper.transform(value, key);
            }
        }

        let regenerated = self.cache.len() - before;
        tracing::info!(regenerated, total = self.cache.len(), "identifier regeneration finished");
        regenerated
    }

    /// The identifiers regenerated so far.
    #[must_use]
    pub fn cache(&self) -> &IdentifierCache {
        &self.cache
    }

    /// Number of distinct identifiers regenerated so far.
    #[must_use]
    pub fn regenerated(&self) -> usize {
        self.cache.len()
    }
}
