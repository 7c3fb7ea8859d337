//! Field key classification.
//!
//! Decides, from a key name and the name of the enclosing field, whether an
//! identifier stored under that key is regenerated. Knows nothing about the
//! values themselves or the mapping cache.

use kc_core::KeyPolicy;

/// How a field key is treated during regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// Never regenerated (`userId`, `groupId`).
    Preserved,
    /// Always regenerated (`clientId`, `roleId`, ...).
    ChangeEligible,
    /// The generic `id` key: regenerated unless the context is protected.
    ContextDependent,
    /// Any other key. Its value is traversed but never replaced.
    Unclassified,
}

/// Classifies field keys according to a [`KeyPolicy`].
#[derive(Debug, Clone, Default)]
pub struct KeyClassifier {
    policy: KeyPolicy,
}

impl KeyClassifier {
    /// Creates a classifier for the given policy.
    #[must_use]
    pub fn new(policy: KeyPolicy) -> Self {
        Self { policy }
    }

    /// Returns the class of `key`, independent of context.
    #[must_use]
    pub fn class_of(&self, key: &str) -> KeyClass {
        if self.policy.preserved_keys.contains(key) {
            KeyClass::Preserved
        } else if key == self.policy.context_key {
            KeyClass::ContextDependent
        } else if self.policy.change_keys.contains(key) {
            KeyClass::ChangeEligible
        } else {
            KeyClass::Unclassified
        }
    }

    /// Returns whether `context` shields the generic identifier key.
    #[must_use]
    pub fn is_protected_context(&self, context: &str) -> bool {
        self.policy.protected_contexts.contains(context)
    }

    /// Returns whether an identifier stored under `key`, directly inside a
    /// field named `context`, should be regenerated.
    #[must_use]
    pub fn should_change(&self, key: &str, context: &str) -> bool {
        match self.class_of(key) {
            KeyClass::Preserved | KeyClass::Unclassified => false,
            KeyClass::ChangeEligible => true,
            KeyClass::ContextDependent => !self.is_protected_context(context),
        }
    }

    /// The policy this classifier applies.
    #[must_use]
    pub fn policy(&self) -> &KeyPolicy {
        &self.policy
    }
}
