//! Recursive selective traversal.
//!
//! The [`Remapper`] walks a JSON tree depth first. Inside a mapping, each
//! `(key, value)` pair is classified on its own: an identifier under a key the
//! [`KeyClassifier`] marks for change is replaced through the
//! [`IdentifierCache`]; anything else is descended into with `key` as the new
//! context. Sequences pass their context through unchanged.
//!
//! The context is only the name of the immediately enclosing field, not a
//! path. A field literally named `groups` deep inside unrelated data therefore
//! protects the `id` fields beneath it, exactly as a real group list would.

use serde_json::{Map, Value};

use crate::cache::IdentifierCache;
use crate::classify::KeyClassifier;
use crate::identifier::is_identifier_str;

/// Context used for every field of a user record.
pub const USERS_CONTEXT: &str = "users";

/// Key of a user record's own identity, which is never visited.
pub const USER_ID_KEY: &str = "id";

/// A mutable view of a JSON node, split by shape.
#[derive(Debug)]
pub enum Node<'a> {
    /// An object with string keys.
    Mapping(&'a mut Map<String, Value>),
    /// An ordered array.
    Sequence(&'a mut Vec<Value>),
    /// A string, number, boolean or null.
    Scalar,
}

impl<'a> From<&'a mut Value> for Node<'a> {
    fn from(value: &'a mut Value) -> Self {
        match value {
            Value::Object(map) => Self::Mapping(map),
            Value::Array(items) => Self::Sequence(items),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Self::Scalar,
        }
    }
}

/// Regenerates identifiers in place using a shared cache.
#[derive(Debug)]
pub struct Remapper<'a> {
    classifier: &'a KeyClassifier,
    cache: &'a mut IdentifierCache,
}

impl<'a> Remapper<'a> {
    /// Creates a remapper that records every replacement in `cache`.
    pub fn new(classifier: &'a KeyClassifier, cache: &'a mut IdentifierCache) -> Self {
        Self { classifier, cache }
    }

    /// Regenerates eligible identifiers anywhere below `node`.
    pub fn transform(&mut self, node: &mut Value, context: &str) {
        self.transform_node(Node::from(node), context);
    }

    fn transform_node(&mut self, node: Node<'_>, context: &str) {
        match node {
            Node::Mapping(map) => self.transform_mapping(map, context),
            Node::Sequence(items) => {
                for item in items.iter_mut() {
                    self.transform(item, context);
                }
            }
            Node::Scalar => {}
        }
    }

    fn transform_mapping(&mut self, map: &mut Map<String, Value>, context: &str) {
        for (key, value) in map.iter_mut() {
            if !self.remap_entry(key, value, context) {
                self.transform(value, key);
            }
        }
    }

    /// Replaces `value` if it is an identifier and `key` is eligible in
    /// `context`. Returns whether a replacement happened.
    pub fn remap_entry(&mut self, key: &str, value: &mut Value, context: &str) -> bool {
        let Value::String(old) = value else {
            return false;
        };
        if !is_identifier_str(old) || !self.classifier.should_change(key, context) {
            return false;
        }

        let new = self.cache.resolve(old);
        tracing::debug!(key, context, old = %old, new = %new, "regenerated identifier");
        *old = new;
        true
    }

    /// Replaces `value` if it is an identifier, regardless of classification.
    pub fn remap_identifier(&mut self, value: &mut Value) -> bool {
        let Value::String(old) = value else {
            return false;
        };
        if !is_identifier_str(old) {
            return false;
        }

        *old = self.cache.resolve(old);
        true
    }

    /// Processes the realm's `users` list.
    ///
    /// Each user's own `id` is skipped entirely. Every other field of the
    /// record is handled with context `users`, both when classified and when
    /// descended into, so nested credential and federation data cannot
    /// regenerate an `id` either. Anything that is not a list of records is
    /// traversed generically under the same context.
    pub fn transform_users(&mut self, users: &mut Value) {
        match Node::from(users) {
            Node::Sequence(records) => {
                for record in records.iter_mut() {
                    match Node::from(record) {
                        Node::Mapping(fields) => self.transform_user(fields),
                        other => self.transform_node(other, USERS_CONTEXT),
                    }
                }
            }
            other => self.transform_node(other, USERS_CONTEXT),
        }
    }

    fn transform_user(&mut self, fields: &mut Map<String, Value>) {
        for (key, value) in fields.iter_mut() {
            if key == USER_ID_KEY {
                continue;
            }
            if !self.remap_entry(key, value, USERS_CONTEXT) {
                self.transform(value, USERS_CONTEXT);
            }
        }
    }
}
