//! Realm export documents.
//!
//! Loads a realm export into a generic JSON tree, exposes the few root fields
//! the tools care about, and writes the tree back out in its original key
//! order.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use kc_core::{Error, Result};
use serde_json::{Map, Value};

/// Root key holding the realm name.
pub const REALM_KEY: &str = "realm";

/// Root key holding the realm identifier.
pub const REALM_ID_KEY: &str = "id";

/// Root key holding the user records.
pub const USERS_KEY: &str = "users";

/// A realm export whose root is a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct RealmDocument {
    root: Map<String, Value>,
}

impl RealmDocument {
    /// Wraps a parsed value, rejecting anything but an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(Error::RootNotObject),
        }
    }

    /// Reads and parses a realm export from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Serializes the document with 2-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let content = self.to_pretty_json()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The realm name field, if present.
    #[must_use]
    pub fn realm_name(&self) -> Option<&Value> {
        self.root.get(REALM_KEY)
    }

    /// The root identifier field, if present.
    #[must_use]
    pub fn realm_id(&self) -> Option<&Value> {
        self.root.get(REALM_ID_KEY)
    }

    /// Overwrites the realm name, returning the previous value.
    ///
    /// Does nothing when the document has no `realm` field or `name` is
    /// empty.
    pub fn rename_realm(&mut self, name: &str) -> Option<Value> {
        if name.is_empty() {
            return None;
        }
        let realm = self.root.get_mut(REALM_KEY)?;
        Some(std::mem::replace(realm, Value::String(name.to_string())))
    }

    /// Number of user records, if the document has a `users` field.
    #[must_use]
    pub fn user_count(&self) -> Option<usize> {
        self.root.get(USERS_KEY).map(count_entries)
    }

    /// Number of entries under a root key; 0 when absent.
    #[must_use]
    pub fn count(&self, key: &str) -> usize {
        self.root.get(key).map_or(0, count_entries)
    }

    /// Read access to the root object.
    #[must_use]
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.root
    }

    /// Unwraps the document into a plain JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }
}

impl FromStr for RealmDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(s)?)
    }
}

/// Counts the elements of a list or the entries of an object.
pub(crate) fn count_entries(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        _ => 0,
    }
}

/// Derives the output path by replacing every `.json` in `input` with
/// `suffix`.
///
/// When the path has no `.json` at all the suffix is appended, so the input
/// is never overwritten.
#[must_use]
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let input = input.to_string_lossy();
    if input.contains(".json") {
        PathBuf::from(input.replace(".json", suffix))
    } else {
        PathBuf::from(format!("{input}{suffix}"))
    }
}

/// Renders a field for the operator: strings bare, anything else as JSON.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
