//! Read-only export statistics.

use std::fmt;
use std::path::Path;

use kc_core::Result;
use serde_json::Value;

use crate::document::{count_entries, display_value, RealmDocument};

/// Summary of a realm export, as shown by the validation tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStatistics {
    /// Realm name, if the export has one.
    pub realm_name: Option<String>,
    /// Root identifier, if the export has one.
    pub realm_id: Option<String>,
    /// Number of user records.
    pub users: usize,
    /// Number of clients.
    pub clients: usize,
    /// Number of realm-level roles.
    pub realm_roles: usize,
    /// Number of top-level groups.
    pub groups: usize,
    /// Size of the export file in bytes.
    pub file_size: u64,
}

impl ExportStatistics {
    /// Computes statistics for a parsed document.
    #[must_use]
    pub fn collect(document: &RealmDocument, file_size: u64) -> Self {
        let realm_roles = match document.root().get("roles") {
            Some(Value::Object(roles)) => roles.get("realm").map_or(0, count_entries),
            _ => 0,
        };

        Self {
            realm_name: document.realm_name().map(display_value),
            realm_id: document.realm_id().map(display_value),
            users: document.count("users"),
            clients: document.count("clients"),
            realm_roles,
            groups: document.count("groups"),
            file_size,
        }
    }

    /// Loads `path` and computes its statistics.
    pub fn from_file(path: &Path) -> Result<Self> {
        let document = RealmDocument::load(path)?;
        let file_size = std::fs::metadata(path)?.len();
        Ok(Self::collect(&document, file_size))
    }

    /// Returns whether the export names its realm.
    #[must_use]
    pub fn has_realm_name(&self) -> bool {
        self.realm_name.is_some()
    }

    /// File size in mebibytes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn file_size_mib(&self) -> f64 {
        self.file_size as f64 / (1024.0 * 1024.0)
    }
}

impl fmt::Display for ExportStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Realm Name: {}", self.realm_name.as_deref().unwrap_or("N/A"))?;
        writeln!(f, "Realm ID: {}", self.realm_id.as_deref().unwrap_or("N/A"))?;
        writeln!(f, "Users: {}", self.users)?;
        writeln!(f, "Clients: {}", self.clients)?;
        writeln!(f, "Realm Roles: {}", self.realm_roles)?;
        writeln!(f, "Groups: {}", self.groups)?;
        write!(
            f,
            "File Size: {} bytes ({:.1} MB)",
            format_thousands(self.file_size),
            self.file_size_mib()
        )
    }
}

/// Formats `n` with comma thousands separators.
#[must_use]
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
