//! Configuration for the realm migration tools.
//!
//! Every field has a default matching Keycloak's realm export layout, so a
//! configuration file only needs to name the values it overrides.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Main configuration structure for a migration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Which identifier keys are regenerated and which are preserved.
    pub policy: KeyPolicy,
    /// Replacement for `.json` when deriving the output file name.
    pub output_suffix: String,
}

/// Identifier key sets used to classify fields during regeneration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyPolicy {
    /// Keys whose identifier values are never regenerated.
    pub preserved_keys: BTreeSet<String>,
    /// Keys whose identifier values are always regenerated.
    pub change_keys: BTreeSet<String>,
    /// Generic identifier key, regenerated unless inside a protected context.
    pub context_key: String,
    /// Enclosing key names under which `context_key` is preserved.
    pub protected_contexts: BTreeSet<String>,
}

fn string_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

impl Default for KeyPolicy {
    fn default() -> Self {
        Self {
            preserved_keys: string_set(&["userId", "groupId"]),
            change_keys: string_set(&[
                "realmId",
                "clientId",
                "roleId",
                "clientScopeId",
                "authenticationFlowId",
                "authenticatorConfigId",
                "protocolMapperId",
                "componentId",
                "credentialId",
            ]),
            context_key: "id".to_string(),
            protected_contexts: string_set(&["users", "groups"]),
        }
    }
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            policy: KeyPolicy::default(),
            output_suffix: "-selective.json".to_string(),
        }
    }
}

impl MigrationConfig {
    /// Loads configuration from a TOML file, or the defaults when no file is
    /// given.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Err(crate::Error::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| crate::Error::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can drive a migration.
    pub fn validate(&self) -> crate::Result<()> {
        if self.output_suffix.is_empty() {
            return Err(crate::Error::Config(
                "output_suffix must not be empty".to_string(),
            ));
        }
        if self.policy.context_key.is_empty() {
            return Err(crate::Error::Config(
                "policy.context_key must not be empty".to_string(),
            ));
        }
        if let Some(key) = self
            .policy
            .preserved_keys
            .intersection(&self.policy.change_keys)
            .next()
        {
            return Err(crate::Error::Config(format!(
                "key '{key}' is both preserved and regenerated"
            )));
        }
        Ok(())
    }
}
