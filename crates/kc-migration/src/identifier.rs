//! Identifier format check and generation.

use serde_json::Value;
use uuid::Uuid;

/// Length of a hyphenated UUID string.
pub const IDENTIFIER_LEN: usize = 36;

/// Returns whether a JSON value is a canonical hyphenated UUID string.
///
/// Non-string values always return `false`.
#[must_use]
pub fn is_identifier(value: &Value) -> bool {
    value.as_str().is_some_and(is_identifier_str)
}

/// Returns whether `value` is exactly 36 characters in the 8-4-4-4-12
/// hyphenated UUID form.
///
/// Simple, braced and URN forms are rejected even though they denote valid
/// UUIDs.
#[must_use]
pub fn is_identifier_str(value: &str) -> bool {
    value.len() == IDENTIFIER_LEN && Uuid::parse_str(value).is_ok()
}

/// Generates a fresh random identifier in hyphenated form.
#[must_use]
pub fn generate_identifier() -> String {
    Uuid::new_v4().hyphenated().to_string()
}
