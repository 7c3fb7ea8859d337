//! # kc-migration
//!
//! Selective identifier regeneration for Keycloak realm exports.
//!
//! A realm export is walked as a generic JSON tree. Structural identifiers
//! (clients, roles, flows, components, mappers, credentials, the realm itself)
//! are replaced with freshly generated UUIDs, while user and group identities
//! are preserved. Every occurrence of the same old identifier receives the
//! same new value, so references between objects stay intact.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use kc_migration::{output_path, RealmDocument, RealmMigration};
//!
//! # fn main() -> kc_core::Result<()> {
//! let input = Path::new("MyRealm-export.json");
//! let mut document = RealmDocument::load(input)?;
//! document.rename_realm("MyRealm-Dev");
//!
//! let mut migration = RealmMigration::default();
//! migration.regenerate(&mut document);
//!
//! document.write(&output_path(input, "-selective.json"))?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod cache;
pub mod classify;
pub mod document;
pub mod identifier;
pub mod migration;
pub mod remap;
pub mod report;

pub use cache::IdentifierCache;
pub use classify::{KeyClass, KeyClassifier};
pub use document::{display_value, output_path, RealmDocument};
pub use identifier::{generate_identifier, is_identifier, is_identifier_str};
pub use migration::RealmMigration;
pub use remap::{Node, Remapper};
pub use report::{format_thousands, ExportStatistics};
