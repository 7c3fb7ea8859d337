//! # kc-cli
//!
//! Command-line tools for migrating Keycloak realm exports.
//!
//! This crate provides two binaries:
//! - `kc-regenerate-ids`: selective UUID regeneration, preserving user and
//!   group identities
//! - `kc-validate-export`: structural check and statistics for an export

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{RegenerateArgs, ValidateArgs};
pub use error::{CliError, CliResult};
