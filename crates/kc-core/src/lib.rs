//! # kc-core
//!
//! Core error handling and configuration for the Keycloak realm migration
//! tools.
//!
//! This crate provides the foundational types shared by the migration library
//! and the command-line tools.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod error;

pub use config::{KeyPolicy, MigrationConfig};
pub use error::{Error, Result};
