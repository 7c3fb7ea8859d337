//! Command implementations.

pub mod regenerate;
pub mod validate;

pub use regenerate::{process_realm_export, run_regenerate};
pub use validate::{failure_message, run_validate};
