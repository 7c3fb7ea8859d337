//! End-to-End Integration Tests
//!
//! These tests run the migration tools against a realistic realm export
//! written to a temporary directory.

mod common;
mod regeneration;
