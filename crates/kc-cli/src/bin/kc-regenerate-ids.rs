//! # kc-regenerate-ids
//!
//! Selectively regenerates UUIDs in a Keycloak realm export.

#![forbid(unsafe_code)]
#![deny(warnings)]

use kc_cli::{cli::parse_args, commands::run_regenerate, logging::init_tracing, output::error};
use kc_cli::RegenerateArgs;

fn main() {
    let args: RegenerateArgs = parse_args();

    if let Err(e) = init_tracing(args.verbose) {
        error(&format!("Error: {e}"));
        std::process::exit(1);
    }

    if let Err(e) = run_regenerate(&args) {
        error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
