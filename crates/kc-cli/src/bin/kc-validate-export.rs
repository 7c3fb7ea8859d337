//! # kc-validate-export
//!
//! Validates a Keycloak realm export and prints basic statistics.

#![forbid(unsafe_code)]
#![deny(warnings)]

use kc_cli::{
    cli::parse_args,
    commands::{failure_message, run_validate},
    logging::init_tracing,
    output::error,
    ValidateArgs,
};

fn main() {
    let args: ValidateArgs = parse_args();

    if let Err(e) = init_tracing(args.verbose) {
        error(&failure_message(&e));
        std::process::exit(1);
    }

    if let Err(e) = run_validate(&args) {
        error(&failure_message(&e));
        std::process::exit(1);
    }
}
