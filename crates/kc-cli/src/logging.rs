//! Tracing setup for the binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{CliError, CliResult};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "kc_migration=debug,kc_cli=debug";

/// Installs a stderr tracing subscriber when `verbose` is set.
///
/// Standard output is left to the operator report either way.
pub fn init_tracing(verbose: bool) -> CliResult<()> {
    if !verbose {
        return Ok(());
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
