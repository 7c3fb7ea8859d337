//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Keycloak Realm Migration Tool - selectively regenerates UUIDs in a realm
/// export while preserving user and group IDs.
#[derive(Debug, Parser)]
#[command(name = "kc-regenerate-ids")]
#[command(author, version, long_about = None)]
#[command(after_help = "Examples:\n  \
    kc-regenerate-ids MyRealm-export.json\n  \
    kc-regenerate-ids MyRealm-export.json MyRealm-Dev")]
pub struct RegenerateArgs {
    /// Realm export file.
    pub file: PathBuf,

    /// New realm name (applied only if the export has a `realm` field).
    pub new_realm_name: Option<String>,

    /// Key policy configuration file (TOML).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validates a Keycloak realm export and prints basic statistics.
#[derive(Debug, Parser)]
#[command(name = "kc-validate-export")]
#[command(author, version, long_about = None)]
pub struct ValidateArgs {
    /// Realm export file.
    pub file: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses the process arguments, exiting with status 1 on usage errors.
///
/// `--help` and `--version` still exit with status 0.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    }
}
