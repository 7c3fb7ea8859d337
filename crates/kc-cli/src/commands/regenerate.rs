//! Selective UUID regeneration command.

use std::path::{Path, PathBuf};

use kc_core::MigrationConfig;
use kc_migration::{display_value, output_path, RealmDocument, RealmMigration};

use crate::cli::RegenerateArgs;
use crate::output::{info, rule, success, SUMMARY_RULE};

/// Runs the regeneration command.
pub fn run_regenerate(args: &RegenerateArgs) -> crate::CliResult<PathBuf> {
    if !args.file.exists() {
        return Err(kc_core::Error::NotFound(args.file.clone()).into());
    }

    let config = MigrationConfig::load(args.config.as_deref())?;
    let mut migration = RealmMigration::new(config.policy);

    println!("Keycloak Realm Migration Tool");
    println!("Preserving: User IDs, Group IDs");
    println!("Regenerating: Structural IDs to prevent conflicts");
    rule(SUMMARY_RULE);

    let output_file = process_realm_export(
        &mut migration,
        &args.file,
        args.new_realm_name.as_deref(),
        &config.output_suffix,
    )?;

    rule(SUMMARY_RULE);
    success(&format!(
        "Migration complete! UUIDs regenerated: {}",
        migration.regenerated()
    ));
    println!("Output file: {}", output_file.display());

    Ok(output_file)
}

/// Regenerates identifiers in one export and writes the result next to it.
///
/// Nothing is written unless the whole document was transformed.
pub fn process_realm_export(
    migration: &mut RealmMigration,
    file: &Path,
    new_realm_name: Option<&str>,
    output_suffix: &str,
) -> crate::CliResult<PathBuf> {
    info(&format!("Processing realm export: {}", file.display()));

    let mut document = RealmDocument::load(file)?;

    if let Some(name) = new_realm_name {
        if let Some(previous) = document.rename_realm(name) {
            info(&format!(
                "Updating realm name: {} -> {}",
                display_value(&previous),
                name
            ));
        }
    }

    if let Some(users) = document.user_count() {
        info(&format!("Processing {} users (preserving user IDs)", users));
    }

    migration.regenerate(&mut document);

    let output_file = output_path(file, output_suffix);
    document.write(&output_file)?;
    tracing::debug!(output = %output_file.display(), "wrote regenerated export");

    success(&format!("Generated: {}", output_file.display()));
    Ok(output_file)
}
