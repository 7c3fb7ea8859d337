//! Selective regeneration over a full realm export.

use kc_cli::commands::process_realm_export;
use kc_core::{KeyPolicy, MigrationConfig};
use kc_migration::{is_identifier, RealmMigration};
use serde_json::Value;

use crate::common::*;

fn migrate(export: &Value, new_name: Option<&str>) -> (Value, RealmMigration) {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path(), "Demo-export.json", export);
    let mut migration = RealmMigration::default();

    let output = process_realm_export(&mut migration, &input, new_name, "-selective.json").unwrap();

    assert_eq!(output, dir.path().join("Demo-export-selective.json"));
    (read_json(&output), migration)
}

fn new_id<'a>(migration: &'a RealmMigration, old: &str) -> &'a str {
    migration
        .cache()
        .get(old)
        .unwrap_or_else(|| panic!("{old} was not regenerated"))
}

#[test]
fn structural_ids_are_regenerated() {
    let (out, migration) = migrate(&sample_export(), Some("Demo-Dev"));

    assert_eq!(out["realm"], "Demo-Dev");
    assert_eq!(out["id"], new_id(&migration, REALM_ID));
    assert_eq!(out["roles"]["realm"][1]["id"], new_id(&migration, ROLE_OFFLINE));
    assert_eq!(out["clients"][0]["id"], new_id(&migration, CLIENT_ACCOUNT));
    assert_eq!(
        out["clients"][0]["protocolMappers"][0]["id"],
        new_id(&migration, MAPPER_LOCALE)
    );
    assert_eq!(out["clientScopes"][0]["id"], new_id(&migration, SCOPE_PROFILE));
    assert_eq!(out["authenticationFlows"][0]["id"], new_id(&migration, FLOW_BROWSER));
    assert_eq!(out["authenticatorConfig"][0]["id"], new_id(&migration, CONFIG_OTP));
    assert_eq!(
        out["components"]["org.keycloak.keys.KeyProvider"][0]["id"],
        new_id(&migration, COMPONENT_RSA)
    );
}

#[test]
fn user_and_group_identities_are_preserved() {
    let (out, _) = migrate(&sample_export(), None);

    assert_eq!(out["users"][0]["id"], USER_ALICE);
    assert_eq!(out["users"][0]["credentials"][0]["id"], CREDENTIAL_ALICE);
    assert_eq!(out["groups"][0]["id"], GROUP_STAFF);
}

#[test]
fn shared_identifiers_stay_consistent() {
    let (out, migration) = migrate(&sample_export(), None);

    let role = new_id(&migration, ROLE_DEFAULT);
    assert_eq!(out["roles"]["realm"][0]["id"], role);
    assert_eq!(out["defaultRole"]["id"], role);

    // a client referenced from inside a user record gets the same new id
    let client = new_id(&migration, CLIENT_ACCOUNT);
    assert_eq!(out["users"][0]["clientConsents"][0]["clientId"], client);
    assert_eq!(out["clients"][0]["id"], client);
}

#[test]
fn only_the_immediate_parent_key_is_context() {
    let (out, migration) = migrate(&sample_export(), None);

    // nested groups sit under `subGroups`, which is not a protected context
    assert_eq!(
        out["groups"][0]["subGroups"][0]["id"],
        new_id(&migration, GROUP_ADMINS)
    );
}

#[test]
fn unclassified_references_are_not_rewritten() {
    let (out, _) = migrate(&sample_export(), None);

    assert_eq!(out["roles"]["realm"][0]["containerId"], REALM_ID);
    assert_eq!(
        out["components"]["org.keycloak.keys.KeyProvider"][0]["parentId"],
        REALM_ID
    );
    assert_eq!(out["clients"][0]["clientId"], "account");
}

#[test]
fn non_identifier_content_is_untouched() {
    let export = sample_export();
    let (out, migration) = migrate(&export, None);

    assert_eq!(out["sslRequired"], export["sslRequired"]);
    assert_eq!(
        out["users"][0]["credentials"][0]["credentialData"],
        export["users"][0]["credentials"][0]["credentialData"]
    );
    assert_eq!(
        out["components"]["org.keycloak.keys.KeyProvider"][0]["config"],
        export["components"]["org.keycloak.keys.KeyProvider"][0]["config"]
    );
    for (_, new) in migration.cache().iter() {
        assert!(is_identifier(&Value::from(new)));
    }
}

#[test]
fn output_preserves_key_order() {
    let (out, _) = migrate(&sample_export(), None);

    let keys: Vec<&str> = out.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(&keys[..4], &["id", "realm", "enabled", "sslRequired"]);
}

#[test]
fn custom_policy_protects_extra_contexts() {
    let config = MigrationConfig::from_toml(
        r#"
        [policy]
        protected_contexts = ["users", "groups", "subGroups"]
        "#,
    )
    .unwrap();
    assert_ne!(config.policy, KeyPolicy::default());

    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path(), "Demo-export.json", &sample_export());
    let mut migration = RealmMigration::new(config.policy);

    let output =
        process_realm_export(&mut migration, &input, None, &config.output_suffix).unwrap();

    let out = read_json(&output);
    assert_eq!(out["groups"][0]["subGroups"][0]["id"], GROUP_ADMINS);
    assert!(migration.cache().get(GROUP_ADMINS).is_none());
}
