//! Common test utilities and fixtures.

use std::path::{Path, PathBuf};

use serde_json::{json, Value};

pub const REALM_ID: &str = "4b3c1e2a-7f0d-4a8e-9c6b-1d2e3f4a5b6c";
pub const ROLE_DEFAULT: &str = "0f8e7d6c-5b4a-4392-8170-6f5e4d3c2b1a";
pub const ROLE_OFFLINE: &str = "1a2b3c4d-5e6f-4708-9192-a3b4c5d6e7f8";
pub const GROUP_STAFF: &str = "2c3d4e5f-6a7b-4c8d-9e0f-1a2b3c4d5e6f";
pub const GROUP_ADMINS: &str = "3d4e5f6a-7b8c-4d9e-8f1a-2b3c4d5e6f7a";
pub const CLIENT_ACCOUNT: &str = "5e6f7a8b-9c0d-4e1f-8a2b-3c4d5e6f7a8b";
pub const MAPPER_LOCALE: &str = "6f7a8b9c-0d1e-4f2a-9b3c-4d5e6f7a8b9c";
pub const SCOPE_PROFILE: &str = "7a8b9c0d-1e2f-4a3b-8c4d-5e6f7a8b9c0d";
pub const FLOW_BROWSER: &str = "8b9c0d1e-2f3a-4b4c-9d5e-6f7a8b9c0d1e";
pub const CONFIG_OTP: &str = "9c0d1e2f-3a4b-4c5d-8e6f-7a8b9c0d1e2f";
pub const COMPONENT_RSA: &str = "ad1e2f3a-4b5c-4d6e-9f7a-8b9c0d1e2f3a";
pub const USER_ALICE: &str = "be2f3a4b-5c6d-4e7f-8a8b-9c0d1e2f3a4b";
pub const CREDENTIAL_ALICE: &str = "cf3a4b5c-6d7e-4f8a-9b9c-0d1e2f3a4b5c";

/// A trimmed-down but structurally faithful Keycloak realm export.
pub fn sample_export() -> Value {
    json!({
        "id": REALM_ID,
        "realm": "Demo",
        "enabled": true,
        "sslRequired": "external",
        "roles": {
            "realm": [
                { "id": ROLE_DEFAULT, "name": "default-roles-demo", "composite": true, "containerId": REALM_ID },
                { "id": ROLE_OFFLINE, "name": "offline_access", "composite": false, "containerId": REALM_ID }
            ],
            "client": {
                "account": [
                    { "id": "e04b5c6d-7e8f-4a9b-8c0d-1e2f3a4b5c6d", "name": "manage-account", "containerId": CLIENT_ACCOUNT }
                ]
            }
        },
        "groups": [
            {
                "id": GROUP_STAFF,
                "name": "staff",
                "path": "/staff",
                "subGroups": [
                    { "id": GROUP_ADMINS, "name": "admins", "path": "/staff/admins", "subGroups": [] }
                ]
            }
        ],
        "defaultRole": { "id": ROLE_DEFAULT, "name": "default-roles-demo", "containerId": REALM_ID },
        "users": [
            {
                "id": USER_ALICE,
                "username": "alice",
                "enabled": true,
                "credentials": [
                    { "id": CREDENTIAL_ALICE, "type": "password", "credentialData": "{\"hashIterations\":27500}" }
                ],
                "realmRoles": ["default-roles-demo"],
                "groups": ["/staff/admins"],
                "clientConsents": [ { "clientId": CLIENT_ACCOUNT, "grantedClientScopes": ["profile"] } ]
            }
        ],
        "clients": [
            {
                "id": CLIENT_ACCOUNT,
                "clientId": "account",
                "publicClient": true,
                "protocolMappers": [
                    { "id": MAPPER_LOCALE, "name": "locale", "protocol": "openid-connect" }
                ]
            }
        ],
        "clientScopes": [
            { "id": SCOPE_PROFILE, "name": "profile", "protocol": "openid-connect" }
        ],
        "authenticationFlows": [
            {
                "id": FLOW_BROWSER,
                "alias": "browser",
                "authenticationExecutions": [
                    { "authenticator": "auth-otp-form", "authenticatorConfig": "otp-config", "priority": 20 }
                ]
            }
        ],
        "authenticatorConfig": [
            { "id": CONFIG_OTP, "alias": "otp-config", "config": {} }
        ],
        "components": {
            "org.keycloak.keys.KeyProvider": [
                { "id": COMPONENT_RSA, "name": "rsa-generated", "providerId": "rsa-generated", "parentId": REALM_ID, "config": { "priority": ["100"] } }
            ]
        }
    })
}

/// Writes `value` as `<name>` inside `dir`.
pub fn write_export(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

/// Reads a JSON file back into a value.
pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}
