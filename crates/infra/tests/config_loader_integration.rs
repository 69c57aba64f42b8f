//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use responsys_domain::{InteractObject, ResponsysError};
use responsys_infra::config;
use tempfile::NamedTempFile;

fn write_config(contents: &str, suffix: &str) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");
    temp_file
}

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "enabled": true,
        "credentials": { "username": "api_user", "password": "s3cret" },
        "endpoint": "https://ws2.responsys.net/webservices/services/ResponsysWSService",
        "timeout_secs": 45,
        "objects": {
            "member": { "folderName": "Shop", "objectName": "CUSTOMERS" },
            "url": { "folderName": "_Programs", "objectName": "URL_PET" },
            "welcome": { "folderName": "_Programs", "objectName": "CUSTOMERS" }
        },
        "welcome_event": "storefront_signup"
    }"#;
    let file = write_config(json_content, ".json");

    let config = config::load_from_file(Some(file.path().to_path_buf()))
        .expect("Failed to load config from JSON file");

    assert!(config.enabled);
    assert_eq!(config.credentials.username, "api_user");
    assert_eq!(config.timeout_secs, 45);
    assert_eq!(config.locator(InteractObject::Member).object_name, "CUSTOMERS");
    assert_eq!(config.welcome_event, "storefront_signup");
    // Mapping falls back to its defaults when omitted
    assert_eq!(config.mapping.key_attribute, "apparel21_person_id");
}

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
enabled = true
welcome_event = "onlinesignup"

[credentials]
username = "api_user"
password = "s3cret"

[mapping]
key_attribute = "customer_number"
columns = [
    { remote = "CUSTOMER_ID_", local = "customer_number" },
    { remote = "EMAIL_ADDRESS_", local = "email" },
]
defaults = [{ column = "EMAIL_PERMISSION_STATUS_", value = "O" }]

[log]
level = "debug"
"#;
    let file = write_config(toml_content, ".toml");

    let config = config::load_from_file(Some(file.path().to_path_buf()))
        .expect("Failed to load config from TOML file");

    assert_eq!(config.mapping.columns.len(), 2);
    assert_eq!(config.mapping.remote_column_for("customer_number"), Some("CUSTOMER_ID_"));
    assert_eq!(config.mapping.defaults[0].value, "O");
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.log.file_name, "responsys.log");
}

#[test]
fn test_load_config_rejects_plain_http_endpoint() {
    let json_content = r#"{
        "enabled": true,
        "credentials": { "username": "api_user", "password": "s3cret" },
        "endpoint": "http://ws2.responsys.net/webservices/services/ResponsysWSService"
    }"#;
    let file = write_config(json_content, ".json");

    match config::load_from_file(Some(file.path().to_path_buf())) {
        Err(ResponsysError::Config(msg)) => assert!(msg.contains("https"), "got: {msg}"),
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_load_config_rejects_unmapped_key_attribute() {
    let toml_content = r#"
enabled = true

[credentials]
username = "api_user"
password = "s3cret"

[mapping]
key_attribute = "customer_number"
columns = [{ remote = "EMAIL_ADDRESS_", local = "email" }]
"#;
    let file = write_config(toml_content, ".toml");

    match config::load_from_file(Some(file.path().to_path_buf())) {
        Err(ResponsysError::Config(msg)) => assert!(msg.contains("customer_number")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_load_config_from_nonexistent_file() {
    let result = config::load_from_file(Some("/nonexistent/path/responsys.json".into()));

    match result {
        Err(ResponsysError::Config(msg)) => {
            assert!(msg.contains("not found"), "Error message should mention 'not found'");
        }
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_load_config_with_invalid_format() {
    let file = write_config(r#"{ "this is": "not valid" "#, ".json");

    match config::load_from_file(Some(file.path().to_path_buf())) {
        Err(ResponsysError::Config(msg)) => {
            assert!(msg.contains("Invalid JSON"), "Error message should mention invalid JSON");
        }
        other => panic!("Expected Config error, got {other:?}"),
    }
}
