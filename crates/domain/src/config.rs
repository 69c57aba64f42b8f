//! Connector configuration structures
//!
//! Supplied by the hosting storefront: API credentials, the enabled flag,
//! the column mapping between remote columns and local customer attributes,
//! and the locators of the objects the connector writes to.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ENDPOINT, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_WELCOME_EVENT,
};
use crate::errors::{ResponsysError, Result};
use crate::types::{InteractObject, Locator};

/// Top-level connector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsysConfig {
    #[serde(default)]
    pub enabled: bool,
    pub credentials: Credentials,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub mapping: MappingConfig,
    #[serde(default)]
    pub objects: ObjectsConfig,
    #[serde(default = "default_welcome_event")]
    pub welcome_event: String,
    #[serde(default)]
    pub log: LogConfig,
}

impl ResponsysConfig {
    /// Configuration with the given credentials and every other setting at
    /// its default.
    pub fn with_credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            enabled: true,
            credentials: Credentials::new(username, password),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            mapping: MappingConfig::default(),
            objects: ObjectsConfig::default(),
            welcome_event: default_welcome_event(),
            log: LogConfig::default(),
        }
    }

    /// Locator configured for a logical storefront object.
    pub fn locator(&self, object: InteractObject) -> &Locator {
        match object {
            InteractObject::Member => &self.objects.member,
            InteractObject::Url => &self.objects.url,
            InteractObject::Welcome => &self.objects.welcome,
        }
    }

    /// Check invariants that do not need I/O.
    ///
    /// # Errors
    /// `ResponsysError::Config` naming the first violated setting.
    pub fn validate(&self) -> Result<()> {
        if self.enabled {
            if self.credentials.username.trim().is_empty() {
                return Err(ResponsysError::Config("API username is required".into()));
            }
            if self.credentials.password.is_empty() {
                return Err(ResponsysError::Config("API password is required".into()));
            }
        }
        if self.timeout_secs == 0 {
            return Err(ResponsysError::Config("timeout_secs must be positive".into()));
        }
        if self.mapping.columns.is_empty() {
            return Err(ResponsysError::Config("column mapping is empty".into()));
        }
        if self.mapping.remote_column_for(&self.mapping.key_attribute).is_none() {
            return Err(ResponsysError::Config(format!(
                "key attribute '{}' is not mapped to a remote column",
                self.mapping.key_attribute
            )));
        }
        Ok(())
    }
}

/// API account credentials. `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Remote column → local attribute pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub remote: String,
    pub local: String,
}

impl ColumnMapping {
    pub fn new(remote: impl Into<String>, local: impl Into<String>) -> Self {
        Self { remote: remote.into(), local: local.into() }
    }
}

/// Value sent for a remote column that has no local counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefault {
    pub column: String,
    pub value: String,
}

/// Field mapping between remote member columns and local customer
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingConfig {
    pub columns: Vec<ColumnMapping>,
    #[serde(default)]
    pub defaults: Vec<ColumnDefault>,
    /// Local attribute holding the unique customer identifier.
    pub key_attribute: String,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnMapping::new("CUSTOMER_ID_", "apparel21_person_id"),
                ColumnMapping::new("EMAIL_ADDRESS_", "email"),
                ColumnMapping::new("FIRST_NAME", "firstname"),
                ColumnMapping::new("LAST_NAME", "lastname"),
            ],
            defaults: vec![ColumnDefault {
                column: "EMAIL_PERMISSION_STATUS_".into(),
                value: "I".into(),
            }],
            key_attribute: "apparel21_person_id".into(),
        }
    }
}

impl MappingConfig {
    pub fn remote_column_for(&self, local: &str) -> Option<&str> {
        self.columns.iter().find(|c| c.local == local).map(|c| c.remote.as_str())
    }

    pub fn local_attribute_for(&self, remote: &str) -> Option<&str> {
        self.columns.iter().find(|c| c.remote == remote).map(|c| c.local.as_str())
    }
}

/// Locators of the three logical objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectsConfig {
    pub member: Locator,
    pub url: Locator,
    pub welcome: Locator,
}

impl Default for ObjectsConfig {
    fn default() -> Self {
        Self {
            member: Locator::new("!MasterData", "METALICUS_LIST"),
            url: Locator::new("_Programs", "ME_PR_WelcomeSequence_PET"),
            welcome: Locator::new("_Programs", "METALICUS_LIST"),
        }
    }
}

/// Where connector log lines go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Directory for the log file; stderr when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default = "default_log_file")]
    pub file_name: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { directory: None, file_name: default_log_file(), level: default_log_level() }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_welcome_event() -> String {
    DEFAULT_WELCOME_EVENT.to_string()
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_password() {
        let creds = Credentials::new("api_user", "hunter2");
        let printed = format!("{creds:?}");
        assert!(printed.contains("api_user"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn minimal_json_fills_defaults() {
        let config: ResponsysConfig = serde_json::from_str(
            r#"{"enabled": true, "credentials": {"username": "u", "password": "p"}}"#,
        )
        .unwrap();

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.welcome_event, "onlinesignup");
        assert_eq!(config.locator(InteractObject::Member).folder_name, "!MasterData");
        assert_eq!(config.mapping.remote_column_for("email"), Some("EMAIL_ADDRESS_"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn enabled_config_requires_credentials() {
        let mut config = ResponsysConfig::with_credentials("", "p");
        assert!(matches!(config.validate(), Err(ResponsysError::Config(_))));

        config.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unmapped_key_attribute_is_rejected() {
        let mut config = ResponsysConfig::with_credentials("u", "p");
        config.mapping.key_attribute = "customer_uuid".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("customer_uuid"));
    }

    #[test]
    fn each_logical_object_resolves_to_its_locator() {
        let mut config = ResponsysConfig::with_credentials("u", "p");
        config.objects.url = Locator::new("_Programs", "STOREFRONT_URL_PET");

        assert_eq!(config.locator(InteractObject::Url).object_name, "STOREFRONT_URL_PET");
        assert_eq!(config.locator(InteractObject::Welcome), &config.objects.welcome);
        assert_eq!(config.locator(InteractObject::Member).object_name, "METALICUS_LIST");
    }
}
