//! Local contact → member record mapping

use std::collections::BTreeMap;

use responsys_domain::constants::EMAIL_ADDRESS_COLUMN;
use responsys_domain::{MappingConfig, Record, ResponsysError, Result};
use serde_json::Value;

/// Customer as the storefront knows it: attribute name → value, plus
/// whether the welcome event should be raised for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalContact {
    pub attributes: BTreeMap<String, String>,
    pub welcome: bool,
}

impl LocalContact {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_welcome(mut self, welcome: bool) -> Self {
        self.welcome = welcome;
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Applies a [`MappingConfig`] to local contacts.
#[derive(Debug, Clone)]
pub struct ContactMapper {
    mapping: MappingConfig,
}

impl ContactMapper {
    pub fn new(mapping: MappingConfig) -> Self {
        Self { mapping }
    }

    /// Remote columns in mapping order.
    pub fn remote_columns(&self) -> Vec<&str> {
        self.mapping.columns.iter().map(|c| c.remote.as_str()).collect()
    }

    /// Local attributes in mapping order.
    pub fn local_attributes(&self) -> Vec<&str> {
        self.mapping.columns.iter().map(|c| c.local.as_str()).collect()
    }

    /// Remote column holding the contact key.
    ///
    /// # Errors
    /// `Config` when the key attribute is not mapped.
    pub fn match_column(&self) -> Result<&str> {
        self.mapping.remote_column_for(&self.mapping.key_attribute).ok_or_else(|| {
            ResponsysError::Config(format!(
                "key attribute '{}' is not mapped to a remote column",
                self.mapping.key_attribute
            ))
        })
    }

    /// Build the member record for a contact.
    ///
    /// Mapped columns come first in mapping order; attributes the contact
    /// lacks are sent as nil. Defaults follow for columns the mapping does
    /// not produce.
    pub fn to_record(&self, contact: &LocalContact) -> Record {
        let mut record = Record::new();

        for column in &self.mapping.columns {
            let value = contact
                .attribute(&column.local)
                .map_or(Value::Null, |v| Value::String(v.to_string()));
            record.insert(column.remote.clone(), value);
        }

        for default in &self.mapping.defaults {
            if !record.contains_field(&default.column) {
                record.insert(default.column.clone(), default.value.clone());
            }
        }

        record
    }

    /// Non-blank email address of a contact, via the attribute mapped to
    /// the email column.
    pub fn email_of<'c>(&self, contact: &'c LocalContact) -> Option<&'c str> {
        let attribute = self.mapping.local_attribute_for(EMAIL_ADDRESS_COLUMN)?;
        contact.attribute(attribute).map(str::trim).filter(|email| !email.is_empty())
    }
}
