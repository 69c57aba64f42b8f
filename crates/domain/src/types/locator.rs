//! Remote resource addressing and protocol enumerations

use serde::{Deserialize, Serialize};

use crate::impl_wire_name_conversions;

/// Folder + object name pair identifying a list, profile extension,
/// document, campaign or custom event on the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locator {
    pub folder_name: String,
    pub object_name: String,
}

impl Locator {
    pub fn new(folder_name: impl Into<String>, object_name: impl Into<String>) -> Self {
        Self { folder_name: folder_name.into(), object_name: object_name.into() }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.folder_name, self.object_name)
    }
}

/// Column used to look up list members by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryColumn {
    Riid,
    #[default]
    EmailAddress,
    CustomerId,
    MobileNumber,
}

impl_wire_name_conversions!(QueryColumn {
    Riid => "RIID",
    EmailAddress => "EMAIL_ADDRESS",
    CustomerId => "CUSTOMER_ID",
    MobileNumber => "MOBILE_NUMBER",
});

/// How campaign recipients are identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipientIdType {
    Riid,
    #[default]
    EmailAddress,
}

impl_wire_name_conversions!(RecipientIdType {
    Riid => "RIID",
    EmailAddress => "EMAIL_ADDRESS",
});

/// Character encoding of document content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterEncoding {
    #[default]
    Utf8,
    Iso8859_1,
}

impl_wire_name_conversions!(CharacterEncoding {
    Utf8 => "UTF_8",
    Iso8859_1 => "ISO_8859_1",
});

/// Logical storefront objects the connector writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractObject {
    /// Master member list contacts are merged into.
    Member,
    /// URL-tracking profile extension of the welcome program. The
    /// connector itself never writes to it; hosts resolve it through
    /// `ResponsysConfig::locator` and pass it to
    /// `merge_into_profile_extension`.
    Url,
    /// List the welcome custom event is raised against.
    Welcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locator_serializes_camel_case() {
        let locator = Locator::new("!MasterData", "CONTACTS_LIST");
        let json = serde_json::to_value(&locator).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"folderName": "!MasterData", "objectName": "CONTACTS_LIST"})
        );
        assert_eq!(locator.to_string(), "!MasterData/CONTACTS_LIST");
    }

    #[test]
    fn defaults_match_remote_defaults() {
        assert_eq!(QueryColumn::default().as_str(), "EMAIL_ADDRESS");
        assert_eq!(RecipientIdType::default().as_str(), "EMAIL_ADDRESS");
        assert_eq!(CharacterEncoding::default().as_str(), "UTF_8");
    }
}
