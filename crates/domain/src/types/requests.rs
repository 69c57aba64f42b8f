//! Typed request bodies, one per remote operation
//!
//! Field names follow the remote schema (camelCase). The transport turns
//! the serialized form into its own envelope.

use serde::Serialize;

use super::locator::{CharacterEncoding, Locator, QueryColumn};
use super::merge::{MergeRuleWire, UpdateOnMatch};
use super::wire::RecordData;

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of operations that take no arguments (`logout`, `listFolders`).
#[derive(Debug, Default, Serialize)]
pub struct EmptyRequest {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrieveListMembersRequest<'a> {
    pub list: &'a Locator,
    pub query_column: QueryColumn,
    pub field_list: &'a [String],
    pub ids_to_retrieve: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeListMembersRequest<'a> {
    pub list: &'a Locator,
    pub record_data: RecordData,
    pub merge_rule: MergeRuleWire,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeIntoProfileExtensionRequest<'a> {
    pub profile_extension: &'a Locator,
    pub record_data: RecordData,
    pub insert_on_no_match: bool,
    pub update_on_match: UpdateOnMatch,
    pub match_column: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteListMembersRequest<'a> {
    pub list: &'a Locator,
    pub query_column: QueryColumn,
    pub ids_to_delete: &'a [String],
}

/// Recipient of a triggered message or event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub list_name: Locator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

/// Extra personalisation value passed with a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionalData {
    pub name: String,
    pub value: String,
}

/// One recipient entry of a trigger call. `optional_data: None` is sent as
/// an explicit nil.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientData {
    pub recipient: Recipient,
    pub optional_data: Option<Vec<OptionalData>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerCampaignMessageRequest<'a> {
    pub campaign: &'a Locator,
    pub recipient_data: Vec<RecipientData>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEvent<'a> {
    pub event_name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerCustomEventRequest<'a> {
    pub custom_event: CustomEvent<'a>,
    pub recipient_data: Vec<RecipientData>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRequest<'a> {
    pub folder_name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest<'a> {
    pub document: &'a Locator,
    pub content: &'a str,
    pub character_encoding: CharacterEncoding,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDocumentContentRequest<'a> {
    pub document: &'a Locator,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest<'a> {
    pub document: &'a Locator,
}
