//! Typed response payloads
//!
//! Text-only transports deliver numbers and booleans as strings, so numeric
//! and boolean fields accept either form.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use super::wire::ReceivedRecordData;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrieveListMembersResult {
    #[serde(default)]
    pub record_data: ReceivedRecordData,
}

/// Counters reported by a list or profile-extension merge.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeResult {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(default)]
    pub insert_count: u64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(default)]
    pub update_count: u64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(default)]
    pub rejected_count: u64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl MergeResult {
    /// Embedded failure message, if the envelope reports one.
    pub fn failure(&self) -> Option<&str> {
        self.error_message.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }
}

/// Outcome for one record of a profile-extension merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientResult {
    #[serde(default)]
    pub recipient_id: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl RecipientResult {
    /// Non-blank error message, if the record was rejected.
    pub fn failure(&self) -> Option<&str> {
        self.error_message.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }
}

/// Outcome for one recipient of a trigger call.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerResult {
    #[serde(default)]
    pub recipient_id: Option<String>,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Outcome for one id of a member deletion.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    #[serde(default)]
    pub id: Option<String>,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Entry of a folder listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FolderEntry {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn merge_result_accepts_text_counters() {
        let result: MergeResult = serde_json::from_value(json!({
            "insertCount": "2",
            "updateCount": 3,
            "rejectedCount": "0",
            "totalCount": "5",
            "errorMessage": ""
        }))
        .unwrap();

        assert_eq!(result.insert_count, 2);
        assert_eq!(result.update_count, 3);
        assert_eq!(result.total_count, 5);
        assert_eq!(result.failure(), None);
    }

    #[test]
    fn merge_result_reports_embedded_failure() {
        let result: MergeResult =
            serde_json::from_value(json!({"errorMessage": "Invalid column EMAIL"})).unwrap();
        assert_eq!(result.failure(), Some("Invalid column EMAIL"));
    }

    #[test]
    fn recipient_result_treats_blank_message_as_success() {
        let ok: RecipientResult =
            serde_json::from_value(json!({"recipientId": "7", "errorMessage": "  "})).unwrap();
        let rejected: RecipientResult =
            serde_json::from_value(json!({"errorMessage": "Unknown CUSTOMER_ID"})).unwrap();

        assert_eq!(ok.recipient_id.as_deref(), Some("7"));
        assert_eq!(ok.failure(), None);
        assert_eq!(rejected.failure(), Some("Unknown CUSTOMER_ID"));
    }

    #[test]
    fn trigger_result_parses_text_boolean() {
        let result: TriggerResult = serde_json::from_value(json!({
            "recipientId": "1001",
            "success": "true",
            "errorMessage": null
        }))
        .unwrap();

        assert!(result.success);
        assert_eq!(result.recipient_id.as_deref(), Some("1001"));
        assert_eq!(result.error_message, None);
    }
}
