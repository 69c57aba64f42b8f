//! Upsert conflict rules

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MATCH_COLUMN;
use crate::errors::{ResponsysError, Result};
use crate::impl_wire_name_conversions;

/// What a merge does when an incoming record matches an existing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateOnMatch {
    NoUpdate,
    #[default]
    ReplaceAll,
    ReplaceIfExistingBlank,
    ReplaceIfNewBlank,
}

impl_wire_name_conversions!(UpdateOnMatch {
    NoUpdate => "NO_UPDATE",
    ReplaceAll => "REPLACE_ALL",
    ReplaceIfExistingBlank => "REPLACE_IF_EXISTING_BLANK",
    ReplaceIfNewBlank => "REPLACE_IF_NEW_BLANK",
});

/// Upsert policy for list merges.
///
/// Up to three match columns identify an existing row. Columns are trimmed
/// before use and blank columns are ignored; at least one must remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRule {
    pub insert_on_no_match: bool,
    pub update_on_match: UpdateOnMatch,
    pub match_columns: [String; 3],
}

impl Default for MergeRule {
    fn default() -> Self {
        Self {
            insert_on_no_match: true,
            update_on_match: UpdateOnMatch::ReplaceAll,
            match_columns: [DEFAULT_MATCH_COLUMN.to_string(), String::new(), String::new()],
        }
    }
}

impl MergeRule {
    /// Rule matching on a single column, inserting unmatched rows and
    /// replacing all fields of matched ones.
    pub fn matching(column: impl Into<String>) -> Self {
        Self {
            match_columns: [column.into(), String::new(), String::new()],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn insert_on_no_match(mut self, insert: bool) -> Self {
        self.insert_on_no_match = insert;
        self
    }

    #[must_use]
    pub fn update_on_match(mut self, update: UpdateOnMatch) -> Self {
        self.update_on_match = update;
        self
    }

    /// Set the second and third match columns.
    #[must_use]
    pub fn also_matching(mut self, second: impl Into<String>, third: impl Into<String>) -> Self {
        self.match_columns[1] = second.into();
        self.match_columns[2] = third.into();
        self
    }

    /// Trimmed, non-blank match columns in slot order.
    ///
    /// # Errors
    /// `ResponsysError::Validation` when every column is blank.
    pub fn effective_match_columns(&self) -> Result<Vec<String>> {
        let columns: Vec<String> = self
            .match_columns
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        if columns.is_empty() {
            return Err(ResponsysError::validation("There must be at least 1 column to match on"));
        }
        Ok(columns)
    }

    /// Wire form of the rule. Effective columns fill `matchColumnName1..3`
    /// in order.
    ///
    /// # Errors
    /// Same as [`MergeRule::effective_match_columns`].
    pub fn to_wire(&self) -> Result<MergeRuleWire> {
        let mut columns = self.effective_match_columns()?.into_iter();
        Ok(MergeRuleWire {
            insert_on_no_match: self.insert_on_no_match,
            update_on_match: self.update_on_match,
            match_column_name1: columns.next(),
            match_column_name2: columns.next(),
            match_column_name3: columns.next(),
        })
    }
}

/// `mergeRule` element as sent to the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeRuleWire {
    pub insert_on_no_match: bool,
    pub update_on_match: UpdateOnMatch,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_column_name1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_column_name2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_column_name3: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rule_matches_customer_id() {
        let wire = MergeRule::default().to_wire().unwrap();
        assert!(wire.insert_on_no_match);
        assert_eq!(wire.update_on_match, UpdateOnMatch::ReplaceAll);
        assert_eq!(wire.match_column_name1.as_deref(), Some("CUSTOMER_ID_"));
        assert_eq!(wire.match_column_name2, None);
    }

    #[test]
    fn blank_columns_are_rejected() {
        let rule = MergeRule::matching("  ").also_matching("", "\t");
        let err = rule.to_wire().unwrap_err();
        assert!(matches!(err, ResponsysError::Validation(_)));
    }

    #[test]
    fn columns_are_trimmed_and_compacted() {
        let rule = MergeRule::matching("").also_matching("  EMAIL_ADDRESS_ ", "RIID_");
        let wire = rule.to_wire().unwrap();
        assert_eq!(wire.match_column_name1.as_deref(), Some("EMAIL_ADDRESS_"));
        assert_eq!(wire.match_column_name2.as_deref(), Some("RIID_"));
        assert_eq!(wire.match_column_name3, None);
    }

    #[test]
    fn wire_form_omits_unused_columns() {
        let wire = MergeRule::matching("CUSTOMER_ID_")
            .update_on_match(UpdateOnMatch::NoUpdate)
            .insert_on_no_match(false)
            .to_wire()
            .unwrap();
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "insertOnNoMatch": false,
                "updateOnMatch": "NO_UPDATE",
                "matchColumnName1": "CUSTOMER_ID_"
            })
        );
    }
}
