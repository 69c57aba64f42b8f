use responsys_domain::constants::{DEFAULT_FIELD_LIST, MAX_IDS_PER_CALL, MIN_IDS_PER_CALL};
use responsys_domain::types::requests::{
    DeleteListMembersRequest, MergeIntoProfileExtensionRequest, MergeListMembersRequest,
    RetrieveListMembersRequest,
};
use responsys_domain::types::responses::RetrieveListMembersResult;
use responsys_domain::types::wire::is_blank;
use responsys_domain::{
    DeleteResult, Locator, MergeResult, MergeRule, OneOrMany, QueryColumn, RecipientResult, Record,
    ResponsysError, Result, UpdateOnMatch,
};
use serde_json::Value;
use tracing::{debug, info};

use super::gateway::{decode, decode_list, Operation};
use super::ResponsysClient;
use crate::codec;
use crate::transport_ports::Transport;

/// Columns returned by a retrieval when the caller has no preference.
pub fn default_field_list() -> Vec<String> {
    DEFAULT_FIELD_LIST.iter().map(|field| (*field).to_string()).collect()
}

impl<T: Transport> ResponsysClient<T> {
    /// Fetch members of `list` by id.
    ///
    /// # Errors
    /// `Validation` unless 1..=200 ids are given (nothing is sent);
    /// `RemoteFault` when the service rejects the call.
    pub fn retrieve_list_members(
        &mut self,
        list: &Locator,
        ids: &[String],
        query_column: QueryColumn,
        field_list: &[String],
    ) -> Result<Vec<Record>> {
        if !(MIN_IDS_PER_CALL..=MAX_IDS_PER_CALL).contains(&ids.len()) {
            return Err(ResponsysError::validation(format!(
                "retrieveListMembers accepts between {MIN_IDS_PER_CALL} and {MAX_IDS_PER_CALL} ids, got {}",
                ids.len()
            )));
        }

        let request =
            RetrieveListMembersRequest { list, query_column, field_list, ids_to_retrieve: ids };
        let response = self.invoke(Operation::RetrieveListMembers, &request)?;
        if is_blank(&response) {
            return Ok(Vec::new());
        }

        let result: RetrieveListMembersResult = decode(Operation::RetrieveListMembers, response)?;
        let members = codec::decode_table(result.record_data);
        debug!(list = %list, requested = ids.len(), returned = members.len(), "Retrieved list members");
        Ok(members)
    }

    /// Insert or update members of `list`.
    ///
    /// # Errors
    /// `Validation` for a rule without match columns (nothing is sent);
    /// `EmbeddedError` when the response reports a failure message.
    pub fn merge_list_members(
        &mut self,
        list: &Locator,
        records: &[Record],
        rule: &MergeRule,
    ) -> Result<MergeResult> {
        let merge_rule = rule.to_wire()?;
        let request =
            MergeListMembersRequest { list, record_data: codec::encode(records), merge_rule };

        let response = self.invoke(Operation::MergeListMembers, &request)?;
        let result = merge_result(Operation::MergeListMembers, response)?;
        info!(
            list = %list,
            records = records.len(),
            inserted = result.insert_count,
            updated = result.update_count,
            rejected = result.rejected_count,
            "Merged list members"
        );
        Ok(result)
    }

    /// Insert or update rows of a profile-extension table keyed by
    /// `match_column`.
    ///
    /// The service answers with one result per record. A list is returned
    /// as is, rejected entries included.
    ///
    /// # Errors
    /// `Validation` for a blank match column (nothing is sent);
    /// `EmbeddedError` when a single bare result carries a failure message.
    pub fn merge_into_profile_extension(
        &mut self,
        profile_extension: &Locator,
        records: &[Record],
        insert_on_no_match: bool,
        update_on_match: UpdateOnMatch,
        match_column: &str,
    ) -> Result<Vec<RecipientResult>> {
        let match_column = match_column.trim();
        if match_column.is_empty() {
            return Err(ResponsysError::validation("Profile extension match column is required"));
        }

        let request = MergeIntoProfileExtensionRequest {
            profile_extension,
            record_data: codec::encode(records),
            insert_on_no_match,
            update_on_match,
            match_column: match_column.to_string(),
        };

        let response = self.invoke(Operation::MergeIntoProfileExtension, &request)?;
        let results = profile_extension_results(response)?;
        info!(
            profile_extension = %profile_extension,
            records = records.len(),
            rejected = results.iter().filter(|r| r.failure().is_some()).count(),
            "Merged profile extension rows"
        );
        Ok(results)
    }

    /// Remove members of `list` by id. Results come back per id.
    pub fn delete_list_members(
        &mut self,
        list: &Locator,
        ids: &[String],
        query_column: QueryColumn,
    ) -> Result<Vec<DeleteResult>> {
        let request = DeleteListMembersRequest { list, query_column, ids_to_delete: ids };
        let response = self.invoke(Operation::DeleteListMembers, &request)?;
        let results: Vec<DeleteResult> = decode_list(Operation::DeleteListMembers, response)?;
        debug!(list = %list, requested = ids.len(), "Deleted list members");
        Ok(results)
    }
}

fn merge_result(operation: Operation, response: Value) -> Result<MergeResult> {
    if is_blank(&response) {
        return Ok(MergeResult::default());
    }

    let result: MergeResult = decode(operation, response)?;
    if let Some(message) = result.failure() {
        return Err(ResponsysError::EmbeddedError(message.to_string()));
    }
    Ok(result)
}

fn profile_extension_results(response: Value) -> Result<Vec<RecipientResult>> {
    if is_blank(&response) {
        return Ok(Vec::new());
    }

    match decode::<OneOrMany<RecipientResult>>(Operation::MergeIntoProfileExtension, response)? {
        OneOrMany::One(result) => {
            if let Some(message) = result.failure() {
                return Err(ResponsysError::EmbeddedError(message.to_string()));
            }
            Ok(vec![result])
        }
        OneOrMany::Many(results) => Ok(results),
    }
}
