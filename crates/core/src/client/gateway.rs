//! Single chokepoint for remote calls
//!
//! Serializes the typed request, hands it to the transport, unwraps the
//! `result` element and turns faults into classified errors.

use responsys_domain::types::wire::is_blank;
use responsys_domain::{OneOrMany, ResponsysError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::ResponsysClient;
use crate::faults::classify;
use crate::transport_ports::Transport;

/// Remote operations, named as the service names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    Login,
    Logout,
    RetrieveListMembers,
    MergeListMembers,
    MergeIntoProfileExtension,
    DeleteListMembers,
    TriggerCampaignMessage,
    TriggerCustomEvent,
    CreateFolder,
    DeleteFolder,
    ListFolders,
    CreateDocument,
    SetDocumentContent,
    DeleteDocument,
}

impl Operation {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
            Self::RetrieveListMembers => "retrieveListMembers",
            Self::MergeListMembers => "mergeListMembers",
            Self::MergeIntoProfileExtension => "mergeIntoProfileExtension",
            Self::DeleteListMembers => "deleteListMembers",
            Self::TriggerCampaignMessage => "triggerCampaignMessage",
            Self::TriggerCustomEvent => "triggerCustomEvent",
            Self::CreateFolder => "createFolder",
            Self::DeleteFolder => "deleteFolder",
            Self::ListFolders => "listFolders",
            Self::CreateDocument => "createDocument",
            Self::SetDocumentContent => "setDocumentContent",
            Self::DeleteDocument => "deleteDocument",
        }
    }

    const fn requires_session(self) -> bool {
        !matches!(self, Self::Login | Self::Logout)
    }
}

impl<T: Transport> ResponsysClient<T> {
    /// Run an operation, logging in first when needed.
    pub(super) fn invoke<R: Serialize>(&mut self, operation: Operation, request: &R) -> Result<Value> {
        if operation.requires_session() {
            self.ensure_session()?;
        }
        self.call(operation, request)
    }

    /// Run an operation on the current session state.
    ///
    /// A fault is classified, remembered as the last error and returned as
    /// `RemoteFault`. A successful call leaves the last error untouched.
    #[instrument(
        level = "debug",
        skip_all,
        fields(operation = operation.as_str(), correlation_id = %Uuid::new_v4())
    )]
    pub(super) fn call<R: Serialize>(&mut self, operation: Operation, request: &R) -> Result<Value> {
        let payload = serde_json::to_value(request).map_err(|e| {
            ResponsysError::Serialization(format!(
                "failed to encode {} request: {e}",
                operation.as_str()
            ))
        })?;

        match self.transport.invoke(operation.as_str(), &payload) {
            Ok(response) => {
                debug!("Remote operation succeeded");
                Ok(unwrap_result(response))
            }
            Err(fault) => {
                let classified = classify(&fault);
                warn!(
                    code = %classified.code,
                    message = %classified.message,
                    "Remote operation faulted"
                );
                let error = ResponsysError::RemoteFault {
                    message: classified.message.clone(),
                    code: classified.code.clone(),
                };
                self.last_error = Some(classified);
                Err(error)
            }
        }
    }
}

/// Strip the `result` wrapper the service puts around every response body.
pub(super) fn unwrap_result(response: Value) -> Value {
    match response {
        Value::Object(mut map) if map.contains_key("result") => {
            map.remove("result").unwrap_or(Value::Null)
        }
        other => other,
    }
}

pub(super) fn decode<D: DeserializeOwned>(operation: Operation, value: Value) -> Result<D> {
    serde_json::from_value(value).map_err(|e| {
        ResponsysError::Serialization(format!(
            "unexpected {} response: {e}",
            operation.as_str()
        ))
    })
}

/// Decode a result that is a list, a single bare item or nothing at all.
pub(super) fn decode_list<D: DeserializeOwned>(operation: Operation, value: Value) -> Result<Vec<D>> {
    if is_blank(&value) {
        return Ok(Vec::new());
    }
    decode::<OneOrMany<D>>(operation, value).map(OneOrMany::into_vec)
}

pub(super) fn decode_bool(operation: Operation, value: &Value) -> Result<bool> {
    responsys_domain::types::wire::as_bool(value).ok_or_else(|| {
        ResponsysError::Serialization(format!(
            "expected a boolean {} result, got {value}",
            operation.as_str()
        ))
    })
}
