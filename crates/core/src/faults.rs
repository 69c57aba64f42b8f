//! Fault classification
//!
//! The remote service names the fault type in the fault string and, for
//! some types only, nests a machine-readable code and message inside a
//! detail element keyed by that type name:
//!
//! ```text
//! faultstring: ListFault
//! detail:      { ListFault: { exceptionCode: LIST_NOT_FOUND, exceptionMessage: ... } }
//! ```

use responsys_domain::{ClassifiedFault, Fault};
use serde_json::Value;

/// Map a raised fault to a stable (message, code) pair.
///
/// `message` is `"{type}: {exceptionMessage}"` with an empty message when
/// the detail is absent; `code` is the nested `exceptionCode` when present,
/// otherwise the fault's own code.
pub fn classify(fault: &Fault) -> ClassifiedFault {
    let fault_type = fault.fault_string.as_str();
    let detail = fault.detail.as_ref().and_then(|detail| detail.get(fault_type));

    let exception_message =
        detail.and_then(|d| d.get("exceptionMessage")).map(text).unwrap_or_default();

    let code = detail
        .and_then(|d| d.get("exceptionCode"))
        .map(text)
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| fault.fault_code.clone());

    ClassifiedFault { message: format!("{fault_type}: {exception_message}"), code }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
