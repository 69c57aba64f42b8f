//! Wire-level shapes shared by the codec, the gateway and the transports
//!
//! The remote service collapses single-element sequences to a bare value
//! (one matching row comes back as an object, one requested column as a
//! string). [`OneOrMany`] absorbs that at decode time so the rest of the
//! code only ever sees vectors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A value the remote service may send either bare or as a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// Normalise to a vector; a bare value becomes a one-element vector.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Many(items) => items.len(),
            Self::One(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Many(items)
    }
}

/// Wire Table: column names plus positional rows.
///
/// Every row carries exactly `field_names.len()` values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordData {
    pub field_names: Vec<String>,
    pub records: Vec<WireRecord>,
}

/// One positional row of a [`RecordData`]. Unfilled positions are `Null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRecord {
    pub field_values: Vec<Value>,
}

/// Wire Table as received; either side may be collapsed to a bare value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedRecordData {
    #[serde(default)]
    pub field_names: OneOrMany<String>,
    #[serde(default)]
    pub records: Option<OneOrMany<ReceivedRecord>>,
}

/// One row as received; a single requested column arrives as a bare value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedRecord {
    #[serde(default)]
    pub field_values: Option<OneOrMany<Value>>,
}

/// A fault raised by the transport.
///
/// `fault_string` names the fault type (`ListFault`, `DocumentFault`, ...).
/// For some fault types `detail` holds a structure keyed by that type name
/// carrying `exceptionCode` and `exceptionMessage`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{fault_code}: {fault_string}")]
pub struct Fault {
    pub fault_code: String,
    pub fault_string: String,
    pub detail: Option<Value>,
}

impl Fault {
    pub fn new(fault_code: impl Into<String>, fault_string: impl Into<String>) -> Self {
        Self { fault_code: fault_code.into(), fault_string: fault_string.into(), detail: None }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: Value) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Fault for an HTTP exchange that failed without a SOAP fault body.
    pub fn http(message: impl Into<String>) -> Self {
        Self::new(crate::constants::HTTP_FAULT_CODE, message)
    }
}

/// Stable (message, code) pair derived from a [`Fault`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedFault {
    pub message: String,
    pub code: String,
}

/// True for the shapes the remote service uses to say "nothing": null, an
/// empty string or an empty object/sequence.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Interpret a boolean result. Transports that only know text send
/// `"true"`/`"false"`.
pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        _ => None,
    }
}
