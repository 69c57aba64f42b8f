//! Shared test helpers for `responsys-core` integration tests.
//!
//! [`FakeTransport`] records every call and answers from per-operation
//! scripts, so tests can assert on exactly what went over the wire.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;
use responsys_core::Transport;
use responsys_domain::{Credentials, Fault};
use serde_json::{json, Value};

pub const SESSION_ID: &str = "session-1";

/// One recorded remote call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub operation: String,
    pub payload: Value,
    /// Session attached when the call was made.
    pub session: Option<String>,
}

#[derive(Default)]
struct FakeState {
    calls: Vec<RecordedCall>,
    scripts: HashMap<String, VecDeque<Result<Value, Fault>>>,
    session: Option<String>,
    detached: usize,
}

/// In-memory transport. Clones share state, so a test keeps one handle
/// while the client owns another.
///
/// Unscripted calls succeed: `login` returns [`SESSION_ID`], everything
/// else returns `true`.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeState>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response for the next call to `operation`.
    pub fn respond(&self, operation: &str, response: Value) -> &Self {
        self.push(operation, Ok(response))
    }

    /// Queue a fault for the next call to `operation`.
    pub fn fail(&self, operation: &str, fault: Fault) -> &Self {
        self.push(operation, Err(fault))
    }

    fn push(&self, operation: &str, outcome: Result<Value, Fault>) -> &Self {
        self.state.lock().scripts.entry(operation.to_string()).or_default().push_back(outcome);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().calls.clone()
    }

    pub fn operations(&self) -> Vec<String> {
        self.state.lock().calls.iter().map(|call| call.operation.clone()).collect()
    }

    pub fn calls_to(&self, operation: &str) -> Vec<RecordedCall> {
        self.state.lock().calls.iter().filter(|call| call.operation == operation).cloned().collect()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls_to(operation).len()
    }

    pub fn session(&self) -> Option<String> {
        self.state.lock().session.clone()
    }

    pub fn detached(&self) -> usize {
        self.state.lock().detached
    }
}

impl Transport for FakeTransport {
    fn invoke(&mut self, operation: &str, payload: &Value) -> Result<Value, Fault> {
        let mut state = self.state.lock();
        let session = state.session.clone();
        state.calls.push(RecordedCall {
            operation: operation.to_string(),
            payload: payload.clone(),
            session,
        });

        if let Some(outcome) = state.scripts.get_mut(operation).and_then(VecDeque::pop_front) {
            return outcome;
        }

        Ok(default_response(operation))
    }

    fn attach_session(&mut self, session_id: &str) {
        self.state.lock().session = Some(session_id.to_string());
    }

    fn detach_session(&mut self) {
        let mut state = self.state.lock();
        state.session = None;
        state.detached += 1;
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("api_user", "s3cret")
}

/// Fault shaped like the service's: type in the fault string, code and
/// message nested under the type name.
pub fn fault(fault_type: &str, code: &str, message: &str) -> Fault {
    Fault::new("Server", fault_type).with_detail(json!({
        fault_type: {"exceptionCode": code, "exceptionMessage": message}
    }))
}

pub fn ids(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("user{i}@example.com")).collect()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Reply for an operation nothing was scripted for: a fresh session for
/// `login`, an empty list or table for list-shaped results, `true` for the
/// boolean operations.
fn default_response(operation: &str) -> Value {
    match operation {
        "login" => json!({"result": {"sessionId": SESSION_ID}}),
        "listFolders"
        | "deleteListMembers"
        | "mergeIntoProfileExtension"
        | "triggerCampaignMessage"
        | "triggerCustomEvent" => json!({"result": []}),
        "retrieveListMembers" | "mergeListMembers" => json!({"result": {}}),
        _ => json!({"result": "true"}),
    }
}
