//! Transport port interface
//!
//! The client never talks HTTP itself. Everything below the gateway goes
//! through a [`Transport`], which lets production code plug in the SOAP
//! adapter from `responsys-infra` and tests plug in an in-memory fake.

use responsys_domain::Fault;
use serde_json::Value;

/// Request/response channel to the remote service.
///
/// Calls are synchronous and blocking. Implementations own whatever session
/// state the wire protocol needs (session header, cookies) once
/// [`Transport::attach_session`] has been called.
pub trait Transport: Send {
    /// Invoke a named remote operation with a serialized request body.
    ///
    /// Returns the operation's response element as a value tree, or the
    /// fault the remote service (or the HTTP exchange) raised.
    fn invoke(&mut self, operation: &str, payload: &Value) -> Result<Value, Fault>;

    /// Attach a session id to every subsequent call.
    fn attach_session(&mut self, session_id: &str);

    /// Forget any session id and session cookie.
    fn detach_session(&mut self);
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn invoke(&mut self, operation: &str, payload: &Value) -> Result<Value, Fault> {
        (**self).invoke(operation, payload)
    }

    fn attach_session(&mut self, session_id: &str) {
        (**self).attach_session(session_id);
    }

    fn detach_session(&mut self) {
        (**self).detach_session();
    }
}
