//! Responsys Interact client
//!
//! One client owns one transport and at most one authenticated session.
//! Every remote operation goes through the gateway in [`gateway`], which
//! logs in on demand, classifies faults and remembers the last one.
//!
//! The session is released when the client is closed or dropped. Logout
//! failures during drop are logged and swallowed.

mod documents;
mod gateway;
mod members;
mod session;
mod triggers;

use responsys_domain::{ClassifiedFault, Credentials, Result};
use tracing::warn;

use crate::transport_ports::Transport;

pub use members::default_field_list;

/// Client for the Responsys Interact web service.
///
/// Not safe for concurrent use; callers serialize access (`&mut self`).
pub struct ResponsysClient<T: Transport> {
    transport: T,
    credentials: Credentials,
    session_id: Option<String>,
    last_error: Option<ClassifiedFault>,
}

impl<T: Transport> ResponsysClient<T> {
    /// Create a client that logs in lazily on its first operation.
    pub fn new(credentials: Credentials, transport: T) -> Self {
        Self { transport, credentials, session_id: None, last_error: None }
    }

    /// Create a client and log in immediately.
    ///
    /// # Errors
    /// The login fault, classified as [`responsys_domain::ResponsysError::RemoteFault`].
    pub fn connect(credentials: Credentials, transport: T) -> Result<Self> {
        let mut client = Self::new(credentials, transport);
        client.ensure_session()?;
        Ok(client)
    }

    /// Log out and consume the client.
    ///
    /// # Errors
    /// The logout fault. The session is considered ended either way.
    pub fn close(mut self) -> Result<()> {
        self.end_session()
    }

    /// Message of the most recent remote fault, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_ref().map(|fault| fault.message.as_str())
    }

    /// Code of the most recent remote fault, if any.
    pub fn last_error_code(&self) -> Option<&str> {
        self.last_error.as_ref().map(|fault| fault.code.as_str())
    }

    pub fn is_logged_in(&self) -> bool {
        self.session_id.is_some()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> Drop for ResponsysClient<T> {
    fn drop(&mut self) {
        if let Err(err) = self.end_session() {
            warn!(error = %err, "Failed to log out of Responsys while dropping client");
        }
    }
}
