use responsys_domain::types::requests::{EmptyRequest, LoginRequest};
use responsys_domain::{LoginResult, ResponsysError, Result};
use tracing::{info, instrument};

use super::gateway::{decode, Operation};
use super::ResponsysClient;
use crate::transport_ports::Transport;

impl<T: Transport> ResponsysClient<T> {
    /// Log in unless a session is already held.
    ///
    /// Called implicitly before every operation; exposed so callers can
    /// fail fast on bad credentials.
    ///
    /// # Errors
    /// The login fault, or `Serialization` if the response carries no
    /// session id.
    #[instrument(skip(self), fields(username = %self.credentials.username))]
    pub fn ensure_session(&mut self) -> Result<()> {
        if self.session_id.is_some() {
            return Ok(());
        }

        let credentials = self.credentials.clone();
        let request =
            LoginRequest { username: &credentials.username, password: &credentials.password };

        let response = self.call(Operation::Login, &request)?;
        let LoginResult { session_id } = decode(Operation::Login, response)?;

        if session_id.trim().is_empty() {
            return Err(ResponsysError::Serialization(
                "login response carried an empty session id".into(),
            ));
        }

        self.transport.attach_session(&session_id);
        self.session_id = Some(session_id);
        info!("Responsys session established");
        Ok(())
    }

    /// Log out if a session is held.
    ///
    /// The session is forgotten even when the logout call faults, so a
    /// second call is always a no-op.
    ///
    /// # Errors
    /// The logout fault.
    pub fn end_session(&mut self) -> Result<()> {
        if self.session_id.take().is_none() {
            return Ok(());
        }

        let outcome = self.call(Operation::Logout, &EmptyRequest {});
        self.transport.detach_session();

        outcome?;
        info!("Responsys session closed");
        Ok(())
    }
}
